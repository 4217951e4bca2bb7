//! Server entry point: load config, open the pool, serve the API.

use countries_api::{build_app, connect, AppConfig, AppState, PgCountryStore};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countries_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config.database).await?;
    let state = AppState::new(PgCountryStore::new(pool));

    let listener = TcpListener::bind(config.bind_target()).await?;
    tracing::info!(env = config.env.as_str(), "Server listening on {}", listener.local_addr()?);
    axum::serve(listener, build_app(state)).await?;
    Ok(())
}
