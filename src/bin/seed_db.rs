//! Seed the database, then close the pool.

use clap::Parser;
use countries_api::{connect, ensure_database_exists, fixtures, seed, AppConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seed-db", about = "Drop, recreate and populate the countries table")]
struct Args {
    /// JSON array of {"name", "capital"} records. Defaults to the data set for APP_ENV.
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Create the target database first if it does not exist.
    #[arg(long)]
    create_database: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countries_api=info")))
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;
    let records = match &args.fixture {
        Some(path) => fixtures::load_json(path)?,
        None => fixtures::for_environment(config.env),
    };

    if args.create_database {
        ensure_database_exists(&config.database.connect_options).await?;
    }
    let pool = connect(&config.database).await?;
    let result = seed(&pool, &records).await;
    pool.close().await;
    let rows = result?;
    tracing::info!(rows, env = config.env.as_str(), "seed complete");
    Ok(())
}
