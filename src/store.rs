//! Database access: pool construction, database bootstrap, and the countries store.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::model::Country;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

/// Read access to the `countries` table. Handlers receive it through `AppState`.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// Every row, ordered by `country_id`. Empty when the table is empty.
    async fn fetch_all(&self) -> Result<Vec<Country>, AppError>;
}

#[derive(Clone)]
pub struct PgCountryStore {
    pool: PgPool,
}

impl PgCountryStore {
    pub fn new(pool: PgPool) -> Self {
        PgCountryStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CountryStore for PgCountryStore {
    async fn fetch_all(&self) -> Result<Vec<Country>, AppError> {
        let rows = sqlx::query_as::<_, Country>("SELECT * FROM countries ORDER BY country_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Build the shared pool. Fails if the first connection cannot be opened.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options.clone())
        .await?;
    tracing::debug!(
        database = config.connect_options.get_database().unwrap_or("-"),
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Ensure the database named in `options` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = match options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = options.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_doubles_quotes() {
        assert_eq!(quote_ident("countries"), "\"countries\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
