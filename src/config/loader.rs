//! Load configuration from the environment (optionally seeded from `.env.<APP_ENV>`).

use crate::config::types::{AppConfig, AppEnv, DatabaseConfig};
use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Load `.env.<env>` from the working directory into the process environment.
/// Variables already set win. A missing file is not an error.
pub fn load_dotenv(env: AppEnv) -> Option<PathBuf> {
    let file = format!(".env.{}", env.as_str());
    match dotenvy::from_filename(&file) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Some(path)
        }
        Err(e) => {
            tracing::debug!(file = %file, error = %e, "env file not loaded");
            None
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

fn database_config(lookup: &impl Fn(&str) -> Option<String>) -> Result<DatabaseConfig, ConfigError> {
    let max_connections = parse_var(lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
    if max_connections == 0 {
        return Err(ConfigError::Invalid {
            var: "DB_MAX_CONNECTIONS",
            value: "0".into(),
        });
    }

    if let Some(url) = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty()) {
        let connect_options =
            PgConnectOptions::from_str(&url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
        return Ok(DatabaseConfig {
            connect_options,
            max_connections,
        });
    }

    let database = lookup("PGDATABASE")
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingVar("PGDATABASE"))?;
    let mut opts = PgConnectOptions::new().database(&database);
    if let Some(host) = lookup("PGHOST") {
        opts = opts.host(&host);
    }
    if lookup("PGPORT").is_some() {
        opts = opts.port(parse_var(lookup, "PGPORT", 5432u16)?);
    }
    if let Some(user) = lookup("PGUSER") {
        opts = opts.username(&user);
    }
    if let Some(password) = lookup("PGPASSWORD") {
        opts = opts.password(&password);
    }
    Ok(DatabaseConfig {
        connect_options: opts,
        max_connections,
    })
}

impl AppConfig {
    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = match lookup("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => AppEnv::Development,
        };
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let database = database_config(&lookup)?;
        Ok(AppConfig {
            env,
            host,
            port,
            database,
        })
    }

    /// Load `.env.<APP_ENV>` then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = match std::env::var("APP_ENV") {
            Ok(raw) => raw.parse()?,
            Err(_) => AppEnv::Development,
        };
        load_dotenv(env);
        Self::from_lookup(|k| std::env::var(k).ok())
    }
}
