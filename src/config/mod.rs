//! Startup configuration: environment selection, database settings, listen address.

mod loader;
mod types;
pub use loader::{load_dotenv, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT};
pub use types::{AppConfig, AppEnv, DatabaseConfig};
