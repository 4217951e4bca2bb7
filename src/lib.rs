//! Countries API: a REST endpoint over a PostgreSQL `countries` table, with seeding.

pub mod app;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use app::build_app;
pub use config::{AppConfig, AppEnv};
pub use error::{AppError, ConfigError, SeedError};
pub use model::{Country, CountrySeed};
pub use seed::seed;
pub use service::CountryService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, CountryStore, PgCountryStore};
