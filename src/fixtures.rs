//! Seed data sets per environment, plus loading a data set from a JSON file.

use crate::config::AppEnv;
use crate::error::SeedError;
use crate::model::CountrySeed;
use std::path::Path;

const COUNTRIES: &[(&str, &str)] = &[("France", "Paris"), ("Italy", "Rome"), ("Spain", "Madrid")];

fn build(rows: &[(&str, &str)]) -> Vec<CountrySeed> {
    rows.iter().map(|(name, capital)| CountrySeed::new(*name, *capital)).collect()
}

pub fn development_countries() -> Vec<CountrySeed> {
    build(COUNTRIES)
}

pub fn test_countries() -> Vec<CountrySeed> {
    build(COUNTRIES)
}

/// Data set used by `seed-db` when no fixture file is given.
pub fn for_environment(env: AppEnv) -> Vec<CountrySeed> {
    match env {
        AppEnv::Test => test_countries(),
        AppEnv::Development | AppEnv::Production => development_countries(),
    }
}

/// Read a JSON array of `{ "name", "capital" }` objects.
pub fn load_json(path: &Path) -> Result<Vec<CountrySeed>, SeedError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse { path: display, source })
}
