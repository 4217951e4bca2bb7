//! Shared application state for all routes.

use crate::store::CountryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CountryStore>,
}

impl AppState {
    pub fn new(store: impl CountryStore + 'static) -> Self {
        AppState { store: Arc::new(store) }
    }
}
