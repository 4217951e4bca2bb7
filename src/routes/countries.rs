use crate::handlers::{get_countries, not_found_handler};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /countries, with or without a trailing slash. Other methods on the path reply
/// 404 like an unmatched path.
pub fn countries_routes(state: AppState) -> Router {
    let countries = get(get_countries).fallback(not_found_handler);
    Router::new()
        .route("/countries", countries.clone())
        .route("/countries/", countries)
        .with_state(state)
}
