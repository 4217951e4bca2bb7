//! Application assembly: routes, error fallback, request layers.

use crate::handlers::not_found_handler;
use crate::middleware::parse_json_body;
use crate::routes::{common_routes, countries_routes};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(countries_routes(state))
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(parse_json_body)),
        )
}
