//! Root greeting.

use crate::handlers::not_found_handler;
use axum::{routing::get, Router};

async fn hello() -> &'static str {
    "Hello, world!"
}

/// GET /.
pub fn common_routes() -> Router {
    Router::new().route("/", get(hello).fallback(not_found_handler))
}
