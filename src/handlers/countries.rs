//! Countries controller.

use crate::error::AppError;
use crate::response::countries_ok;
use crate::service::CountryService;
use crate::state::AppState;
use axum::extract::State;

/// GET /countries. Failures go to the error chain untouched.
pub async fn get_countries(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let countries = CountryService::find_all_countries(state.store.as_ref()).await?;
    tracing::debug!(count = countries.len(), "listed countries");
    Ok(countries_ok(countries))
}
