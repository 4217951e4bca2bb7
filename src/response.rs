//! Response envelopes.

use crate::model::Country;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CountriesBody {
    pub countries: Vec<Country>,
}

pub fn countries_ok(countries: Vec<Country>) -> (StatusCode, Json<CountriesBody>) {
    (StatusCode::OK, Json(CountriesBody { countries }))
}

/// Terminal outcome of the error chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReply {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a str>,
}

impl ErrorReply {
    pub fn new(status: StatusCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        ErrorReply {
            status,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            message: &self.message,
            details: self.details.as_deref(),
        }
    }
}
