//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} env variable not set")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("fixture read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("fixture parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Request-level failures, one variant per error category the HTTP layer distinguishes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Raised on purpose by service code and carries its own status.
    #[error("{message}: {details}")]
    Domain {
        status: StatusCode,
        message: String,
        details: String,
    },
    /// Database error reported with a SQLSTATE code.
    #[error("database error {code}: {message}")]
    Storage { code: String, message: String },
    #[error("unclassified: {0}")]
    Unclassified(String),
    #[error("path not found")]
    RouteNotFound,
}

impl AppError {
    pub fn not_found(details: impl Into<String>) -> Self {
        AppError::Domain {
            status: StatusCode::NOT_FOUND,
            message: "Not Found".into(),
            details: details.into(),
        }
    }

    /// SQLSTATE for storage errors, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            AppError::Storage { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) => match db.code() {
                Some(code) => AppError::Storage {
                    code: code.into_owned(),
                    message: db.message().to_string(),
                },
                None => AppError::Unclassified(e.to_string()),
            },
            _ => AppError::Unclassified(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let reply = crate::handlers::errors::resolve(&self);
        (reply.status, Json(reply.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_sqlx_errors_are_unclassified() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Unclassified(_)));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn not_found_builds_domain_error() {
        match AppError::not_found("No countries found") {
            AppError::Domain {
                status,
                message,
                details,
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Not Found");
                assert_eq!(details, "No countries found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
