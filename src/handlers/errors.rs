//! Error chain: ordered handlers that each either reply or forward to the next.

use crate::error::AppError;
use crate::response::ErrorReply;
use axum::http::StatusCode;
use std::ops::ControlFlow;

/// SQLSTATE 22P02.
pub const CODE_INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// SQLSTATE 23502.
pub const CODE_NOT_NULL_VIOLATION: &str = "23502";

/// A chain stage. `Break` ends the chain with a reply, `Continue` forwards.
pub type ErrorHandler = fn(&AppError) -> ControlFlow<ErrorReply>;

/// Stages run in this order; `server_error_handler` follows as the terminal stage.
pub const ERROR_CHAIN: &[ErrorHandler] = &[domain_error_handler, storage_error_handler];

/// Errors that carry their own status reply with their own message and details.
pub fn domain_error_handler(err: &AppError) -> ControlFlow<ErrorReply> {
    match err {
        AppError::Domain {
            status,
            message,
            details,
        } => ControlFlow::Break(ErrorReply::new(*status, message.as_str(), details.as_str())),
        _ => ControlFlow::Continue(()),
    }
}

pub fn storage_error_handler(err: &AppError) -> ControlFlow<ErrorReply> {
    let details = match err.code() {
        Some(CODE_INVALID_TEXT_REPRESENTATION) => "Invalid text representation",
        Some(CODE_NOT_NULL_VIOLATION) => "Not null violation",
        _ => return ControlFlow::Continue(()),
    };
    ControlFlow::Break(ErrorReply::new(StatusCode::BAD_REQUEST, "Bad Request", details))
}

/// Terminal stage. Details stay in the server log.
pub fn server_error_handler(err: &AppError) -> ErrorReply {
    tracing::error!(code = err.code().unwrap_or("-"), error = %err, "unhandled error");
    ErrorReply {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Internal Server Error".into(),
        details: None,
    }
}

pub fn route_not_found() -> ErrorReply {
    ErrorReply::new(StatusCode::NOT_FOUND, "Not Found", "Path not found")
}

/// Router fallback for unmatched paths and unsupported methods.
pub async fn not_found_handler() -> AppError {
    AppError::RouteNotFound
}

/// Turn an error into its reply. Unmatched routes are answered before the chain.
pub fn resolve(err: &AppError) -> ErrorReply {
    if let AppError::RouteNotFound = err {
        return route_not_found();
    }
    for handler in ERROR_CHAIN {
        if let ControlFlow::Break(reply) = handler(err) {
            return reply;
        }
    }
    server_error_handler(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(code: &str) -> AppError {
        AppError::Storage {
            code: code.into(),
            message: "boom".into(),
        }
    }

    #[test]
    fn domain_error_uses_its_own_fields() {
        let reply = resolve(&AppError::not_found("No countries found"));
        assert_eq!(reply, ErrorReply::new(StatusCode::NOT_FOUND, "Not Found", "No countries found"));
    }

    #[test]
    fn domain_handler_forwards_other_errors() {
        assert_eq!(domain_error_handler(&storage(CODE_NOT_NULL_VIOLATION)), ControlFlow::Continue(()));
        assert_eq!(domain_error_handler(&AppError::Unclassified("x".into())), ControlFlow::Continue(()));
    }

    #[test]
    fn invalid_text_representation_is_bad_request() {
        let reply = resolve(&storage("22P02"));
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.message, "Bad Request");
        assert_eq!(reply.details.as_deref(), Some("Invalid text representation"));
    }

    #[test]
    fn not_null_violation_is_bad_request() {
        let reply = resolve(&storage("23502"));
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.details.as_deref(), Some("Not null violation"));
    }

    #[test]
    fn unknown_storage_code_falls_through_to_500() {
        let reply = resolve(&storage("23505"));
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.message, "Internal Server Error");
        assert_eq!(reply.details, None);
    }

    #[test]
    fn unclassified_is_500_without_details() {
        let reply = resolve(&AppError::Unclassified("pool timed out".into()));
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.details, None);
    }

    #[test]
    fn route_not_found_is_404() {
        let reply = resolve(&AppError::RouteNotFound);
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.details.as_deref(), Some("Path not found"));
    }

    #[test]
    fn chain_order_puts_domain_first() {
        let teapot = AppError::Domain {
            status: StatusCode::IM_A_TEAPOT,
            message: "Teapot".into(),
            details: "short and stout".into(),
        };
        for (i, handler) in ERROR_CHAIN.iter().enumerate() {
            let out = handler(&teapot);
            if i == 0 {
                assert!(out.is_break());
            } else {
                assert!(out.is_continue());
            }
        }
    }

    #[test]
    fn server_reply_body_omits_details() {
        let reply = server_error_handler(&AppError::Unclassified("x".into()));
        assert_eq!(
            serde_json::to_value(reply.body()).unwrap(),
            serde_json::json!({ "message": "Internal Server Error" })
        );
    }
}
