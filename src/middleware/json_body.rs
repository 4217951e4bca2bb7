//! JSON body parsing: bodies are capped at `BODY_LIMIT` and JSON bodies must parse.
//! Rejections are `AppError::Domain`, so the error chain formats them.

use crate::error::AppError;
use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::de::IgnoredAny;

/// Max accepted request body, in bytes.
pub const BODY_LIMIT: usize = 1024 * 1024;

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn declared_length(req: &Request) -> Option<u64> {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

fn too_large() -> AppError {
    AppError::Domain {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        message: "Payload Too Large".into(),
        details: format!("Request body exceeds {BODY_LIMIT} bytes"),
    }
}

pub async fn parse_json_body(req: Request, next: Next) -> Result<Response, AppError> {
    if declared_length(&req).is_some_and(|n| n > BODY_LIMIT as u64) {
        return Err(too_large());
    }
    if !is_json(&req) {
        return Ok(next.run(req).await);
    }

    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT).await.map_err(|_| too_large())?;
    if !bytes.is_empty() {
        serde_json::from_slice::<IgnoredAny>(&bytes).map_err(|e| AppError::Domain {
            status: StatusCode::BAD_REQUEST,
            message: "Bad Request".into(),
            details: format!("Invalid JSON body: {e}"),
        })?;
    }
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
