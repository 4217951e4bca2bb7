//! Request middleware run ahead of routing.

mod json_body;
pub use json_body::{parse_json_body, BODY_LIMIT};
