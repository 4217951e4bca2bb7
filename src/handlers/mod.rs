//! HTTP handlers: the countries controller and the error chain.

pub mod countries;
pub mod errors;
pub use countries::get_countries;
pub use errors::not_found_handler;
