//! CountryService: read path over a `CountryStore`.

mod countries;
pub use countries::CountryService;
