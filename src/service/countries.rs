use crate::error::AppError;
use crate::model::Country;
use crate::store::CountryStore;

pub struct CountryService;

impl CountryService {
    /// All countries. An empty table is a `NotFound` domain error, not an empty list.
    pub async fn find_all_countries(store: &dyn CountryStore) -> Result<Vec<Country>, AppError> {
        let rows = store.fetch_all().await?;
        if rows.is_empty() {
            return Err(AppError::not_found("No countries found"));
        }
        Ok(rows)
    }
}
