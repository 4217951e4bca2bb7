//! Country row and the pre-insert seed shape.

use serde::{Deserialize, Serialize};

/// A row of the `countries` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Country {
    pub country_id: i32,
    pub name: String,
    pub capital: String,
    pub is_visited: bool,
}

/// Seed input. `country_id` and `is_visited` come from column defaults.
/// Fields are optional so a fixture can carry a null through to the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySeed {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
}

impl CountrySeed {
    pub fn new(name: impl Into<String>, capital: impl Into<String>) -> Self {
        CountrySeed {
            name: Some(name.into()),
            capital: Some(capital.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_serializes_with_column_names() {
        let c = Country {
            country_id: 1,
            name: "France".into(),
            capital: "Paris".into(),
            is_visited: false,
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({
                "country_id": 1,
                "name": "France",
                "capital": "Paris",
                "is_visited": false
            })
        );
    }

    #[test]
    fn seed_missing_field_is_none() {
        let s: CountrySeed = serde_json::from_str(r#"{"name":"Atlantis"}"#).unwrap();
        assert_eq!(s.name.as_deref(), Some("Atlantis"));
        assert_eq!(s.capital, None);
    }
}
