//! Reset the `countries` table to a fixture: drop, recreate, bulk insert.

use crate::error::AppError;
use crate::model::CountrySeed;
use sqlx::{PgPool, Postgres, QueryBuilder};

const DROP_COUNTRIES: &str = "DROP TABLE IF EXISTS countries";

const CREATE_COUNTRIES: &str = r#"
    CREATE TABLE countries (
        country_id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        capital VARCHAR(100) NOT NULL,
        is_visited BOOLEAN NOT NULL DEFAULT FALSE
    )
"#;

/// Postgres caps a statement at 65535 bind parameters; each row binds two.
pub const MAX_ROWS_PER_INSERT: usize = u16::MAX as usize / 2;

/// Multi-row inserts of at most `MAX_ROWS_PER_INSERT` rows each, in slice order.
fn insert_queries(records: &[CountrySeed]) -> Vec<QueryBuilder<'_, Postgres>> {
    records
        .chunks(MAX_ROWS_PER_INSERT)
        .map(|chunk| {
            let mut qb = QueryBuilder::new("INSERT INTO countries (name, capital) ");
            qb.push_values(chunk, |mut row, rec| {
                row.push_bind(rec.name.as_deref()).push_bind(rec.capital.as_deref());
            });
            qb
        })
        .collect()
}

/// Destructive: prior rows are lost as soon as the table is dropped. Running twice with
/// the same records gives the same table, ids restarting at 1. Drop and create are
/// committed on their own; the inserts share one transaction, so a failed insert leaves
/// an empty table. Returns the number of rows inserted.
pub async fn seed(pool: &PgPool, records: &[CountrySeed]) -> Result<u64, AppError> {
    sqlx::query(DROP_COUNTRIES).execute(pool).await?;
    sqlx::query(CREATE_COUNTRIES).execute(pool).await?;

    let mut inserted = 0;
    if !records.is_empty() {
        let mut tx = pool.begin().await?;
        for mut qb in insert_queries(records) {
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;
    }
    tracing::info!(rows = inserted, "seeded countries");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_records_skip_insert() {
        assert!(insert_queries(&[]).is_empty());
    }

    #[test]
    fn insert_binds_every_value() {
        let records = [CountrySeed::new("France", "Paris"), CountrySeed::new("Italy", "Rome")];
        let queries = insert_queries(&records);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].sql(), "INSERT INTO countries (name, capital) VALUES ($1, $2), ($3, $4)");
    }

    #[test]
    fn large_inputs_split_under_bind_limit() {
        let records: Vec<_> = (0..MAX_ROWS_PER_INSERT + 1)
            .map(|i| CountrySeed::new(format!("C{i}"), "X"))
            .collect();
        let queries = insert_queries(&records);
        assert_eq!(queries.len(), 2);
        assert!(queries[0].sql().ends_with(&format!("(${}, ${})", MAX_ROWS_PER_INSERT * 2 - 1, MAX_ROWS_PER_INSERT * 2)));
        assert_eq!(queries[1].sql(), "INSERT INTO countries (name, capital) VALUES ($1, $2)");
    }
}
