//! Zeit repository
//!
//! - list: ordered by `zeit` ascending
//! - create: Postgres parses the value (`$1::timestamptz`)
//! - delete: Postgres parses the id (`$1::text::integer`), no existence check
//!
//! `zeit` is read back through `::timestamptz`, so the column may be
//! TIMESTAMPTZ, TIMESTAMP or TEXT holding timestamps.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::db::DbError;
use crate::models::ZeitInput;

const LIST_ZEITEN: &str = "SELECT id, zeit::timestamptz AS zeit FROM zeiten ORDER BY zeit";
const INSERT_ZEIT: &str =
    "INSERT INTO zeiten (zeit) VALUES ($1::timestamptz) RETURNING id, zeit::timestamptz AS zeit";
const DELETE_ZEIT: &str = "DELETE FROM zeiten WHERE id = $1::text::integer";

/// Zeit record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Zeit {
    pub id: i32,
    pub zeit: DateTime<Utc>,
}

/// Zeit repository
pub struct ZeitRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ZeitRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All records, earliest first.
    pub async fn list(&self) -> Result<Vec<Zeit>, DbError> {
        let rows = sqlx::query_as::<_, Zeit>(LIST_ZEITEN)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a record and return it with its generated id.
    pub async fn create(&self, zeit: &ZeitInput) -> Result<Zeit, DbError> {
        let row = sqlx::query_as::<_, Zeit>(INSERT_ZEIT)
            .bind(zeit.as_str())
            .fetch_one(self.pool)
            .await?;
        Ok(row)
    }

    /// Delete by id as sent by the client, returning the number of rows
    /// removed (0 or 1). A non-integer id is a database error.
    pub async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let result = sqlx::query(DELETE_ZEIT).bind(id).execute(self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::apply_schema;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p zeiten-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url, 2).expect("pool creation failed");
        apply_schema(&pool).await.expect("schema failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_list_contains_record() {
        let pool = test_pool().await;
        let repo = ZeitRepo::new(&pool);

        let input = ZeitInput::new(Some(serde_json::json!("2031-05-04T12:30:00Z"))).unwrap();
        let created = repo.create(&input).await.expect("insert failed");
        assert_eq!(created.zeit.to_rfc3339(), "2031-05-04T12:30:00+00:00");

        let all = repo.list().await.expect("list failed");
        assert!(all.contains(&created));
        assert!(all.windows(2).all(|w| w[0].zeit <= w[1].zeit));

        assert_eq!(
            repo.delete(&created.id.to_string()).await.expect("delete failed"),
            1
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_is_not_an_error() {
        let pool = test_pool().await;
        let removed = ZeitRepo::new(&pool)
            .delete(&i32::MAX.to_string())
            .await
            .expect("delete failed");
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unparseable_zeit_is_a_database_error() {
        let pool = test_pool().await;
        let input = ZeitInput::new(Some(serde_json::json!("kein datum"))).unwrap();
        let err = ZeitRepo::new(&pool).create(&input).await.unwrap_err();
        assert!(err.message().contains("timestamp"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn non_integer_id_is_a_database_error() {
        let pool = test_pool().await;
        let err = ZeitRepo::new(&pool).delete("abc").await.unwrap_err();
        assert_eq!(err.message(), "invalid input syntax for type integer: \"abc\"");
    }

    /// Pool whose `zeiten` table lives in `schema` with the given column type
    async fn pool_with_column(schema: &str, column_type: &str) -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let setup = crate::db::create_pool(&url, 1).expect("pool creation failed");
        sqlx::raw_sql(&format!(
            "CREATE SCHEMA IF NOT EXISTS {schema}; \
             DROP TABLE IF EXISTS {schema}.zeiten; \
             CREATE TABLE {schema}.zeiten (id SERIAL PRIMARY KEY, zeit {column_type} NOT NULL)"
        ))
        .execute(&setup)
        .await
        .expect("setup failed");

        let options = crate::db::connect_options(&url)
            .expect("invalid url")
            .options([("search_path", schema), ("TimeZone", "UTC")]);
        sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("connect failed")
    }

    async fn roundtrip_against(schema: &str, column_type: &str) {
        let pool = pool_with_column(schema, column_type).await;
        let repo = ZeitRepo::new(&pool);

        for raw in ["2024-03-01T09:00:00Z", "2024-01-01T10:00"] {
            let input = ZeitInput::new(Some(serde_json::json!(raw))).unwrap();
            repo.create(&input).await.expect("insert failed");
        }

        let all = repo.list().await.expect("list failed");
        let rendered: Vec<String> = all.iter().map(|z| z.zeit.to_rfc3339()).collect();
        assert_eq!(
            rendered,
            vec!["2024-01-01T10:00:00+00:00", "2024-03-01T09:00:00+00:00"]
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn works_with_timestamp_column() {
        roundtrip_against("zeiten_timestamp", "TIMESTAMP").await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn works_with_text_column() {
        roundtrip_against("zeiten_text", "TEXT").await;
    }
}
