//! Verein repository

use sqlx::{FromRow, PgPool};

use crate::db::DbError;

const INSERT_VEREIN: &str = "INSERT INTO vereine (vereinsname) VALUES ($1) RETURNING *";

/// Verein record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Verein {
    pub id: i32,
    pub vereinsname: Option<String>,
}

/// Verein repository
pub struct VereinRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VereinRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a club. A missing name is bound as NULL; the schema decides
    /// whether that is accepted.
    pub async fn create(&self, vereinsname: Option<&str>) -> Result<Verein, DbError> {
        let row = sqlx::query_as::<_, Verein>(INSERT_VEREIN)
            .bind(vereinsname)
            .fetch_one(self.pool)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::apply_schema;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_returns_generated_id() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url, 2).expect("pool creation failed");
        apply_schema(&pool).await.expect("schema failed");

        let repo = VereinRepo::new(&pool);
        let first = repo.create(Some("FC Test")).await.expect("insert failed");
        let second = repo.create(Some("FC Test")).await.expect("insert failed");

        assert_eq!(first.vereinsname.as_deref(), Some("FC Test"));
        assert!(second.id > first.id);
    }
}
