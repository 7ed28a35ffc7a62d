//! Repository implementations for database access
//!
//! Each repository method runs exactly one statement with positional
//! placeholders. Values are always bound, never formatted into SQL.

pub mod vereine;
pub mod zeiten;

pub use vereine::{Verein, VereinRepo};
pub use zeiten::{Zeit, ZeitRepo};

/// Apply the reference schema. Used by database-backed tests.
#[cfg(test)]
pub(crate) async fn apply_schema(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("../../../schema.sql"))
        .execute(pool)
        .await
        .map(drop)
}
