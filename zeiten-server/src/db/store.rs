//! `Store` trait - the seam between route handlers and persistence
//!
//! Handlers only see `dyn Store`, so the router can run against Postgres
//! in production and against [`MemoryStore`](super::MemoryStore) in tests.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, Verein, VereinRepo, Zeit, ZeitRepo};
use crate::models::ZeitInput;

/// Persistence gateway. Every method is a single independent statement.
#[async_trait]
pub trait Store: Send + Sync {
    /// All Zeiten ordered by `zeit` ascending
    async fn list_zeiten(&self) -> Result<Vec<Zeit>, DbError>;

    /// Insert a Zeit and return the stored record
    async fn create_zeit(&self, zeit: &ZeitInput) -> Result<Zeit, DbError>;

    /// Delete a Zeit by id as sent by the client; returns the number of rows removed
    async fn delete_zeit(&self, id: &str) -> Result<u64, DbError>;

    /// Insert a Verein and return the stored record
    async fn create_verein(&self, vereinsname: Option<&str>) -> Result<Verein, DbError>;
}

/// Postgres-backed store over a shared pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_zeiten(&self) -> Result<Vec<Zeit>, DbError> {
        ZeitRepo::new(&self.pool).list().await
    }

    async fn create_zeit(&self, zeit: &ZeitInput) -> Result<Zeit, DbError> {
        ZeitRepo::new(&self.pool).create(zeit).await
    }

    async fn delete_zeit(&self, id: &str) -> Result<u64, DbError> {
        ZeitRepo::new(&self.pool).delete(id).await
    }

    async fn create_verein(&self, vereinsname: Option<&str>) -> Result<Verein, DbError> {
        VereinRepo::new(&self.pool).create(vereinsname).await
    }
}
