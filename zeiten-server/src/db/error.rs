//! Database failure type

/// Any failure reported while executing a statement
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Failure reported by a non-Postgres store
    #[error("{0}")]
    Rejected(String),
}

impl DbError {
    /// The underlying message, as the store phrased it.
    ///
    /// For errors raised by the Postgres server this is the server's own
    /// message (e.g. `relation "zeiten" does not exist`), without the
    /// sqlx prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.message().to_owned(),
            Self::Sqlx(e) => e.to_string(),
            Self::Rejected(message) => message.clone(),
        }
    }
}
