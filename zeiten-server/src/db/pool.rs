//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. TLS is chosen from the
//! connection target: local hosts connect in plain text, everything else
//! requires TLS.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "[::1]"];

/// Whether `host` names the local machine.
pub fn is_local_host(host: &str) -> bool {
    LOCAL_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host))
}

/// TLS mode for a connection target.
///
/// Remote targets use `Require`, which encrypts without verifying the
/// server certificate (hosted Postgres commonly presents self-signed ones).
pub fn ssl_mode_for(host: &str, via_socket: bool) -> PgSslMode {
    if via_socket || is_local_host(host) {
        PgSslMode::Disable
    } else {
        PgSslMode::Require
    }
}

/// Parse a connection string and apply the TLS mode for its host.
///
/// # Errors
///
/// Returns an error if `database_url` is not a valid Postgres URL.
pub fn connect_options(database_url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?;
    let mode = ssl_mode_for(options.get_host(), options.get_socket().is_some());
    Ok(options.ssl_mode(mode))
}

/// Create a PostgreSQL connection pool.
///
/// The pool connects lazily; use [`verify_connection`] to check it.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/zeiten", DEFAULT_MAX_CONNECTIONS)?;
/// ```
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(database_url)?;
    Ok(PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options))
}

/// Acquire and release one connection.
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    pool.acquire().await.map(drop)
}
