//! zeiten-server: HTTP API for Zeiten and Vereine
//!
//! Each route validates its input, runs one statement through the
//! [`Store`](db::Store) and answers with JSON. Unrouted paths fall through
//! to static assets.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, Store};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
