//! Persistence gateway - connection pool, repositories and the `Store` seam
//!
//! # Design Principles
//!
//! - One shared pool, injected through `Store`; no globals
//! - One parameterized statement per call, no transactions across calls
//! - Errors pass through as `DbError`, never classified or retried

pub mod error;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{connect_options, create_pool, verify_connection, DEFAULT_MAX_CONNECTIONS};
pub use repos::{Verein, VereinRepo, Zeit, ZeitRepo};
pub use store::{PgStore, Store};
