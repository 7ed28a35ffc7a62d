//! Command implementations for the zeiten CLI

pub mod serve;

pub use serve::run_serve;
