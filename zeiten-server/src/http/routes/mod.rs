//! Route handlers organized by resource

pub mod assets;
pub mod vereine;
pub mod zeiten;
