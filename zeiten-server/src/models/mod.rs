//! Request-side domain types
//!
//! Input is checked when these types are constructed. Invalid input
//! returns ValidationError, not panic.

pub mod param;
pub mod validation;
pub mod zeit;

pub use param::{is_present, to_param_text};
pub use validation::ValidationError;
pub use zeit::ZeitInput;
