//! Zeit input - presence check only
//!
//! The value is handed to the store as text; interpreting it as a
//! timestamp is the column's job.

use serde_json::Value;

use super::{is_present, to_param_text, ValidationError};

/// Shown to the client when `zeit` is missing
pub const ZEIT_MISSING: &str = "Zeitpunkt fehlt.";

/// A `zeit` value that is known to be present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeitInput(String);

impl ZeitInput {
    /// Accept any present body value (see [`is_present`]).
    ///
    /// # Example
    /// ```
    /// use serde_json::json;
    /// use zeiten_server::models::ZeitInput;
    ///
    /// assert!(ZeitInput::new(Some(json!("2024-01-01T10:00:00Z"))).is_ok());
    /// assert!(ZeitInput::new(Some(json!(""))).is_err());
    /// assert!(ZeitInput::new(Some(json!(0))).is_err());
    /// assert!(ZeitInput::new(None).is_err());
    /// ```
    pub fn new(value: Option<Value>) -> Result<Self, ValidationError> {
        let missing = ValidationError::Missing {
            field: "zeit",
            message: ZEIT_MISSING,
        };
        if !is_present(value.as_ref()) {
            return Err(missing);
        }
        to_param_text(value).map(Self).ok_or(missing)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ZeitInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
