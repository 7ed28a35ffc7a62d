//! JSON body values as statement parameters
//!
//! Bodies are not type-checked: whatever scalar the client sends is bound
//! as text and the column decides whether it is acceptable.

use serde_json::Value;

/// Text to bind for a body value; `None` binds SQL NULL.
///
/// Strings are bound verbatim, other scalars by their JSON spelling
/// (`5`, `true`), arrays and objects as JSON text.
pub fn to_param_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Whether a body value counts as present: not absent, `null`, `false`,
/// `0` or `""`.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
