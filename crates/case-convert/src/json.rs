//! Key conversion directly on `serde_json::Value`.
//!
//! JSON documents contain no opaque values, so the trip through [`Value`]
//! is lossless here.

use crate::case::Case;
use crate::value::Value;

/// Convert every object key of a JSON document to `case`.
///
/// # Examples
///
/// ```
/// use case_convert::{json::convert_json, Case};
/// use serde_json::json;
///
/// let body = json!({"userId": 7, "displayName": "Ann", "Roles": ["admin"]});
/// assert_eq!(
///     convert_json(body, Case::Snake),
///     json!({"user_id": 7, "display_name": "Ann", "roles": ["admin"]})
/// );
/// ```
pub fn convert_json(value: serde_json::Value, case: Case) -> serde_json::Value {
    case.convert_deep(Value::from(value)).into()
}

/// Like [`convert_json`], for a JSON document given as text.
///
/// # Errors
///
/// Returns the `serde_json` error if `text` is not valid JSON.
pub fn convert_json_str(text: &str, case: Case) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    serde_json::to_string(&convert_json(value, case))
}
