//! case-convert - Deep key case conversion for nested values
//!
//! Converts object keys between camelCase, snake_case and PascalCase across
//! arbitrarily nested arrays and objects, leaving values and shape untouched.
//! Binary data and timestamps are treated as opaque and never walked into.
//!
//! # Example
//!
//! ```
//! use case_convert::{to_camel_case_deep, to_snake_case, Value};
//! use serde_json::json;
//!
//! assert_eq!(to_snake_case("objectArray"), "object_array");
//!
//! let payload = Value::from(json!({"object_array": [{"index": 0, "value": "abc"}]}));
//! let camel = to_camel_case_deep(payload);
//!
//! assert_eq!(
//!     serde_json::Value::from(camel),
//!     json!({"objectArray": [{"index": 0, "value": "abc"}]})
//! );
//! ```

pub mod case;
pub mod error;
pub mod json;
pub mod value;
pub mod walk;

pub use case::{
    to_camel_case, to_pascal_case, to_snake_case, to_snake_case_with, Case, SnakeCaseOptions,
};
pub use error::{Error, Result};
pub use value::{Kind, Map, OpaqueKind, Value};
pub use walk::{convert_keys, Walker};

/// Convert every object key in `value` to camelCase.
pub fn to_camel_case_deep(value: Value) -> Value {
    convert_keys(value, to_camel_case)
}

/// Convert every object key in `value` to snake_case.
pub fn to_snake_case_deep(value: Value) -> Value {
    convert_keys(value, to_snake_case)
}

/// Convert every object key in `value` to PascalCase.
pub fn to_pascal_case_deep(value: Value) -> Value {
    convert_keys(value, to_pascal_case)
}
