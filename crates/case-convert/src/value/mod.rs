//! The value model walked by the key converter.
//!
//! [`Value`] is a closed tagged union over everything a decoded payload can
//! hold. Besides the JSON types it carries `Undefined` (a key whose value is
//! missing) and two opaque kinds, byte buffers and timestamps, which the
//! walker never descends into.

mod json;
mod ser;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Number;

/// Insertion-ordered mapping used for object values.
pub type Map = IndexMap<String, Value>;

/// A JSON-like value that may contain binary data and timestamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A key that is present but has no value (JavaScript `undefined`).
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Binary data (equivalent to `Uint8Array` / `Buffer` in JavaScript).
    Binary(Vec<u8>),
    /// A point in time (equivalent to `Date` in JavaScript).
    Timestamp(DateTime<Utc>),
    Array(Vec<Value>),
    Object(Map),
}

/// Value types that are passed through a deep conversion untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpaqueKind {
    Binary,
    Timestamp,
}

/// Coarse classification of a [`Value`], as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Undefined` or `Null`.
    Absent,
    /// Booleans, numbers and strings.
    Scalar,
    Opaque(OpaqueKind),
    Sequence,
    Mapping,
}

impl Value {
    /// Classify this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_convert::{Kind, OpaqueKind, Value};
    ///
    /// assert_eq!(Value::Null.kind(), Kind::Absent);
    /// assert_eq!(Value::from(vec![1u8, 2, 3]).kind(), Kind::Opaque(OpaqueKind::Binary));
    /// assert_eq!(Value::Array(vec![]).kind(), Kind::Sequence);
    /// ```
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined | Value::Null => Kind::Absent,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
            Value::Binary(_) => Kind::Opaque(OpaqueKind::Binary),
            Value::Timestamp(_) => Kind::Opaque(OpaqueKind::Timestamp),
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
        }
    }

    pub fn opaque_kind(&self) -> Option<OpaqueKind> {
        match self.kind() {
            Kind::Opaque(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.opaque_kind().is_some()
    }

    /// `true` for arrays and objects, the only values the walker enters.
    pub fn is_container(&self) -> bool {
        matches!(self.kind(), Kind::Sequence | Kind::Mapping)
    }

    pub fn is_absent(&self) -> bool {
        self.kind() == Kind::Absent
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Look up a key of an object value. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n.into())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u16, u32, u64, usize);

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Byte vectors are binary data, not arrays of numbers.
impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Binary(bytes)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Map> for Value {
    fn from(obj: Map) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` is a missing value, not `null`.
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
