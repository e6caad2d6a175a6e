//! Recursive key conversion over nested [`Value`]s.
//!
//! The walker rebuilds every array and object it meets and runs the key
//! converter on each object key. Absent values, scalars and opaque values
//! (binary data, timestamps) are moved into the output as they are: their
//! heap allocations are reused, nothing is cloned.

use indexmap::map::Entry;

use crate::case::Case;
use crate::error::{Error, Result};
use crate::value::{Map, Value};

/// Rebuild `value` with every object key passed through `case_fn`.
///
/// Arrays keep their length and order, objects keep the order of their keys.
/// When two keys of one object convert to the same key, the later value wins
/// and the entry stays where the first of them was inserted.
///
/// # Examples
///
/// ```
/// use case_convert::{convert_keys, Value};
///
/// let value = Value::from(serde_json::json!({"user_name": "ann", "tags": [{"tag_id": 1}]}));
/// let upper = convert_keys(value, |key| key.to_uppercase());
///
/// assert_eq!(
///     serde_json::Value::from(upper),
///     serde_json::json!({"USER_NAME": "ann", "TAGS": [{"TAG_ID": 1}]})
/// );
/// ```
pub fn convert_keys<F>(value: Value, case_fn: F) -> Value
where
    F: Fn(&str) -> String,
{
    walk(value, &case_fn)
}

fn walk<F>(value: Value, case_fn: &F) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        opaque @ (Value::Binary(_) | Value::Timestamp(_)) => opaque,
        Value::Array(arr) => {
            Value::Array(arr.into_iter().map(|item| walk(item, case_fn)).collect())
        }
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                insert_converted(&mut out, case_fn(&key), &key, walk(val, case_fn));
            }
            Value::Object(out)
        }
        leaf @ (Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)) => leaf,
    }
}

fn insert_converted(out: &mut Map, new_key: String, original: &str, val: Value) {
    match out.entry(new_key) {
        Entry::Occupied(mut entry) => {
            tracing::debug!(
                key = %entry.key(),
                original,
                "converted key collides with an earlier key, overwriting"
            );
            entry.insert(val);
        }
        Entry::Vacant(entry) => {
            entry.insert(val);
        }
    }
}

/// Key converter with a limit on how deeply nested the input may be.
///
/// Each array or object counts as one level; the root container is level 1.
/// Without a limit a `Walker` behaves exactly like [`convert_keys`].
///
/// # Examples
///
/// ```
/// use case_convert::{to_camel_case, Error, Value, Walker};
///
/// let walker = Walker::new().with_max_depth(2);
///
/// let shallow = Value::from(serde_json::json!({"a_b": {"c_d": 1}}));
/// assert!(walker.try_convert(shallow, to_camel_case).is_ok());
///
/// let deep = Value::from(serde_json::json!({"a_b": {"c_d": [1]}}));
/// assert_eq!(
///     walker.try_convert(deep, to_camel_case),
///     Err(Error::DepthLimitExceeded { limit: 2 })
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walker {
    max_depth: Option<usize>,
}

impl Walker {
    /// A walker without a depth limit.
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    pub const fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Convert keys like [`convert_keys`], failing instead of descending past
    /// the depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthLimitExceeded`] if a container sits deeper than
    /// the configured limit. No partial output is returned.
    pub fn try_convert<F>(&self, value: Value, case_fn: F) -> Result<Value>
    where
        F: Fn(&str) -> String,
    {
        match self.max_depth {
            None => Ok(walk(value, &case_fn)),
            Some(limit) => try_walk(value, &case_fn, 0, limit),
        }
    }

    /// Convert keys to the given [`Case`] with this walker's depth limit.
    pub fn try_convert_case(&self, value: Value, case: Case) -> Result<Value> {
        self.try_convert(value, case.converter())
    }
}

fn try_walk<F>(value: Value, case_fn: &F, depth: usize, limit: usize) -> Result<Value>
where
    F: Fn(&str) -> String,
{
    if value.is_container() && depth >= limit {
        tracing::trace!(depth, limit, "depth limit exceeded during key conversion");
        return Err(Error::DepthLimitExceeded { limit });
    }
    match value {
        opaque @ (Value::Binary(_) | Value::Timestamp(_)) => Ok(opaque),
        Value::Array(arr) => arr
            .into_iter()
            .map(|item| try_walk(item, case_fn, depth + 1, limit))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                let val = try_walk(val, case_fn, depth + 1, limit)?;
                insert_converted(&mut out, case_fn(&key), &key, val);
            }
            Ok(Value::Object(out))
        }
        leaf @ (Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)) => Ok(leaf),
    }
}

impl Case {
    /// Convert every object key in `value` to this casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use case_convert::{Case, Value};
    ///
    /// let value = Value::from(serde_json::json!({"objectArray": [{"innerKey": 1}]}));
    /// let snake = Case::Snake.convert_deep(value);
    /// assert_eq!(
    ///     serde_json::Value::from(snake),
    ///     serde_json::json!({"object_array": [{"inner_key": 1}]})
    /// );
    /// ```
    pub fn convert_deep(self, value: Value) -> Value {
        convert_keys(value, self.converter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{to_camel_case, to_snake_case};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn object(entries: Vec<(&str, Value)>) -> Value {
        entries.into_iter().collect()
    }

    fn keys(value: &Value) -> Vec<&str> {
        value.as_object().unwrap().keys().map(String::as_str).collect()
    }

    #[test]
    fn test_leaves_are_returned_unchanged() {
        assert_eq!(convert_keys(Value::Null, to_camel_case), Value::Null);
        assert_eq!(convert_keys(Value::Undefined, to_camel_case), Value::Undefined);
        assert_eq!(
            convert_keys(Value::from("some_string"), to_camel_case),
            Value::from("some_string")
        );
        assert_eq!(convert_keys(Value::from(42), to_camel_case), Value::from(42));
        assert_eq!(convert_keys(Value::from(false), to_camel_case), Value::from(false));
    }

    #[test]
    fn test_string_values_are_not_converted() {
        let value = object(vec![("some_key", Value::from("some_value"))]);
        let out = convert_keys(value, to_camel_case);
        assert_eq!(out.get("someKey"), Some(&Value::from("some_value")));
    }

    #[test]
    fn test_nested_objects() {
        let value = Value::from(json!({"outer_key": {"inner_key": {"deep_key": true}}}));
        let out = convert_keys(value, to_camel_case);
        assert_eq!(
            serde_json::Value::from(out),
            json!({"outerKey": {"innerKey": {"deepKey": true}}})
        );
    }

    #[test]
    fn test_top_level_array() {
        let value = Value::from(json!([{"key": "a", "another_key": "b"}, 1, null]));
        let out = convert_keys(value, to_camel_case);
        let arr = out.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(keys(&arr[0]), vec!["key", "anotherKey"]);
        assert_eq!(arr[1], Value::from(1));
        assert_eq!(arr[2], Value::Null);
    }

    #[test]
    fn test_nested_arrays() {
        let value = Value::from(json!({"matrix_rows": [[{"cell_value": 1}], [], [2, 3]]}));
        let out = convert_keys(value, to_camel_case);
        assert_eq!(
            serde_json::Value::from(out),
            json!({"matrixRows": [[{"cellValue": 1}], [], [2, 3]]})
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let value = Value::from(json!({"zeta_key": 1, "alpha_key": 2, "mid_key": 3}));
        let out = convert_keys(value, to_camel_case);
        assert_eq!(keys(&out), vec!["zetaKey", "alphaKey", "midKey"]);
    }

    #[test]
    fn test_key_collision_last_value_wins_first_position_kept() {
        let value = object(vec![
            ("fooBar", Value::from(1)),
            ("other", Value::from(2)),
            ("foo_bar", Value::from(3)),
        ]);
        let out = convert_keys(value, to_snake_case);
        assert_eq!(keys(&out), vec!["foo_bar", "other"]);
        assert_eq!(out.get("foo_bar"), Some(&Value::from(3)));
    }

    #[test]
    fn test_opaque_values_pass_through() {
        let ts = Utc.with_ymd_and_hms(2020, 5, 17, 8, 0, 0).unwrap();
        let value = object(vec![
            ("buffer_key", Value::Binary(b"abc".to_vec())),
            ("date_key", Value::Timestamp(ts)),
            ("array", Value::Array(vec![Value::Binary(vec![0, 1]), Value::Timestamp(ts)])),
        ]);
        let out = convert_keys(value, to_camel_case);
        assert_eq!(out.get("bufferKey"), Some(&Value::Binary(b"abc".to_vec())));
        assert_eq!(out.get("dateKey"), Some(&Value::Timestamp(ts)));
        assert_eq!(
            out.get("array"),
            Some(&Value::Array(vec![Value::Binary(vec![0, 1]), Value::Timestamp(ts)]))
        );
    }

    #[test]
    fn test_binary_allocation_is_reused() {
        let bytes = b"some bytes".to_vec();
        let ptr = bytes.as_ptr();
        let value = object(vec![("nested", object(vec![("more_nested", Value::Binary(bytes))]))]);

        let out = convert_keys(value, to_camel_case);
        let moved = out
            .get("nested")
            .and_then(|v| v.get("moreNested"))
            .and_then(Value::as_binary)
            .unwrap();
        assert_eq!(moved.as_ptr(), ptr);
    }

    #[test]
    fn test_top_level_opaque() {
        let out = convert_keys(Value::Binary(vec![9]), to_snake_case);
        assert_eq!(out, Value::Binary(vec![9]));
    }

    #[test]
    fn test_undefined_value_is_kept() {
        let value = object(vec![("propName", Value::Undefined)]);
        let out = convert_keys(value, to_snake_case);
        assert_eq!(keys(&out), vec!["prop_name"]);
        assert_eq!(out.get("prop_name"), Some(&Value::Undefined));
    }

    #[test]
    fn test_case_convert_deep() {
        let value = Value::from(json!({"object_array": [{"index": 0}]}));
        let out = Case::Pascal.convert_deep(value);
        assert_eq!(serde_json::Value::from(out), json!({"ObjectArray": [{"Index": 0}]}));
    }

    #[test]
    fn test_walker_without_limit() {
        let value = Value::from(json!({"a_b": [[[[{"c_d": 1}]]]]}));
        let out = Walker::new().try_convert(value, to_camel_case).unwrap();
        assert_eq!(serde_json::Value::from(out), json!({"aB": [[[[{"cD": 1}]]]]}));
    }

    #[test]
    fn test_walker_depth_limit() {
        let walker = Walker::new().with_max_depth(3);
        assert_eq!(walker.max_depth(), Some(3));

        let ok = Value::from(json!({"a_b": [{"c_d": 1}]}));
        let out = walker.try_convert(ok, to_camel_case).unwrap();
        assert_eq!(serde_json::Value::from(out), json!({"aB": [{"cD": 1}]}));

        let too_deep = Value::from(json!({"a_b": [{"c_d": {}}]}));
        assert_eq!(
            walker.try_convert(too_deep, to_camel_case),
            Err(Error::DepthLimitExceeded { limit: 3 })
        );
    }

    #[test]
    fn test_walker_zero_limit_allows_leaves() {
        let walker = Walker::new().with_max_depth(0);
        assert_eq!(walker.try_convert(Value::from(1), to_camel_case), Ok(Value::from(1)));
        assert_eq!(
            walker.try_convert_case(Value::Binary(vec![1]), Case::Snake),
            Ok(Value::Binary(vec![1]))
        );
        assert!(walker.try_convert(Value::Array(vec![]), to_camel_case).is_err());
    }

    #[test]
    fn test_walker_limit_ignores_opaque_contents() {
        let walker = Walker::new().with_max_depth(1);
        let value = object(vec![("raw_data", Value::Binary(vec![1, 2, 3]))]);
        let out = walker.try_convert(value, to_camel_case).unwrap();
        assert_eq!(keys(&out), vec!["rawData"]);
    }
}
