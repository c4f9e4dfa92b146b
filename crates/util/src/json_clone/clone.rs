use serde_json::{Map, Value};

/// Creates a structural copy of `value` that shares nothing with it.
///
/// Values placed into emitted operations go through here so that later
/// changes to the source or target trees cannot leak into a patch.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsonsync_util::clone;
///
/// let original = json!({"foo": [1, 2, 3]});
/// assert_eq!(clone(&original), original);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                out.insert(key.clone(), clone(val));
            }
            Value::Object(out)
        }
        scalar => scalar.clone(),
    }
}
