use serde_json::Value;

/// Structural equality between two JSON values.
///
/// - Arrays compare element by element, so order matters.
/// - Objects compare as key sets with equal values; key order is ignored.
/// - Scalars compare by type and value, so `1`, `1.0`, `true` and `"1"` are
///   all distinct.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsonsync_util::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [1, 2]}), &json!({"b": [1, 2], "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}
