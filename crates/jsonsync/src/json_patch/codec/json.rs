//! JSON codec for patch operations.
//!
//! Wire format: `{"op": "add" | "remove" | "replace" | "merge", "path":
//! <JSON Pointer>, "value": <JSON>}`, with `value` omitted for `remove` and
//! required to be an object for `merge`.

use jsonsync_json_pointer::{format_json_pointer, parse_json_pointer};
use serde_json::{json, Value};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn decode_path(v: &Value) -> Result<Vec<String>, PatchError> {
    let s = v
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp("path must be a string".into()))?;
    if !s.is_empty() && !s.starts_with('/') {
        return Err(PatchError::InvalidOp(format!("invalid pointer: {s}")));
    }
    Ok(parse_json_pointer(s))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to its wire form.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": format_json_pointer(path),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": format_json_pointer(path)
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": format_json_pointer(path),
            "value": value
        }),
        Op::Merge { path, value } => json!({
            "op": "merge",
            "path": format_json_pointer(path),
            "value": value
        }),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a single operation from its wire form.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".into()))?;
    let path = decode_path(
        obj.get("path")
            .ok_or_else(|| PatchError::InvalidOp("missing 'path' field".into()))?,
    )?;
    let value = |name: &str| {
        obj.get("value")
            .cloned()
            .ok_or_else(|| PatchError::InvalidOp(format!("{name} requires 'value'")))
    };

    match op_str {
        "add" => {
            if path.is_empty() {
                return Err(PatchError::InvalidOp("add requires a non-root path".into()));
            }
            Ok(Op::Add { path, value: value("add")? })
        }
        "remove" => {
            if path.is_empty() {
                return Err(PatchError::InvalidOp("remove requires a non-root path".into()));
            }
            Ok(Op::Remove { path })
        }
        "replace" => Ok(Op::Replace { path, value: value("replace")? }),
        "merge" => match value("merge")? {
            Value::Object(fields) => Ok(Op::Merge { path, value: fields }),
            _ => Err(PatchError::InvalidOp("merge value must be an object".into())),
        },
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Deserialize a JSON array of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────
