//! Merge processor: folds partial objects into existing documents.
//!
//! Two flavours share one recursive walk:
//!
//! - [`deep_merge`] combines two payloads. Objects merge field by field,
//!   arrays merge position by position (growing when the incoming array is
//!   longer), anything else is replaced. `null` is an ordinary value.
//! - [`merge_fields`] applies a `merge` operation's fields to a live
//!   object, following JSON Merge Patch: objects recurse, a `null` field
//!   deletes the key, anything else (arrays included) is replaced.

use jsonsync_json_pointer::{format_json_pointer, get_mut, JsonPointerError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::json_patch::Op;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    #[error("merge value must be an object, got {0}")]
    NotAnObject(&'static str),
    #[error("expected a merge operation, got {0}")]
    NotAMerge(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, PartialEq)]
enum Nulls {
    Keep,
    Delete,
}

fn merge_value(existing: &mut Value, incoming: &Value, nulls: Nulls) {
    match (existing, incoming) {
        (Value::Object(map), Value::Object(fields)) => merge_map(map, fields, nulls),
        (Value::Array(items), Value::Array(updates)) if nulls == Nulls::Keep => {
            for (i, update) in updates.iter().enumerate() {
                match items.get_mut(i) {
                    Some(item) => merge_value(item, update, nulls),
                    None => items.push(update.clone()),
                }
            }
        }
        (slot, _) => *slot = incoming.clone(),
    }
}

fn merge_map(map: &mut Map<String, Value>, fields: &Map<String, Value>, nulls: Nulls) {
    for (key, value) in fields {
        if nulls == Nulls::Delete && value.is_null() {
            map.shift_remove(key);
            continue;
        }
        match map.get_mut(key) {
            Some(existing) => merge_value(existing, value, nulls),
            None => {
                map.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Recursively merge `incoming` into `existing`; `null` is kept as a value.
///
/// Array elements are merged position by position, so a scalar element of
/// `incoming` overwrites the one at the same index in `existing` rather than
/// being left as it was.
pub fn deep_merge(existing: &mut Value, incoming: &Value) {
    merge_value(existing, incoming, Nulls::Keep);
}

/// Apply merge-operation `fields` onto `target`; `null` fields delete keys.
pub fn merge_fields(target: &mut Map<String, Value>, fields: &Map<String, Value>) {
    merge_map(target, fields, Nulls::Delete);
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Merge processor ───────────────────────────────────────────────────────

/// Merge `value` into the object at `path` of a copy of `doc`.
///
/// # Errors
///
/// - [`JsonPointerError::NoSuchPath`] if `path` does not resolve.
/// - [`JsonPointerError::IllegalContainer`] if it resolves to a non-object.
/// - [`MergeError::NotAnObject`] if `value` is not an object.
pub fn merge_at(doc: &Value, path: &[String], value: &Value) -> Result<Value, MergeError> {
    let fields = value
        .as_object()
        .ok_or_else(|| MergeError::NotAnObject(value_kind(value)))?;
    let mut out = doc.clone();
    merge_object_at(&mut out, path, fields)?;
    Ok(out)
}

/// Merge `value` into the root object of a copy of `doc`.
pub fn merge(doc: &Value, value: &Value) -> Result<Value, MergeError> {
    merge_at(doc, &[], value)
}

/// Apply a [`Op::Merge`] to a copy of `doc`.
pub fn merge_op(doc: &Value, op: &Op) -> Result<Value, MergeError> {
    match op {
        Op::Merge { path, value } => {
            let mut out = doc.clone();
            merge_object_at(&mut out, path, value)?;
            Ok(out)
        }
        other => Err(MergeError::NotAMerge(other.op_name())),
    }
}

/// Merge `value` at `path` into a serializable object and read it back.
pub fn merge_into<T>(object: &T, path: &[String], value: &Value) -> Result<T, MergeError>
where
    T: Serialize + DeserializeOwned,
{
    let doc = serde_json::to_value(object)?;
    let merged = merge_at(&doc, path, value)?;
    Ok(serde_json::from_value(merged)?)
}

fn merge_object_at(
    doc: &mut Value,
    path: &[String],
    fields: &Map<String, Value>,
) -> Result<(), MergeError> {
    let pointer = format_json_pointer(path);
    debug!(path = %pointer, fields = fields.len(), "merging object");
    let target = get_mut(doc, path).ok_or_else(|| JsonPointerError::NoSuchPath(pointer.clone()))?;
    match target {
        Value::Object(map) => {
            merge_fields(map, fields);
            Ok(())
        }
        _ => Err(JsonPointerError::IllegalContainer(pointer).into()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
