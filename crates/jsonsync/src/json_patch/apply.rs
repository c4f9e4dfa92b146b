//! Patch executor: applies operations to a document in list order.

use jsonsync_json_pointer::{get_mut, is_after_last_array_element, parse_last_index};
use serde_json::{Map, Value};
use tracing::trace;

use super::types::{Op, PatchError};
use crate::json_merge::merge_fields;

// ── Path navigation ───────────────────────────────────────────────────────

/// Split `path` into the container that holds the target and the last step.
fn parent_mut<'a>(
    doc: &'a mut Value,
    path: &'a [String],
) -> Result<(&'a mut Value, &'a String), PatchError> {
    let (key, parent_path) = path.split_last().ok_or(PatchError::InvalidTarget)?;
    let parent = get_mut(doc, parent_path).ok_or(PatchError::NotFound)?;
    Ok((parent, key))
}

/// Array index of the last step; rejects leading zeros, signs and `-`.
fn parse_index(path: &[String]) -> Result<usize, PatchError> {
    parse_last_index(path).map_err(|_| PatchError::InvalidIndex)
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        Value::Array(arr) => {
            if is_after_last_array_element(path) {
                arr.push(value);
                return Ok(());
            }
            let idx = parse_index(path)?;
            if idx > arr.len() {
                return Err(PatchError::InvalidIndex);
            }
            arr.insert(idx, value);
            Ok(())
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<(), PatchError> {
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => map.shift_remove(key).map(drop).ok_or(PatchError::NotFound),
        Value::Array(arr) => {
            let idx = parse_index(path)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            arr.remove(idx);
            Ok(())
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<(), PatchError> {
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => {
            let slot = map.get_mut(key.as_str()).ok_or(PatchError::NotFound)?;
            *slot = value;
            Ok(())
        }
        Value::Array(arr) => {
            let idx = parse_index(path)?;
            let slot = arr.get_mut(idx).ok_or(PatchError::NotFound)?;
            *slot = value;
            Ok(())
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_merge(doc: &mut Value, path: &[String], fields: &Map<String, Value>) -> Result<(), PatchError> {
    let target = get_mut(doc, path).ok_or(PatchError::NotFound)?;
    match target {
        Value::Object(map) => {
            merge_fields(map, fields);
            Ok(())
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Apply a single operation to `doc` in place.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<(), PatchError> {
    trace!(op = op.op_name(), path = ?op.path(), "applying operation");
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Merge { path, value } => apply_merge(doc, path, value),
    }
}

/// Apply `ops` to `doc` in place, stopping at the first failure.
///
/// Operations before the failing one stay applied; callers that need
/// all-or-nothing behaviour should use [`apply_patch`].
pub fn apply_ops(doc: &mut Value, ops: &[Op]) -> Result<(), PatchError> {
    for op in ops {
        apply_op(doc, op)?;
    }
    Ok(())
}

/// Apply `ops` to an owned document and return the result.
pub fn apply_patch(mut doc: Value, ops: &[Op]) -> Result<Value, PatchError> {
    apply_ops(&mut doc, ops)?;
    Ok(doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────
