//! Patch optimizer: folds sibling field changes into `merge` operations.
//!
//! Given the *target* document and the elementary operations produced by
//! diffing against it:
//!
//! 1. Operations whose parent container in the target is an object are
//!    grouped by that parent's pointer. Operations under arrays, and
//!    operations on the root itself, pass through untouched.
//! 2. A group with a single operation keeps it. Larger groups become one
//!    `merge` at the parent whose value holds the grouped fields as they
//!    appear in the target.
//! 3. Each merge is bubbled upward: while its parent container is an
//!    object, it is rewrapped as a single-field merge one level up.
//! 4. Merges that land on the same pointer are combined with
//!    [`deep_merge`](crate::json_merge::deep_merge).
//!
//! Two limitations follow from carrying target values in the merge:
//!
//! - Fields that a grouped operation removed are no longer in the target,
//!   so they are absent from the merge value and the removal is lost.
//! - A grouped field whose target value is `null` is carried as `null`,
//!   which the patch executor reads as "delete this key". The field ends up
//!   absent instead of holding `null`.
//!
//! Callers that need either case preserved must apply the elementary patch.

use indexmap::IndexMap;
use jsonsync_json_pointer::{
    format_json_pointer, is_root, last_token, parent, resolve, resolve_parent_container,
    JsonPointerError, Path,
};
use jsonsync_util::clone;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, trace};

use crate::json_merge::deep_merge;
use crate::json_patch::Op;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptimizeError {
    /// An operation's path does not resolve against the target document.
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
}

/// Operations sharing one parent object.
struct Group {
    parent: Path,
    fields: Vec<String>,
    ops: Vec<Op>,
}

/// Position of an input operation in the output.
enum Slot {
    Keep(Op),
    Group(String),
}

/// Fold `ops` into the smallest equivalent set of operations.
///
/// Output: pass-through and single-member-group operations in input order,
/// followed by one merge per distinct destination pointer in order of first
/// appearance.
///
/// # Errors
///
/// `ops` must come from diffing against `target`; an operation whose parent
/// does not resolve yields [`JsonPointerError::NoSuchPath`], and one whose
/// parent is a scalar yields [`JsonPointerError::IllegalContainer`].
pub fn optimize(target: &Value, ops: Vec<Op>) -> Result<Vec<Op>, OptimizeError> {
    let input_len = ops.len();
    let mut groups: IndexMap<String, Group> = IndexMap::new();
    let mut slots = Vec::with_capacity(ops.len());

    for op in ops {
        let path = op.path();
        if is_root(path) || !resolve_parent_container(target, path)?.is_object() {
            slots.push(Slot::Keep(op));
            continue;
        }
        let parent_path = parent(path)?;
        let key = format_json_pointer(&parent_path);
        let field = last_token(path).unwrap_or_default().to_string();
        let group = groups.entry(key.clone()).or_insert_with(|| {
            slots.push(Slot::Group(key));
            Group { parent: parent_path, fields: Vec::new(), ops: Vec::new() }
        });
        group.fields.push(field);
        group.ops.push(op);
    }

    let mut out = Vec::new();
    let mut merges: IndexMap<String, (Path, Map<String, Value>)> = IndexMap::new();
    for slot in slots {
        let key = match slot {
            Slot::Keep(op) => {
                out.push(op);
                continue;
            }
            Slot::Group(key) => key,
        };
        let Some(mut group) = groups.shift_remove(&key) else {
            continue;
        };
        if group.ops.len() == 1 {
            out.extend(group.ops.pop());
            continue;
        }

        let fields = retain_fields(resolve(target, &group.parent)?, &group.fields);
        trace!(parent = %key, fields = fields.len(), "grouped sibling fields");
        let (path, value) = bubble(target, group.parent, fields)?;
        match merges.entry(format_json_pointer(&path)) {
            indexmap::map::Entry::Occupied(mut slot) => {
                let acc = &mut slot.get_mut().1;
                for (name, incoming) in value {
                    match acc.get_mut(&name) {
                        Some(existing) => deep_merge(existing, &incoming),
                        None => {
                            acc.insert(name, incoming);
                        }
                    }
                }
            }
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert((path, value));
            }
        }
    }

    out.extend(merges.into_values().map(|(path, value)| Op::Merge { path, value }));
    debug!(input = input_len, output = out.len(), "optimized patch");
    Ok(out)
}

/// Copy of `parent` keeping only `names`, in the parent's own field order.
fn retain_fields(parent: &Value, names: &[String]) -> Map<String, Value> {
    let mut out = Map::new();
    if let Value::Object(map) = parent {
        for (name, value) in map {
            if names.contains(name) {
                out.insert(name.clone(), clone(value));
            }
        }
    }
    out
}

/// Push a merge up through enclosing objects until the root or an array.
fn bubble(
    target: &Value,
    mut path: Path,
    mut value: Map<String, Value>,
) -> Result<(Path, Map<String, Value>), OptimizeError> {
    while !is_root(&path) && resolve_parent_container(target, &path)?.is_object() {
        let mut wrapper = Map::new();
        if let Some(name) = path.pop() {
            wrapper.insert(name, Value::Object(value));
        }
        value = wrapper;
    }
    Ok((path, value))
}

// ── Tests ─────────────────────────────────────────────────────────────────
