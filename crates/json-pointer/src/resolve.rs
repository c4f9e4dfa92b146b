//! Strict lookups that report which pointer failed to resolve.

use serde_json::Value;

use crate::get::get;
use crate::util::{format_json_pointer, parent};
use crate::JsonPointerError;

/// Resolve `path` against `root`.
///
/// Unlike [`get`], a missing node is an error carrying the formatted pointer.
pub fn resolve<'a>(root: &'a Value, path: &[String]) -> Result<&'a Value, JsonPointerError> {
    get(root, path).ok_or_else(|| JsonPointerError::NoSuchPath(format_json_pointer(path)))
}

/// Resolve `path` and require the node to be an array or object.
pub fn resolve_container<'a>(
    root: &'a Value,
    path: &[String],
) -> Result<&'a Value, JsonPointerError> {
    let node = resolve(root, path)?;
    match node {
        Value::Array(_) | Value::Object(_) => Ok(node),
        _ => Err(JsonPointerError::IllegalContainer(format_json_pointer(path))),
    }
}

/// Resolve the container that holds the node at `path`.
///
/// The root path has no container and yields [`JsonPointerError::NoParent`].
pub fn resolve_parent_container<'a>(
    root: &'a Value,
    path: &[String],
) -> Result<&'a Value, JsonPointerError> {
    resolve_container(root, &parent(path)?)
}
