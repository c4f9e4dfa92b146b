use crate::types::{Path, AFTER_LAST_ARRAY_ELEMENT};
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..].split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Get the parent path of a given path.
pub fn parent(path: &[String]) -> Result<Path, JsonPointerError> {
    match path.split_last() {
        Some((_, head)) => Ok(head.to_vec()),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Return a new path with `step` appended.
pub fn append(path: &[String], step: impl Into<String>) -> Path {
    let mut out = Vec::with_capacity(path.len() + 1);
    out.extend_from_slice(path);
    out.push(step.into());
    out
}

/// The last step of `path`, or `None` for the root.
pub fn last_token(path: &[String]) -> Option<&str> {
    path.last().map(String::as_str)
}

/// True when the last step is the after-last-element marker `-`.
pub fn is_after_last_array_element(path: &[String]) -> bool {
    last_token(path) == Some(AFTER_LAST_ARRAY_ELEMENT)
}

/// Check if a string represents a valid non-negative integer array index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse the last step of `path` as an array index.
pub fn parse_last_index(path: &[String]) -> Result<usize, JsonPointerError> {
    let last = last_token(path).ok_or(JsonPointerError::NoParent)?;
    if !is_valid_index(last) {
        return Err(JsonPointerError::InvalidIndex);
    }
    last.parse().map_err(|_| JsonPointerError::InvalidIndex)
}
