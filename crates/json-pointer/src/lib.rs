//! JSON Pointer (RFC 6901) utilities.
//!
//! Paths are plain `Vec<String>` values: the empty path is the document
//! root, object keys are stored unescaped and array indices are decimal
//! strings. Escaping only happens at the text boundary.
//!
//! # Example
//!
//! ```
//! use jsonsync_json_pointer::{append, format_json_pointer, parse_json_pointer, resolve};
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(path, vec!["foo".to_string(), "bar".to_string()]);
//!
//! let deeper = append(&path, "a/b");
//! assert_eq!(format_json_pointer(&deeper), "/foo/bar/a~1b");
//!
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! assert_eq!(resolve(&doc, &path).unwrap(), &serde_json::json!(42));
//! ```

use thiserror::Error;

pub mod get;
pub mod resolve;
pub mod types;
pub mod util;

pub use get::{get, get_mut};
pub use resolve::{resolve, resolve_container, resolve_parent_container};
pub use types::{Path, PathStep, AFTER_LAST_ARRAY_ELEMENT};
pub use util::{
    append, escape_component, format_json_pointer, is_after_last_array_element, is_root,
    is_valid_index, last_token, parent, parse_json_pointer, parse_last_index,
    unescape_component,
};

/// Errors raised while navigating a document by pointer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// A step of the pointer does not exist in the document.
    #[error("no such path - {0}")]
    NoSuchPath(String),
    /// The pointer resolves, but not to an array or object.
    #[error("path is not a container - {0}")]
    IllegalContainer(String),
    #[error("root path has no parent")]
    NoParent,
    #[error("invalid array index")]
    InvalidIndex,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unescape_component() {
        assert_eq!(unescape_component("foo"), "foo");

        assert_eq!(unescape_component("a~0b"), "a~b");
        assert_eq!(unescape_component("c~1d"), "c/d");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");

        // ~01 is an escaped tilde followed by "1", not a slash
        assert_eq!(unescape_component("~01"), "~1");
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component("a~b"), "a~0b");
        assert_eq!(escape_component("c/d"), "c~1d");
        assert_eq!(escape_component("~1"), "~01");
    }

    #[test]
    fn test_parse_json_pointer() {
        assert_eq!(parse_json_pointer(""), Vec::<String>::new());
        assert_eq!(parse_json_pointer("/"), vec![""]);
        assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
        assert_eq!(parse_json_pointer("/a~0b/c~1d/1"), vec!["a~b", "c/d", "1"]);
    }

    #[test]
    fn test_format_json_pointer() {
        assert_eq!(format_json_pointer(&[]), "");
        assert_eq!(format_json_pointer(&["foo".to_string()]), "/foo");
        assert_eq!(
            format_json_pointer(&["a~b".to_string(), "c/d".to_string()]),
            "/a~0b/c~1d"
        );
        assert_eq!(format_json_pointer(&["".to_string()]), "/");
    }

    #[test]
    fn test_append_parent_last_token() {
        let root: Path = Vec::new();
        let p = append(&append(&root, "a"), "0");
        assert_eq!(p, vec!["a", "0"]);
        assert_eq!(last_token(&p), Some("0"));
        assert_eq!(parent(&p).unwrap(), vec!["a"]);
        assert_eq!(parent(&parent(&p).unwrap()).unwrap(), Vec::<String>::new());
        assert_eq!(parent(&root), Err(JsonPointerError::NoParent));
        assert_eq!(last_token(&root), None);
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(&[]));
        assert!(!is_root(&["foo".to_string()]));
    }

    #[test]
    fn test_after_last_array_element() {
        assert!(is_after_last_array_element(&["list".to_string(), "-".to_string()]));
        assert!(!is_after_last_array_element(&["list".to_string(), "0".to_string()]));
        assert!(!is_after_last_array_element(&[]));
    }

    #[test]
    fn test_parse_last_index() {
        assert_eq!(parse_last_index(&["a".to_string(), "12".to_string()]), Ok(12));
        assert_eq!(
            parse_last_index(&["a".to_string(), "x".to_string()]),
            Err(JsonPointerError::InvalidIndex)
        );
        assert_eq!(
            parse_last_index(&["01".to_string()]),
            Err(JsonPointerError::InvalidIndex)
        );
    }

    #[test]
    fn test_get() {
        let doc = json!({"foo": {"bar": [10, 20]}});
        assert_eq!(get(&doc, &[]), Some(&doc));
        assert_eq!(
            get(&doc, &["foo".to_string(), "bar".to_string(), "1".to_string()]),
            Some(&json!(20))
        );
        assert_eq!(
            get(&doc, &["foo".to_string(), "bar".to_string(), "-".to_string()]),
            None
        );
        assert_eq!(get(&doc, &["missing".to_string()]), None);
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"foo": [1]});
        if let Some(v) = get_mut(&mut doc, &["foo".to_string(), "0".to_string()]) {
            *v = json!(2);
        }
        assert_eq!(doc, json!({"foo": [2]}));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            JsonPointerError::NoSuchPath("/a/b".into()).to_string(),
            "no such path - /a/b"
        );
        assert_eq!(
            JsonPointerError::IllegalContainer("/a".into()).to_string(),
            "path is not a container - /a"
        );
    }
}
