//! JSON Patch operations: types, the patch executor, and the JSON codec.
//!
//! # Operations
//!
//! The RFC 6902 subset a structural diff needs: `add`, `remove`,
//! `replace`. On top of that, `merge` applies a partial object onto the
//! object at its path with JSON Merge Patch (RFC 7396) semantics.

pub mod types;
pub mod apply;
pub mod codec;

pub use types::{Op, Path, PatchError};
pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
