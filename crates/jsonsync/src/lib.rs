//! jsonsync: structural JSON diff with merge-operation optimization.
//!
//! Two stages, used in sequence:
//!
//! 1. [`diff`] compares two documents and emits elementary `add` / `remove`
//!    / `replace` operations.
//! 2. [`optimize`] folds operations on sibling fields of one object into
//!    `merge` operations and pushes those merges up through enclosing
//!    objects.
//!
//! Around them sit the patch executor ([`apply_patch`]), the merge
//! processor ([`json_merge`]), the checksummed sync envelope
//! ([`json_sync`]) and the command-line helpers ([`json_cli`]).
//!
//! ```
//! use jsonsync::{apply_patch, diff, optimize};
//! use serde_json::json;
//!
//! let src = json!({"a": 1, "b": 2});
//! let dst = json!({"a": 1, "b": 3, "c": 4});
//! let ops = optimize(&dst, diff(&src, &dst)).unwrap();
//! assert_eq!(ops.len(), 1);
//! assert_eq!(apply_patch(src, &ops).unwrap(), dst);
//! ```

pub mod json_cli;
pub mod json_merge;
pub mod json_patch;
pub mod json_patch_diff;
pub mod json_patch_merge;
pub mod json_sync;

pub use json_patch::{apply_patch, Op, Path, PatchError};
pub use json_patch_diff::{diff, DiffOptions, DiffStrategy};
pub use json_patch_merge::{optimize, OptimizeError};
pub use json_sync::{SyncData, SyncError, SyncProcessor};
