//! Core types for the JSON Patch module.

use serde_json::{Map, Value};
use thiserror::Error;

pub use jsonsync_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("INVALID_TARGET")]
    InvalidTarget,
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A patch operation.
///
/// The differ emits only the elementary kinds (`Add`, `Remove`, `Replace`);
/// `Merge` is produced by the optimizer when sibling fields of one object
/// are folded into a single step.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Insert (or overwrite, for object keys) the value at `path`.
    Add { path: Path, value: Value },
    /// Delete the value at `path`.
    Remove { path: Path },
    /// Overwrite the existing value at `path`; the root path swaps the
    /// whole document.
    Replace { path: Path, value: Value },
    /// Merge the listed fields into the object at `path`, recursing into
    /// nested objects and leaving unlisted fields untouched.
    Merge { path: Path, value: Map<String, Value> },
}

impl Op {
    /// Returns the wire name of the operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Merge { .. } => "merge",
        }
    }

    /// Returns the path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Merge { path, .. } => path,
        }
    }

    /// True for the kinds the differ emits.
    pub fn is_elementary(&self) -> bool {
        !matches!(self, Op::Merge { .. })
    }
}
