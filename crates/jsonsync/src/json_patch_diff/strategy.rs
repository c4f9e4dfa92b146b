use serde_json::Value;

use crate::json_patch::Op;
use crate::json_patch_merge::{optimize, OptimizeError};

/// A way of turning a pair of documents into a patch.
pub trait DiffStrategy {
    fn diff(&self, src: &Value, dst: &Value) -> Result<Vec<Op>, OptimizeError>;
}

/// Elementary `add` / `remove` / `replace` operations only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleDiff;

impl DiffStrategy for SimpleDiff {
    fn diff(&self, src: &Value, dst: &Value) -> Result<Vec<Op>, OptimizeError> {
        Ok(super::diff(src, dst))
    }
}

/// Elementary diff folded into `merge` operations by the optimizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOperationDiff;

impl DiffStrategy for MergeOperationDiff {
    fn diff(&self, src: &Value, dst: &Value) -> Result<Vec<Op>, OptimizeError> {
        optimize(dst, super::diff(src, dst))
    }
}

/// Options for picking a diff strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Fold sibling field changes into `merge` operations.
    pub optimize: bool,
}

impl DiffOptions {
    pub fn strategy(&self) -> &'static dyn DiffStrategy {
        if self.optimize {
            &MergeOperationDiff
        } else {
            &SimpleDiff
        }
    }
}
