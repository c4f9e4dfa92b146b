//! Sync envelope: a versioned patch plus an optional checksum of the
//! document it produces.
//!
//! The sending side diffs its last shared state against its current state
//! ([`SyncProcessor::client_sync`]); the receiving side applies the patch
//! and, when a checksum travels with it, refuses results that do not match
//! ([`SyncProcessor::server_sync`]).

use jsonsync_util::{compute_checksum, verify_checksum, ChecksumError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::json_patch::{apply_patch, from_json_patch, to_json_patch, Op, PatchError};
use crate::json_patch_diff::DiffOptions;
use crate::json_patch_merge::OptimizeError;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
    #[error("invalid sync data: {0}")]
    InvalidEnvelope(String),
}

/// A patch tagged with the version it was produced from.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncData {
    pub version: u64,
    pub operations: Vec<Op>,
    /// Checksum of the serialized document the operations produce.
    pub checksum: Option<String>,
}

impl SyncData {
    /// Wire form: `{"version": n, "operations": [...], "checksum": "..."}`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("version".into(), json!(self.version));
        obj.insert("operations".into(), to_json_patch(&self.operations));
        if let Some(checksum) = &self.checksum {
            obj.insert("checksum".into(), json!(checksum));
        }
        Value::Object(obj)
    }

    pub fn from_json(v: &Value) -> Result<Self, SyncError> {
        let obj = v
            .as_object()
            .ok_or_else(|| SyncError::InvalidEnvelope("expected an object".into()))?;
        let version = obj
            .get("version")
            .and_then(Value::as_u64)
            .ok_or_else(|| SyncError::InvalidEnvelope("missing 'version'".into()))?;
        let operations = match obj.get("operations") {
            Some(ops) => from_json_patch(ops)?,
            None => Vec::new(),
        };
        let checksum = match obj.get("checksum") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(SyncError::InvalidEnvelope("'checksum' must be a string".into()))
            }
        };
        Ok(SyncData { version, operations, checksum })
    }
}

/// Produces and consumes [`SyncData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessor {
    options: DiffOptions,
}

impl SyncProcessor {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    /// Diff `source` against `target` and checksum the serialized target.
    pub fn client_sync(
        &self,
        version: u64,
        source: &Value,
        target: &Value,
    ) -> Result<SyncData, SyncError> {
        let operations = self.options.strategy().diff(source, target)?;
        let checksum = compute_checksum(&serde_json::to_vec(target)?)?;
        debug!(version, ops = operations.len(), %checksum, "client sync");
        Ok(SyncData { version, operations, checksum: Some(checksum) })
    }

    /// Apply `data` to `doc`, verifying the checksum when one is present.
    pub fn server_sync(&self, doc: Value, data: &SyncData) -> Result<Value, SyncError> {
        let result = apply_patch(doc, &data.operations)?;
        if let Some(expected) = &data.checksum {
            let bytes = serde_json::to_vec(&result)?;
            if !verify_checksum(&bytes, expected)? {
                let actual = compute_checksum(&bytes)?;
                warn!(version = data.version, %expected, %actual, "checksum mismatch");
                return Err(SyncError::ChecksumMismatch { expected: expected.clone(), actual });
            }
        }
        debug!(version = data.version, ops = data.operations.len(), "server sync");
        Ok(result)
    }

    /// Diff two typed values through their JSON representation.
    pub fn diff_objects<T: Serialize>(&self, source: &T, target: &T) -> Result<Vec<Op>, SyncError> {
        let source = serde_json::to_value(source)?;
        let target = serde_json::to_value(target)?;
        Ok(self.options.strategy().diff(&source, &target)?)
    }

    /// Apply `ops` to a typed value and read the result back.
    pub fn apply_to_object<T>(&self, object: &T, ops: &[Op]) -> Result<T, SyncError>
    where
        T: Serialize + DeserializeOwned,
    {
        let doc = apply_patch(serde_json::to_value(object)?, ops)?;
        Ok(serde_json::from_value(doc)?)
    }
}
