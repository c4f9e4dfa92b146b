//! Core logic behind the command-line tools:
//! - `json-diff`:     print the patch that turns one document into another
//! - `json-patch`:    apply a patch to a document
//! - `json-checksum`: print the CRC-32 of the input bytes

use jsonsync_util::{compute_checksum, ChecksumError};
use serde_json::Value;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::Layer as FmtLayer;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::{Layer as _, Registry};

use crate::json_patch::{apply_patch, from_json_patch, to_json_patch, PatchError};
use crate::json_patch_diff::DiffOptions;
use crate::json_patch_merge::OptimizeError;

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "JSONSYNC_LOG";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Install a stderr logger.
///
/// `verbose` forces `trace`; otherwise the level comes from [`LOG_ENV`],
/// falling back to `warn` when unset or unparsable.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::TRACE
    } else {
        std::env::var(LOG_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::WARN)
    };
    let fmt_layer = FmtLayer::new().with_writer(std::io::stderr).with_target(false);
    let subscriber = Registry::default().with(fmt_layer.with_filter(level));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Logging(e.to_string()))
}

// ── json-diff ─────────────────────────────────────────────────────────────

/// Diff two documents given as JSON text.
///
/// Returns the patch as a pretty-printed JSON array.
pub fn diff_json(source_json: &str, target_json: &str, optimize: bool) -> Result<String, CliError> {
    let source: Value = serde_json::from_str(source_json)?;
    let target: Value = serde_json::from_str(target_json)?;
    let ops = DiffOptions { optimize }.strategy().diff(&source, &target)?;
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a patch (JSON array text) to a document (JSON text).
///
/// Accepts `merge` operations alongside the elementary ones.
pub fn apply_json_patch(doc_json: &str, patch_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops = from_json_patch(&serde_json::from_str(patch_json)?)?;
    let result = apply_patch(doc, &ops)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

// ── json-checksum ─────────────────────────────────────────────────────────

pub fn checksum(bytes: &[u8]) -> Result<String, CliError> {
    Ok(compute_checksum(bytes)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
