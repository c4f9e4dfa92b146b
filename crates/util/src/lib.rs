//! jsonsync-util - leaf utilities shared by the differ and the optimizer.
//!
//! Nothing here keeps state: structural equality and deep cloning over
//! `serde_json::Value`, plus the CRC-32 checksum used to fingerprint
//! serialized documents.

pub mod checksum;
pub mod json_clone;
pub mod json_equal;

pub use checksum::{compute_checksum, compute_checksum_str, verify_checksum, ChecksumError};
pub use json_clone::clone;
pub use json_equal::deep_equal;
