//! CRC-32 checksums of serialized documents.
//!
//! Uses the IEEE polynomial (the zlib/PNG/`java.util.zip.CRC32` variant) and
//! renders the value as lowercase hex without leading zeros, so checksums
//! exchanged with peers that format the same way compare as strings.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Compute the checksum of `bytes`.
///
/// # Errors
///
/// Empty input is rejected with [`ChecksumError::InvalidArgument`].
///
/// # Example
///
/// ```
/// use jsonsync_util::compute_checksum;
///
/// assert_eq!(compute_checksum(b"123456789").unwrap(), "cbf43926");
/// ```
pub fn compute_checksum(bytes: &[u8]) -> Result<String, ChecksumError> {
    if bytes.is_empty() {
        return Err(ChecksumError::InvalidArgument("input cannot be empty"));
    }
    Ok(format!("{:x}", crc32fast::hash(bytes)))
}

/// Checksum of the UTF-8 bytes of `text`.
pub fn compute_checksum_str(text: &str) -> Result<String, ChecksumError> {
    compute_checksum(text.as_bytes())
}

/// Check `bytes` against a previously computed checksum.
///
/// # Errors
///
/// Empty input or an empty `expected` checksum is an invalid argument.
pub fn verify_checksum(bytes: &[u8], expected: &str) -> Result<bool, ChecksumError> {
    if expected.is_empty() {
        return Err(ChecksumError::InvalidArgument("checksum cannot be empty"));
    }
    Ok(compute_checksum(bytes)? == expected)
}
