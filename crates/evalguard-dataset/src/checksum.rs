//! Content checksum for dataset files.
//!
//! The digest covers the raw file bytes, blank lines and line endings
//! included, so it changes whenever the uploaded object would.

use sha2::{Digest, Sha256};

/// SHA-256 of `bytes` as a lowercase 64-character hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
