//! # SHA-256 Hashing
//!
//! Digest used for transaction ids and TLS certificate bindings.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn compute_sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash the concatenation of several inputs without allocating.
pub fn compute_sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}
