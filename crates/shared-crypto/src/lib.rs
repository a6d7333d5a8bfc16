//! # Shared Crypto - Signing and Hashing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `identity` | Ed25519 | Envelope signing, creator identities |
//! | `hashing` | SHA-256 | Transaction ids, TLS certificate binding |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency when signing
//! - **SHA-256**: Matches the digest peers compute over their TLS leaf certificate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod identity;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{compute_sha256, compute_sha256_many, Hash};
pub use identity::{Ed25519KeyPair, LocalSigner, SerializedIdentity, SignerSerializer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
