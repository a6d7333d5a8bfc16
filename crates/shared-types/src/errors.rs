//! # Error Types
//!
//! Codec and envelope-construction errors shared by every service crate.

use shared_crypto::CryptoError;
use thiserror::Error;

/// Binary encoding/decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Value could not be encoded.
    #[error("encode failed: {0}")]
    Encode(String),

    /// Bytes did not decode into the expected message.
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Errors raised while building or checking a signed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// A nested message failed to encode or decode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The signer could not produce a signature or identity.
    #[error("signing failed: {0}")]
    Signing(#[from] CryptoError),

    /// Payload carries no header.
    #[error("missing payload header")]
    MissingHeader,
}
