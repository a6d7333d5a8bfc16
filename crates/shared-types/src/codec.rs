//! # Binary Codec
//!
//! All wire messages use bincode with varint integers, rejected trailing
//! bytes and a hard size limit. Decoding arbitrary bytes is safe: the limit
//! bounds every length prefix before allocation.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CodecError;

/// Upper bound on any single encoded message (100 MiB).
pub const MAX_MESSAGE_BYTES: u64 = 100 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_MESSAGE_BYTES)
}

/// Encode a message.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    options()
        .serialize(value)
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode a message, rejecting trailing bytes.
pub fn unmarshal<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    options()
        .deserialize(bytes)
        .map_err(|e| CodecError::Decode(e.to_string()))
}
