//! # Shared Types Crate
//!
//! Wire messages exchanged with the ordering service, their codec and the
//! signed-envelope builder.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: message layouts used by every service crate
//!   are defined here.
//! - **Raw Where Untrusted**: header types stay raw `i32` on the wire so that
//!   unknown values decode and are rejected by the consumer, not the codec.
//! - **Creator Authority**: the signature header's creator is the only
//!   identity a receiver acts on.

pub mod codec;
pub mod common;
pub mod configtx;
pub mod envelope;
pub mod errors;
pub mod seek;

pub use codec::{marshal, unmarshal, MAX_MESSAGE_BYTES};
pub use common::{ChannelHeader, Envelope, Header, HeaderType, Payload, SignatureHeader};
pub use configtx::{
    make_channel_creation_transaction, unwrap_config_update, Config, ConfigEnvelope,
    ConfigGroup, ConfigSignature, ConfigUpdate, ConfigUpdateEnvelope, ConfigValue,
};
pub use envelope::{
    create_signed_envelope, create_signed_envelope_with_tls_binding, verify_envelope,
};
pub use errors::{CodecError, EnvelopeError};
pub use seek::{SeekBehavior, SeekInfo, SeekPosition};
