//! Pure algorithms
//!
//! - unwrap: nested envelope decoding, one fallible step per layer
//! - classify: processing class of an inbound message

pub mod classify;
pub mod unwrap;

pub use classify::classify_msg;
pub use unwrap::{unwrap_channel_creation, unwrap_outer, OuterMessage};
