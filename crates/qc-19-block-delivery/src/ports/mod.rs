//! Ports layer (Hexagonal Architecture)
//!
//! The requester is driven directly by the delivery service; it only has
//! outbound dependencies.

mod outbound;

pub use outbound::*;
