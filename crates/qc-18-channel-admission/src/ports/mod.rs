//! Ports layer (Hexagonal Architecture)
//!
//! Inbound: the message rule contract the ordering pipeline drives.
//! Outbound: system channel config, chain creation and metadata validation.

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
