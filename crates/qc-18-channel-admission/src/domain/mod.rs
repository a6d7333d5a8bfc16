//! Domain layer for channel admission
//!
//! Error taxonomy and the orderer-config snapshot types the filter reads.

mod errors;
mod value_objects;

pub use errors::*;
pub use value_objects::*;
