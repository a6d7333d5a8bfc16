//! Domain layer for block delivery

mod errors;
mod seek;

pub use errors::*;
pub use seek::*;
