//! Adapters layer

mod credentials;
mod deliverer;
mod ledger;

pub use credentials::{PemCredentials, StaticCredentials};
pub use deliverer::MpscDeliverer;
pub use ledger::LedgerHeightTracker;
