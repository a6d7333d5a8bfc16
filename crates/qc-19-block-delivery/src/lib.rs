//! # qc-19-block-delivery
//!
//! Deliver-stream (re)subscription for a ledger-consuming node.
//!
//! ## Architecture
//!
//! Whenever the delivery service (re)connects to an orderer it asks the
//! [`BlocksRequester`] to send one seek request. The request resumes where
//! the local ledger ends, so a reconnect never re-downloads committed blocks
//! and never skips one:
//!
//! ```text
//! LedgerInfo ──height──▶ [BlocksRequester] ──DELIVER_SEEK_INFO──▶ BlocksDeliverer
//!                              ▲
//!        CredentialSupport ────┘ (leaf cert hash, TLS only)
//!        SignerSerializer  ────┘ (envelope signature)
//! ```
//!
//! | Ledger height | Start | Stop | Behavior |
//! |---|---|---|---|
//! | 0 | Oldest | Specified(u64::MAX) | BlockUntilReady |
//! | h > 0 | Specified(h) | Specified(u64::MAX) | BlockUntilReady |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qc_19_block_delivery::{BlocksRequester, DeliverConfig, LedgerHeightTracker, MpscDeliverer};
//!
//! let (deliverer, stream) = MpscDeliverer::channel(16);
//! let requester = BlocksRequester::from_config(
//!     &DeliverConfig::from_env(),
//!     "mychannel",
//!     Arc::new(deliverer),
//!     signer,
//! )?;
//! requester.request_blocks(&ledger).await?;
//! ```
//!
//! ## Cancellation
//!
//! There is no timeout or retry here. Tearing down the stream (dropping the
//! receiving half) makes the pending send fail.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

// Re-export main types
pub use adapters::{LedgerHeightTracker, MpscDeliverer, PemCredentials, StaticCredentials};
pub use application::BlocksRequester;
pub use config::DeliverConfig;
pub use domain::{seek_info_for_height, CredentialError, DeliverError, LedgerError, SendError};
pub use ports::{BlocksDeliverer, CredentialSupport, LedgerInfo};
