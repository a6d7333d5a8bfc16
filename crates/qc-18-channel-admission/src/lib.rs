//! # qc-18-channel-admission
//!
//! Channel-creation admission for the ordering service's system channel.
//!
//! ## Architecture
//!
//! Channel creation arrives as an `ORDERER_TRANSACTION` whose data wraps a
//! `CONFIG` envelope, whose data in turn is a `ConfigEnvelope` carrying the
//! originating `CONFIG_UPDATE`. The [`SystemChannelFilter`] unwraps that
//! nesting, gates on the system channel's orderer config (maintenance mode,
//! channel limit), materializes and cross-checks the candidate config, lets a
//! consensus-specific [`MetadataValidator`] veto it, and only then commits
//! the channel through the [`ChainCreator`].
//!
//! ```text
//! Envelope ──▶ [EmptyRejectRule] ──▶ [MaxBytesRule] ──▶ [SystemChannelFilter]
//!                                                            │
//!                      SystemChannelSupport ◀────────────────┤
//!                      ChainCreator         ◀────────────────┤
//!                      MetadataValidator    ◀────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qc_18_channel_admission::{
//!     AcceptAllMetadataValidator, AdmissionConfig, ChannelTemplate, InMemoryRegistrar,
//!     RuleSet, SharedSystemChannel,
//! };
//!
//! let system = Arc::new(SharedSystemChannel::new(orderer_config));
//! let registrar = Arc::new(InMemoryRegistrar::new("system", system.clone(), template));
//! let rules = RuleSet::system_channel(
//!     &AdmissionConfig::from_env(),
//!     system,
//!     registrar,
//!     Arc::new(AcceptAllMetadataValidator),
//! );
//! rules.apply(&envelope)?;
//! ```
//!
//! ## Guarantees
//!
//! - Fails closed: no channel is created on any error.
//! - One orderer-config snapshot per decision.
//! - The filter never changes the consensus state.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod ports;

// Re-export main types
pub use adapters::{
    AcceptAllMetadataValidator, ChannelTemplate, InMemoryRegistrar, SharedSystemChannel,
    TemplateResources,
};
pub use algorithms::classify_msg;
pub use application::{EmptyRejectRule, MaxBytesRule, RuleSet, SystemChannelFilter};
pub use config::AdmissionConfig;
pub use domain::{
    AdmissionError, BatchSize, Capabilities, CapabilityError, ChannelConfigError,
    ConsensusState, FilterOutcome, MessageClass, MetadataError, OrdererConfig,
};
pub use ports::{ChainCreator, ChannelResources, MetadataValidator, Rule, SystemChannelSupport};
