//! Driven ports (Outbound dependencies)
//!
//! All collaborators are synchronous and must be safe to share across
//! threads: the filter may be applied concurrently.

use std::sync::Arc;

use shared_types::{Config, ConfigEnvelope, Envelope};

use crate::domain::{Capabilities, ChannelConfigError, MetadataError, OrdererConfig};

/// Read access to the system channel's configuration.
pub trait SystemChannelSupport: Send + Sync {
    /// Current orderer config, `None` if the system channel has none.
    ///
    /// Callers take one snapshot per decision.
    fn orderer_config(&self) -> Option<OrdererConfig>;
}

/// Channel configuration materialized for a single channel.
pub trait ChannelResources: Send + Sync {
    /// Channel these resources describe.
    fn channel_id(&self) -> &str;

    /// Apply a `CONFIG_UPDATE` envelope, producing the resulting config envelope.
    fn propose_config_update(&self, update: &Envelope)
        -> Result<ConfigEnvelope, ChannelConfigError>;

    /// Check that `candidate` is a valid successor of these resources.
    fn validate_new(&self, candidate: &dyn ChannelResources) -> Result<(), ChannelConfigError>;

    /// Orderer section, `None` if the config has no orderer group.
    fn orderer_config(&self) -> Option<OrdererConfig>;

    /// Channel-level capabilities.
    fn channel_capabilities(&self) -> Capabilities;
}

/// Creates and counts channels.
pub trait ChainCreator: Send + Sync {
    /// Channels currently registered.
    fn channels_count(&self) -> usize;

    /// Materialize candidate resources for the channel named by a
    /// `CONFIG_UPDATE` envelope.
    fn new_channel_config(
        &self,
        update: &Envelope,
    ) -> Result<Arc<dyn ChannelResources>, ChannelConfigError>;

    /// Build resources from a full config.
    fn create_bundle(
        &self,
        channel_id: &str,
        config: &Config,
    ) -> Result<Arc<dyn ChannelResources>, ChannelConfigError>;

    /// Instantiate a validated channel.
    fn create_channel(&self, bundle: Arc<dyn ChannelResources>) -> Result<(), ChannelConfigError>;
}

/// Consensus-type specific metadata checks.
pub trait MetadataValidator: Send + Sync {
    /// Validate a metadata transition.
    ///
    /// `is_new_channel` is true when `new` belongs to a channel being created.
    fn validate_consensus_metadata(
        &self,
        old: &[u8],
        new: &[u8],
        is_new_channel: bool,
    ) -> Result<(), MetadataError>;
}
