//! # In-Memory Registrar
//!
//! Chain creator backed by an in-process channel registry. Candidate channel
//! resources are built from a template orderer config; the new channel's
//! configuration tree is the update's write set.
//!
//! `create_channel` is the serialized enforcement point: duplicate ids and
//! the channel limit are checked under the registry lock, so concurrent
//! proposals that all pass the filter's advisory capacity check cannot
//! overshoot the limit.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use shared_types::{unwrap_config_update, Config, ConfigEnvelope, ConfigUpdate, Envelope};
use tracing::debug;

use crate::domain::{Capabilities, ChannelConfigError, OrdererConfig};
use crate::ports::{ChainCreator, ChannelResources, SystemChannelSupport};

/// Name of the orderer group in a channel config tree.
pub const ORDERER_GROUP: &str = "Orderer";

/// Value under [`ORDERER_GROUP`] overriding the template's consensus metadata.
pub const CONSENSUS_METADATA_KEY: &str = "ConsensusMetadata";

/// Config a channel-creation update resolves to: sequence 1, rooted at the
/// update's write set.
pub fn proposed_channel_config(update: &ConfigUpdate) -> Config {
    Config {
        sequence: 1,
        channel_group: update.write_set.clone(),
    }
}

/// Defaults applied to every new channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelTemplate {
    /// Orderer section inherited from the system channel.
    pub orderer: OrdererConfig,
    /// Channel-level capabilities.
    pub channel_capabilities: Capabilities,
}

/// Channel resources derived from a [`ChannelTemplate`].
#[derive(Clone, Debug)]
pub struct TemplateResources {
    channel_id: String,
    orderer: Option<OrdererConfig>,
    channel_capabilities: Capabilities,
}

impl TemplateResources {
    /// Resources for `channel_id` with the template's orderer section.
    pub fn new(channel_id: impl Into<String>, template: &ChannelTemplate) -> Self {
        Self {
            channel_id: channel_id.into(),
            orderer: Some(template.orderer.clone()),
            channel_capabilities: template.channel_capabilities.clone(),
        }
    }

    /// Resources for a full config. The orderer group's consensus metadata,
    /// when present, replaces the template's.
    pub fn from_config(channel_id: &str, config: &Config, template: &ChannelTemplate) -> Self {
        let mut resources = Self::new(channel_id, template);
        let metadata = config
            .channel_group
            .groups
            .get(ORDERER_GROUP)
            .and_then(|group| group.values.get(CONSENSUS_METADATA_KEY));
        if let (Some(orderer), Some(value)) = (resources.orderer.as_mut(), metadata) {
            orderer.consensus_metadata = value.value.clone();
        }
        resources
    }
}

impl ChannelResources for TemplateResources {
    fn channel_id(&self) -> &str {
        &self.channel_id
    }

    fn propose_config_update(
        &self,
        update: &Envelope,
    ) -> Result<ConfigEnvelope, ChannelConfigError> {
        let config_update = unwrap_config_update(update)
            .map_err(|e| ChannelConfigError::MalformedUpdate(e.to_string()))?;
        if config_update.channel_id != self.channel_id {
            return Err(ChannelConfigError::ChannelMismatch {
                expected: self.channel_id.clone(),
                actual: config_update.channel_id,
            });
        }

        Ok(ConfigEnvelope {
            config: Some(proposed_channel_config(&config_update)),
            last_update: Some(update.clone()),
        })
    }

    fn validate_new(&self, candidate: &dyn ChannelResources) -> Result<(), ChannelConfigError> {
        if candidate.channel_id() != self.channel_id {
            return Err(ChannelConfigError::ChannelMismatch {
                expected: self.channel_id.clone(),
                actual: candidate.channel_id().to_string(),
            });
        }
        Ok(())
    }

    fn orderer_config(&self) -> Option<OrdererConfig> {
        self.orderer.clone()
    }

    fn channel_capabilities(&self) -> Capabilities {
        self.channel_capabilities.clone()
    }
}

/// In-process chain creator.
///
/// Counts application channels only; the system channel id is reserved.
pub struct InMemoryRegistrar {
    system_channel_id: String,
    template: ChannelTemplate,
    support: Arc<dyn SystemChannelSupport>,
    channels: Mutex<BTreeMap<String, Arc<dyn ChannelResources>>>,
}

impl InMemoryRegistrar {
    /// Registrar for the system channel `system_channel_id`, enforcing the
    /// channel limit read from `support`.
    pub fn new(
        system_channel_id: impl Into<String>,
        support: Arc<dyn SystemChannelSupport>,
        template: ChannelTemplate,
    ) -> Self {
        Self {
            system_channel_id: system_channel_id.into(),
            template,
            support,
            channels: Mutex::new(BTreeMap::new()),
        }
    }

    /// Registered application channel ids, sorted.
    pub fn channel_ids(&self) -> Vec<String> {
        self.channels.lock().keys().cloned().collect()
    }

    /// Whether `channel_id` is registered.
    pub fn contains(&self, channel_id: &str) -> bool {
        self.channels.lock().contains_key(channel_id)
    }
}

impl ChainCreator for InMemoryRegistrar {
    fn channels_count(&self) -> usize {
        self.channels.lock().len()
    }

    fn new_channel_config(
        &self,
        update: &Envelope,
    ) -> Result<Arc<dyn ChannelResources>, ChannelConfigError> {
        let config_update = unwrap_config_update(update)
            .map_err(|e| ChannelConfigError::MalformedUpdate(e.to_string()))?;
        if config_update.channel_id.is_empty() {
            return Err(ChannelConfigError::EmptyChannelId);
        }
        Ok(Arc::new(TemplateResources::new(
            config_update.channel_id,
            &self.template,
        )))
    }

    fn create_bundle(
        &self,
        channel_id: &str,
        config: &Config,
    ) -> Result<Arc<dyn ChannelResources>, ChannelConfigError> {
        if channel_id.is_empty() {
            return Err(ChannelConfigError::EmptyChannelId);
        }
        Ok(Arc::new(TemplateResources::from_config(
            channel_id,
            config,
            &self.template,
        )))
    }

    fn create_channel(&self, bundle: Arc<dyn ChannelResources>) -> Result<(), ChannelConfigError> {
        let channel_id = bundle.channel_id().to_string();
        let mut channels = self.channels.lock();

        if channel_id == self.system_channel_id || channels.contains_key(&channel_id) {
            return Err(ChannelConfigError::ChannelExists(channel_id));
        }

        let max = self
            .support
            .orderer_config()
            .map(|o| o.max_channels_count)
            .unwrap_or(0);
        if max > 0 && channels.len() as u64 >= max {
            return Err(ChannelConfigError::CapacityExceeded { max });
        }

        channels.insert(channel_id.clone(), bundle);
        debug!(channel_id = %channel_id, count = channels.len(), "[qc-18] Channel registered");
        Ok(())
    }
}
