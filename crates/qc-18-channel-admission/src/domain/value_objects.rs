//! # Domain Value Objects
//!
//! Snapshot types read from channel configuration, and the results the
//! admission filter hands back to its caller.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared_types::{ChannelHeader, ConfigEnvelope, Envelope};

use super::errors::CapabilityError;

/// Capabilities this build implements.
pub const SUPPORTED_CAPABILITIES: &[&str] = &["V1_4_2", "V2_0"];

/// Operating state of the ordering service.
///
/// Transitions are driven by separate reconfiguration transactions; the
/// admission filter only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsensusState {
    /// Regular operation; channel creation allowed.
    #[default]
    Normal,
    /// Reconfiguration window; channel creation forbidden.
    Maintenance,
}

/// Block cutting limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSize {
    /// Messages per block before a cut.
    pub max_message_count: u32,
    /// Hard ceiling for a single message.
    pub absolute_max_bytes: u32,
    /// Preferred block size.
    pub preferred_max_bytes: u32,
}

impl Default for BatchSize {
    fn default() -> Self {
        Self {
            max_message_count: 500,
            absolute_max_bytes: 10 * 1024 * 1024,
            preferred_max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Capabilities a config requires.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Required capability names.
    pub required: BTreeSet<String>,
}

impl Capabilities {
    /// Capabilities requiring each of `names`.
    pub fn requiring<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Fails on the first required capability this build does not implement.
    pub fn supported(&self) -> Result<(), CapabilityError> {
        match self
            .required
            .iter()
            .find(|name| !SUPPORTED_CAPABILITIES.contains(&name.as_str()))
        {
            Some(name) => Err(CapabilityError::Unsupported(name.clone())),
            None => Ok(()),
        }
    }
}

/// Orderer section of a channel configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererConfig {
    /// Consensus implementation name.
    pub consensus_type: String,
    /// Normal or maintenance.
    pub consensus_state: ConsensusState,
    /// Opaque consensus-specific metadata.
    pub consensus_metadata: Vec<u8>,
    /// Channel limit; 0 means unlimited.
    pub max_channels_count: u64,
    /// Block cutting limits.
    pub batch_size: BatchSize,
    /// Orderer capabilities.
    pub capabilities: Capabilities,
}

impl Default for OrdererConfig {
    fn default() -> Self {
        Self {
            consensus_type: "solo".to_string(),
            consensus_state: ConsensusState::Normal,
            consensus_metadata: Vec::new(),
            max_channels_count: 0,
            batch_size: BatchSize::default(),
            capabilities: Capabilities::default(),
        }
    }
}

/// Processing class of an inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageClass {
    /// Ordinary transaction.
    Normal,
    /// Request to change channel config.
    ConfigUpdate,
    /// Full config (or wrapped config for the system channel).
    Config,
}

/// Result of running the system channel filter over one envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Not a channel-creation proposal; left for the next stage.
    PassThrough,
    /// Proposal validated and handed to the chain creator.
    ChannelCreated {
        /// Id of the new channel
        channel_id: String,
    },
}

/// Channel-creation proposal extracted from an `ORDERER_TRANSACTION`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelCreationRequest {
    /// Channel header of the wrapped CONFIG envelope.
    pub config_header: ChannelHeader,
    /// Config envelope as received.
    pub config_envelope: ConfigEnvelope,
    /// The originating `CONFIG_UPDATE` envelope.
    pub last_update: Envelope,
}
