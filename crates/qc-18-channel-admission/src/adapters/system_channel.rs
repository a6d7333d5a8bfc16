//! Shared, mutable view of the system channel's orderer config.

use parking_lot::RwLock;

use crate::domain::{ConsensusState, OrdererConfig};
use crate::ports::SystemChannelSupport;

/// System channel config shared between the filter and reconfiguration.
///
/// Readers always get a cloned snapshot.
#[derive(Debug, Default)]
pub struct SharedSystemChannel {
    orderer: RwLock<Option<OrdererConfig>>,
}

impl SharedSystemChannel {
    /// System channel with the given orderer config.
    pub fn new(orderer: OrdererConfig) -> Self {
        Self {
            orderer: RwLock::new(Some(orderer)),
        }
    }

    /// System channel whose config has no orderer group.
    pub fn without_orderer() -> Self {
        Self {
            orderer: RwLock::new(None),
        }
    }

    /// Switch between normal operation and maintenance.
    ///
    /// No-op when there is no orderer config.
    pub fn set_consensus_state(&self, state: ConsensusState) {
        if let Some(orderer) = self.orderer.write().as_mut() {
            orderer.consensus_state = state;
        }
    }

    /// Replace the orderer config.
    pub fn update(&self, orderer: OrdererConfig) {
        *self.orderer.write() = Some(orderer);
    }
}

impl SystemChannelSupport for SharedSystemChannel {
    fn orderer_config(&self) -> Option<OrdererConfig> {
        self.orderer.read().clone()
    }
}
