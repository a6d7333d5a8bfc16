//! # Message Rules
//!
//! Generic per-message checks and the ordered rule set that chains them
//! with the system channel filter.

use std::sync::Arc;

use shared_types::Envelope;
use tracing::debug;

use crate::config::AdmissionConfig;
use crate::domain::AdmissionError;
use crate::ports::{ChainCreator, MetadataValidator, Rule, SystemChannelSupport};

use super::system_filter::SystemChannelFilter;

/// Rejects envelopes with no payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyRejectRule;

impl Rule for EmptyRejectRule {
    fn apply(&self, env: &Envelope) -> Result<(), AdmissionError> {
        if env.payload.is_empty() {
            return Err(AdmissionError::EmptyMessage);
        }
        Ok(())
    }
}

/// Rejects envelopes larger than the batch size's absolute maximum.
///
/// Size is payload plus signature. The limit is read from the system channel
/// on every call.
pub struct MaxBytesRule {
    support: Arc<dyn SystemChannelSupport>,
}

impl MaxBytesRule {
    /// Rule reading its limit from `support`.
    pub fn new(support: Arc<dyn SystemChannelSupport>) -> Self {
        Self { support }
    }
}

impl Rule for MaxBytesRule {
    fn apply(&self, env: &Envelope) -> Result<(), AdmissionError> {
        let max = self
            .support
            .orderer_config()
            .ok_or(AdmissionError::MissingOrdererConfig)?
            .batch_size
            .absolute_max_bytes;
        let size = env.payload.len() + env.signature.len();
        if size > max as usize {
            return Err(AdmissionError::MessageTooLarge { size, max });
        }
        Ok(())
    }
}

/// Ordered rules; the first failure rejects the message.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Rule set evaluating `rules` in order.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Rules for the system channel: the generic rules enabled in `config`,
    /// then the system channel filter.
    pub fn system_channel(
        config: &AdmissionConfig,
        support: Arc<dyn SystemChannelSupport>,
        chain_creator: Arc<dyn ChainCreator>,
        validator: Arc<dyn MetadataValidator>,
    ) -> Self {
        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if config.reject_empty {
            rules.push(Box::new(EmptyRejectRule));
        }
        if config.enforce_max_bytes {
            rules.push(Box::new(MaxBytesRule::new(Arc::clone(&support))));
        }
        rules.push(Box::new(SystemChannelFilter::new(
            support,
            chain_creator,
            validator,
        )));
        Self::new(rules)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Rule for RuleSet {
    fn apply(&self, env: &Envelope) -> Result<(), AdmissionError> {
        for rule in &self.rules {
            if let Err(e) = rule.apply(env) {
                debug!(kind = e.kind(), "[qc-18] Message rejected by rule");
                return Err(e);
            }
        }
        Ok(())
    }
}
