//! # System Channel Filter
//!
//! Gate for channel-creation proposals arriving on the system channel.
//!
//! ## Decision Chain
//!
//! ```text
//! unwrap outer ──▶ ORDERER_TRANSACTION? ──no──▶ PassThrough
//!                        │ yes
//!                        ▼
//! unwrap CONFIG ──▶ snapshot orderer config ──▶ maintenance? ──▶ capacity?
//!                                                                   │
//!   ◀── commit ◀── metadata ◀── capabilities ◀── bundle ◀── propose ┘
//! ```
//!
//! Every stage short-circuits. No channel is created unless every stage
//! passes, and the orderer config is read exactly once per call.

use std::sync::Arc;

use shared_types::{Envelope, HeaderType};
use tracing::{debug, info, warn};

use crate::algorithms::{unwrap_channel_creation, unwrap_outer};
use crate::domain::{
    AdmissionError, ChannelConfigError, ChannelCreationRequest, ConsensusState, FilterOutcome,
    OrdererConfig,
};
use crate::metrics::{record_channel_admitted, record_channel_rejected};
use crate::ports::{
    ChainCreator, ChannelResources, MetadataValidator, Rule, SystemChannelSupport,
};

/// Admission filter for the system channel.
pub struct SystemChannelFilter {
    support: Arc<dyn SystemChannelSupport>,
    chain_creator: Arc<dyn ChainCreator>,
    validator: Arc<dyn MetadataValidator>,
}

impl SystemChannelFilter {
    /// Create a filter over the given collaborators.
    pub fn new(
        support: Arc<dyn SystemChannelSupport>,
        chain_creator: Arc<dyn ChainCreator>,
        validator: Arc<dyn MetadataValidator>,
    ) -> Self {
        Self {
            support,
            chain_creator,
            validator,
        }
    }

    /// Evaluate one envelope.
    ///
    /// Messages other than `ORDERER_TRANSACTION` pass through untouched.
    /// A valid channel-creation proposal is committed through the chain
    /// creator and reported as [`FilterOutcome::ChannelCreated`].
    pub fn apply(&self, env: &Envelope) -> Result<FilterOutcome, AdmissionError> {
        let result = self.evaluate(env);
        match &result {
            Ok(FilterOutcome::ChannelCreated { channel_id }) => {
                info!(channel_id = %channel_id, "[qc-18] Channel created");
                record_channel_admitted();
            }
            Ok(FilterOutcome::PassThrough) => {}
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "[qc-18] Channel creation rejected");
                record_channel_rejected(e.kind());
            }
        }
        result
    }

    fn evaluate(&self, env: &Envelope) -> Result<FilterOutcome, AdmissionError> {
        let outer = unwrap_outer(env)?;
        if !outer.channel_header.is(HeaderType::OrdererTransaction) {
            return Ok(FilterOutcome::PassThrough);
        }

        let request = unwrap_channel_creation(&outer.data)?;
        debug!(
            channel_id = %request.config_header.channel_id,
            "[qc-18] Evaluating channel creation proposal"
        );

        let snapshot = self
            .support
            .orderer_config()
            .ok_or(AdmissionError::MissingOrdererConfig)?;
        self.authorize(&snapshot)?;

        let (bundle, candidate) = self.materialize(&request)?;
        self.validator
            .validate_consensus_metadata(
                &snapshot.consensus_metadata,
                &candidate.consensus_metadata,
                true,
            )
            .map_err(AdmissionError::InvalidConsensusMetadata)?;

        let channel_id = bundle.channel_id().to_string();
        self.chain_creator
            .create_channel(bundle)
            .map_err(AdmissionError::ChannelCommit)?;

        Ok(FilterOutcome::ChannelCreated { channel_id })
    }

    /// Maintenance and capacity gates.
    ///
    /// The capacity check is advisory; the chain creator enforces the limit
    /// again when committing.
    fn authorize(&self, snapshot: &OrdererConfig) -> Result<(), AdmissionError> {
        if snapshot.consensus_state == ConsensusState::Maintenance {
            return Err(AdmissionError::ChannelCreationForbidden);
        }

        let max = snapshot.max_channels_count;
        if max > 0 {
            let count = self.chain_creator.channels_count();
            if count as u64 >= max {
                return Err(AdmissionError::TooManyChannels { count, max });
            }
        }
        Ok(())
    }

    /// Build the candidate bundle and check it against the received config.
    ///
    /// Returns the bundle with its orderer section.
    fn materialize(
        &self,
        request: &ChannelCreationRequest,
    ) -> Result<(Arc<dyn ChannelResources>, OrdererConfig), AdmissionError> {
        let resources = self
            .chain_creator
            .new_channel_config(&request.last_update)
            .map_err(AdmissionError::ChannelConfig)?;

        let proposed = resources
            .propose_config_update(&request.last_update)
            .map_err(AdmissionError::ProposalRejected)?;
        if proposed != request.config_envelope {
            return Err(AdmissionError::ProposalMismatch);
        }

        let config = proposed
            .config
            .as_ref()
            .ok_or(AdmissionError::BundleInvalid(ChannelConfigError::MissingConfig))?;
        let bundle = self
            .chain_creator
            .create_bundle(resources.channel_id(), config)
            .map_err(AdmissionError::BundleInvalid)?;

        resources
            .validate_new(bundle.as_ref())
            .map_err(AdmissionError::NewBundleInvalid)?;

        let orderer = bundle
            .orderer_config()
            .ok_or(AdmissionError::MissingCandidateOrdererConfig)?;
        orderer
            .capabilities
            .supported()
            .map_err(AdmissionError::IncompatibleCapabilities)?;
        bundle
            .channel_capabilities()
            .supported()
            .map_err(AdmissionError::IncompatibleCapabilities)?;

        Ok((bundle, orderer))
    }
}

impl Rule for SystemChannelFilter {
    fn apply(&self, env: &Envelope) -> Result<(), AdmissionError> {
        SystemChannelFilter::apply(self, env).map(|_| ())
    }
}
