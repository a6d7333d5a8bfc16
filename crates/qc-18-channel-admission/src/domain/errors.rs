//! # Domain Errors
//!
//! Error taxonomy for channel admission. Every variant is terminal for the
//! proposal it was raised on: nothing is created and nothing is retried.

use shared_types::CodecError;
use thiserror::Error;

/// Failure reported by the consensus-specific metadata validator.
///
/// Displays the validator's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MetadataError(pub String);

impl MetadataError {
    /// Wrap a validator message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Capability required by a config but unknown to this binary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// A required capability is not implemented here.
    #[error("capability {0} is required but not supported")]
    Unsupported(String),
}

/// Errors from the chain-creator collaborator and its channel resources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelConfigError {
    /// Config rejected by the collaborator; message passed through as-is.
    #[error("{0}")]
    Rejected(String),

    /// Config update envelope could not be decoded.
    #[error("malformed config update: {0}")]
    MalformedUpdate(String),

    /// Config envelope has no config to build a bundle from.
    #[error("config envelope carries no config")]
    MissingConfig,

    /// Config update does not name a channel.
    #[error("config update does not name a channel")]
    EmptyChannelId,

    /// Channel id is already registered.
    #[error("channel {0} already exists")]
    ChannelExists(String),

    /// Registry refused the channel because the limit is reached.
    #[error("channel registry is full: {max} channels")]
    CapacityExceeded {
        /// Configured limit
        max: u64,
    },

    /// Bundle was built for a different channel than the resources.
    #[error("bundle is for channel {actual}, expected {expected}")]
    ChannelMismatch {
        /// Channel the resources were built for
        expected: String,
        /// Channel named by the bundle
        actual: String,
    },
}

/// Admission error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// Outer payload did not decode.
    #[error("bad payload: {0}")]
    MalformedPayload(#[source] CodecError),

    /// Outer payload has no header.
    #[error("missing payload header")]
    MissingHeader,

    /// Outer channel header did not decode.
    #[error("bad channel header: {0}")]
    BadChannelHeader(#[source] CodecError),

    /// Payload data is not an envelope.
    #[error("payload data error unmarshaling to envelope: {0}")]
    BadConfigTx(#[source] CodecError),

    /// Wrapped envelope's payload did not decode.
    #[error("error unmarshaling wrapped configtx envelope payload: {0}")]
    BadConfigTxPayload(#[source] CodecError),

    /// Wrapped payload has no header.
    #[error("wrapped configtx envelope missing header")]
    MissingConfigTxHeader,

    /// Wrapped channel header did not decode.
    #[error("error unmarshaling wrapped configtx envelope channel header: {0}")]
    BadConfigTxChannelHeader(#[source] CodecError),

    /// Wrapped envelope is not of type CONFIG.
    #[error("wrapped configtx envelope not a config transaction")]
    NotConfigTransaction,

    /// Wrapped data is not a config envelope.
    #[error("error unmarshalling wrapped configtx config envelope from payload: {0}")]
    BadConfigEnvelope(#[source] CodecError),

    /// Config envelope lacks the originating update.
    #[error("updated config does not include a config update")]
    MissingLastUpdate,

    /// System channel exposes no orderer configuration.
    #[error("system channel does not have orderer config")]
    MissingOrdererConfig,

    /// Network is in maintenance mode.
    #[error("channel creation is not permitted: maintenance mode")]
    ChannelCreationForbidden,

    /// Channel limit reached.
    #[error("channel creation would exceed maximimum number of channels: {max}")]
    TooManyChannels {
        /// Channels currently registered
        count: usize,
        /// Configured limit
        max: u64,
    },

    /// Candidate config could not be materialized.
    #[error(transparent)]
    ChannelConfig(ChannelConfigError),

    /// Candidate resources refused the update.
    #[error("error proposing channel update to new channel config: {0}")]
    ProposalRejected(#[source] ChannelConfigError),

    /// Proposed config differs from the one carried by the request.
    #[error("config proposed by the channel creation request did not match the config received with the channel creation request")]
    ProposalMismatch,

    /// Proposed config does not form a bundle.
    #[error("config does not validly parse: {0}")]
    BundleInvalid(#[source] ChannelConfigError),

    /// Bundle is not a valid successor of the candidate resources.
    #[error("new bundle invalid: {0}")]
    NewBundleInvalid(#[source] ChannelConfigError),

    /// Candidate config has no orderer group.
    #[error("config is missing orderer group")]
    MissingCandidateOrdererConfig,

    /// Candidate config requires capabilities this binary lacks.
    #[error("config update is not compatible: {0}")]
    IncompatibleCapabilities(#[source] CapabilityError),

    /// Consensus metadata validator refused the candidate.
    #[error("consensus metadata update for channel creation is invalid: {0}")]
    InvalidConsensusMetadata(#[source] MetadataError),

    /// Chain creator refused to instantiate the validated channel.
    #[error("error committing new channel: {0}")]
    ChannelCommit(#[source] ChannelConfigError),

    /// Envelope has an empty payload.
    #[error("message was empty")]
    EmptyMessage,

    /// Envelope payload exceeds the batch size limit.
    #[error("message payload is {size} bytes and exceeds maximum allowed {max} bytes")]
    MessageTooLarge {
        /// Payload size
        size: usize,
        /// Absolute maximum
        max: u32,
    },
}

impl AdmissionError {
    /// Stable kind name, used as a log field and metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            AdmissionError::MalformedPayload(_) => "MalformedPayload",
            AdmissionError::MissingHeader => "MissingHeader",
            AdmissionError::BadChannelHeader(_) => "BadChannelHeader",
            AdmissionError::BadConfigTx(_) => "BadConfigTx",
            AdmissionError::BadConfigTxPayload(_) => "BadConfigTxPayload",
            AdmissionError::MissingConfigTxHeader => "MissingConfigTxHeader",
            AdmissionError::BadConfigTxChannelHeader(_) => "BadConfigTxChannelHeader",
            AdmissionError::NotConfigTransaction => "NotConfigTransaction",
            AdmissionError::BadConfigEnvelope(_) => "BadConfigEnvelope",
            AdmissionError::MissingLastUpdate => "MissingLastUpdate",
            AdmissionError::MissingOrdererConfig => "MissingOrdererConfig",
            AdmissionError::ChannelCreationForbidden => "ChannelCreationForbidden",
            AdmissionError::TooManyChannels { .. } => "TooManyChannels",
            AdmissionError::ChannelConfig(_) => "ChannelConfigError",
            AdmissionError::ProposalRejected(_) => "ProposalRejected",
            AdmissionError::ProposalMismatch => "ProposalMismatch",
            AdmissionError::BundleInvalid(_) => "BundleInvalid",
            AdmissionError::NewBundleInvalid(_) => "NewBundleInvalid",
            AdmissionError::MissingCandidateOrdererConfig => "MissingCandidateOrdererConfig",
            AdmissionError::IncompatibleCapabilities(_) => "IncompatibleCapabilities",
            AdmissionError::InvalidConsensusMetadata(_) => "InvalidConsensusMetadata",
            AdmissionError::ChannelCommit(_) => "ChannelCommit",
            AdmissionError::EmptyMessage => "EmptyMessage",
            AdmissionError::MessageTooLarge { .. } => "MessageTooLarge",
        }
    }
}
