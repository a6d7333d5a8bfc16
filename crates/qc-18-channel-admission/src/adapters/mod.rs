//! Adapters layer
//!
//! In-memory implementations of the outbound ports.

mod metadata;
mod registrar;
mod system_channel;

pub use metadata::AcceptAllMetadataValidator;
pub use registrar::{
    proposed_channel_config, ChannelTemplate, InMemoryRegistrar, TemplateResources,
    CONSENSUS_METADATA_KEY, ORDERER_GROUP,
};
pub use system_channel::SharedSystemChannel;
