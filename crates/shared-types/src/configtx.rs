//! # Config Transactions
//!
//! Channel configuration tree, the config-update request that proposes a new
//! or changed channel, and the config envelope that commits it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_crypto::SignerSerializer;

use crate::codec::{marshal, unmarshal};
use crate::common::{Envelope, HeaderType, SignatureHeader};
use crate::envelope::{create_nonce, create_signed_envelope};
use crate::errors::{CodecError, EnvelopeError};

/// Leaf value in the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue {
    /// Bumped whenever the value changes.
    pub version: u64,
    /// Encoded value.
    pub value: Vec<u8>,
    /// Policy that must authorize modification.
    pub mod_policy: String,
}

/// Node in the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigGroup {
    /// Bumped whenever membership of `groups` or `values` changes.
    pub version: u64,
    /// Child groups by name.
    pub groups: BTreeMap<String, ConfigGroup>,
    /// Values by name.
    pub values: BTreeMap<String, ConfigValue>,
    /// Policy that must authorize modification.
    pub mod_policy: String,
}

impl ConfigGroup {
    /// Builder-style helper adding a child group.
    pub fn with_group(mut self, name: impl Into<String>, group: ConfigGroup) -> Self {
        self.groups.insert(name.into(), group);
        self
    }

    /// Builder-style helper adding a value.
    pub fn with_value(mut self, name: impl Into<String>, value: Vec<u8>) -> Self {
        self.values.insert(
            name.into(),
            ConfigValue {
                value,
                ..Default::default()
            },
        );
        self
    }
}

/// Full channel configuration at a sequence number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Incremented on every committed update.
    pub sequence: u64,
    /// Root of the configuration tree.
    pub channel_group: ConfigGroup,
}

/// Committed configuration plus the update that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEnvelope {
    /// Resulting configuration.
    pub config: Option<Config>,
    /// Signed `CONFIG_UPDATE` envelope that produced `config`.
    pub last_update: Option<Envelope>,
}

/// Requested change to a channel's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    /// Channel being created or updated.
    pub channel_id: String,
    /// Versions the update was computed against.
    pub read_set: ConfigGroup,
    /// Resulting elements.
    pub write_set: ConfigGroup,
}

/// Endorsement of a config update by one identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSignature {
    /// Encoded [`SignatureHeader`].
    pub signature_header: Vec<u8>,
    /// Signature over `signature_header || config_update`.
    pub signature: Vec<u8>,
}

/// Config update plus the signatures collected for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdateEnvelope {
    /// Encoded [`ConfigUpdate`].
    pub config_update: Vec<u8>,
    /// Collected endorsements.
    pub signatures: Vec<ConfigSignature>,
}

impl ConfigUpdateEnvelope {
    /// Decode the wrapped update.
    pub fn unmarshal_config_update(&self) -> Result<ConfigUpdate, CodecError> {
        unmarshal(&self.config_update)
    }
}

/// Decode the config-update envelope carried by a `CONFIG_UPDATE` envelope.
pub fn unwrap_config_update(env: &Envelope) -> Result<ConfigUpdate, EnvelopeError> {
    let payload = env.unwrap_payload()?;
    let update_env: ConfigUpdateEnvelope = unmarshal(&payload.data)?;
    Ok(update_env.unmarshal_config_update()?)
}

/// Build the signed `CONFIG_UPDATE` transaction that asks for a new channel.
///
/// The write set becomes the new channel's configuration tree. When `signer`
/// is present the update is endorsed and the outer envelope signed.
pub fn make_channel_creation_transaction(
    channel_id: &str,
    write_set: ConfigGroup,
    signer: Option<&dyn SignerSerializer>,
) -> Result<Envelope, EnvelopeError> {
    let update = ConfigUpdate {
        channel_id: channel_id.to_string(),
        read_set: ConfigGroup::default(),
        write_set,
    };
    let config_update = marshal(&update)?;

    let mut signatures = Vec::new();
    if let Some(signer) = signer {
        let signature_header = marshal(&SignatureHeader {
            creator: signer.serialize()?,
            nonce: create_nonce(),
        })?;
        let mut signed = signature_header.clone();
        signed.extend_from_slice(&config_update);
        signatures.push(ConfigSignature {
            signature: signer.sign(&signed)?,
            signature_header,
        });
    }

    let update_env = ConfigUpdateEnvelope {
        config_update,
        signatures,
    };
    create_signed_envelope(HeaderType::ConfigUpdate, channel_id, signer, &update_env, 0, 0)
}
