//! # Common Messages
//!
//! The signed envelope and its nested headers. Every message arriving at or
//! leaving the ordering service is an [`Envelope`] whose payload decodes to a
//! [`Payload`] carrying a [`Header`] and opaque data.

use serde::{Deserialize, Serialize};

use crate::codec::unmarshal;
use crate::errors::CodecError;

/// Message type carried in a channel header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum HeaderType {
    /// Opaque application message.
    Message = 0,
    /// Full channel configuration.
    Config = 1,
    /// Signed request to update channel configuration.
    ConfigUpdate = 2,
    /// Endorsed application transaction.
    EndorserTransaction = 3,
    /// Config transaction wrapped for the system channel.
    OrdererTransaction = 4,
    /// Request to stream blocks from a channel.
    DeliverSeekInfo = 5,
    /// Packaged application code.
    ChaincodePackage = 6,
}

impl HeaderType {
    /// Raw wire value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for HeaderType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HeaderType::Message),
            1 => Ok(HeaderType::Config),
            2 => Ok(HeaderType::ConfigUpdate),
            3 => Ok(HeaderType::EndorserTransaction),
            4 => Ok(HeaderType::OrdererTransaction),
            5 => Ok(HeaderType::DeliverSeekInfo),
            6 => Ok(HeaderType::ChaincodePackage),
            other => Err(other),
        }
    }
}

/// Signed container. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Encoded [`Payload`].
    pub payload: Vec<u8>,
    /// Signature by the creator over `payload`.
    pub signature: Vec<u8>,
}

impl Envelope {
    /// Decode the payload bytes.
    pub fn unwrap_payload(&self) -> Result<Payload, CodecError> {
        unmarshal(&self.payload)
    }
}

/// Header plus message data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Routing and signing metadata. Required on every well-formed payload.
    pub header: Option<Header>,
    /// Type-specific message bytes.
    pub data: Vec<u8>,
}

/// Encoded channel and signature headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Encoded [`ChannelHeader`].
    pub channel_header: Vec<u8>,
    /// Encoded [`SignatureHeader`].
    pub signature_header: Vec<u8>,
}

impl Header {
    /// Decode the channel header.
    pub fn unmarshal_channel_header(&self) -> Result<ChannelHeader, CodecError> {
        unmarshal(&self.channel_header)
    }

    /// Decode the signature header.
    pub fn unmarshal_signature_header(&self) -> Result<SignatureHeader, CodecError> {
        unmarshal(&self.signature_header)
    }
}

/// Identifies message type and target channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHeader {
    /// Raw [`HeaderType`] value; unknown values are kept as-is.
    pub header_type: i32,
    /// Message format version.
    pub version: i32,
    /// Creation time, seconds since the unix epoch.
    pub timestamp: u64,
    /// Target channel.
    pub channel_id: String,
    /// Transaction id, hex SHA-256 of nonce and creator.
    pub tx_id: String,
    /// Epoch the message was created in.
    pub epoch: u64,
    /// Type-specific extension.
    pub extension: Vec<u8>,
    /// SHA-256 of the sender's TLS client certificate, empty without TLS.
    pub tls_cert_hash: Vec<u8>,
}

impl ChannelHeader {
    /// Typed header kind, `None` for values this build does not know.
    pub fn kind(&self) -> Option<HeaderType> {
        HeaderType::try_from(self.header_type).ok()
    }

    /// Whether this header carries the given type.
    pub fn is(&self, header_type: HeaderType) -> bool {
        self.header_type == header_type.as_i32()
    }
}

/// Creator identity and replay-protection nonce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureHeader {
    /// Serialized creator identity.
    pub creator: Vec<u8>,
    /// Random bytes, fresh per message.
    pub nonce: Vec<u8>,
}
