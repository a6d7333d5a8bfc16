//! # Nested Envelope Unwrapping
//!
//! A channel-creation proposal arrives as
//!
//! ```text
//! Envelope(ORDERER_TRANSACTION)
//!   └─ Payload.data = Envelope(CONFIG)
//!        └─ Payload.data = ConfigEnvelope { config, last_update }
//! ```
//!
//! Each layer is decoded by one step that maps its failure to a distinct
//! [`AdmissionError`]. Steps short-circuit; nothing here has side effects.

use shared_types::{
    unmarshal, ChannelHeader, ConfigEnvelope, Envelope, Header, HeaderType, Payload,
};

use crate::domain::{AdmissionError, ChannelCreationRequest};

/// Decoded outer layer of an inbound envelope.
#[derive(Clone, Debug)]
pub struct OuterMessage {
    /// Outer channel header.
    pub channel_header: ChannelHeader,
    /// Outer payload data, still encoded.
    pub data: Vec<u8>,
}

fn require_header(payload: Payload) -> Option<(Header, Vec<u8>)> {
    let Payload { header, data } = payload;
    header.map(|h| (h, data))
}

/// Decode the outer payload and channel header.
pub fn unwrap_outer(env: &Envelope) -> Result<OuterMessage, AdmissionError> {
    let payload = env
        .unwrap_payload()
        .map_err(AdmissionError::MalformedPayload)?;
    let (header, data) = require_header(payload).ok_or(AdmissionError::MissingHeader)?;
    let channel_header = header
        .unmarshal_channel_header()
        .map_err(AdmissionError::BadChannelHeader)?;

    Ok(OuterMessage {
        channel_header,
        data,
    })
}

/// Decode the wrapped CONFIG envelope carried in an `ORDERER_TRANSACTION`.
pub fn unwrap_channel_creation(data: &[u8]) -> Result<ChannelCreationRequest, AdmissionError> {
    let config_tx: Envelope = unmarshal(data).map_err(AdmissionError::BadConfigTx)?;
    let payload = config_tx
        .unwrap_payload()
        .map_err(AdmissionError::BadConfigTxPayload)?;
    let (header, data) =
        require_header(payload).ok_or(AdmissionError::MissingConfigTxHeader)?;
    let config_header = header
        .unmarshal_channel_header()
        .map_err(AdmissionError::BadConfigTxChannelHeader)?;

    if !config_header.is(HeaderType::Config) {
        return Err(AdmissionError::NotConfigTransaction);
    }

    let config_envelope: ConfigEnvelope =
        unmarshal(&data).map_err(AdmissionError::BadConfigEnvelope)?;
    let last_update = config_envelope
        .last_update
        .clone()
        .ok_or(AdmissionError::MissingLastUpdate)?;

    Ok(ChannelCreationRequest {
        config_header,
        config_envelope,
        last_update,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{marshal, Config};

    fn header_bytes(header_type: HeaderType) -> Vec<u8> {
        marshal(&ChannelHeader {
            header_type: header_type.as_i32(),
            ..Default::default()
        })
        .unwrap()
    }

    fn envelope_of(payload: &Payload) -> Envelope {
        Envelope {
            payload: marshal(payload).unwrap(),
            signature: vec![],
        }
    }

    fn config_payload(data: Vec<u8>) -> Vec<u8> {
        marshal(&envelope_of(&Payload {
            header: Some(Header {
                channel_header: header_bytes(HeaderType::Config),
                signature_header: vec![],
            }),
            data,
        }))
        .unwrap()
    }

    #[test]
    fn test_outer_happy_path() {
        let env = envelope_of(&Payload {
            header: Some(Header {
                channel_header: header_bytes(HeaderType::OrdererTransaction),
                signature_header: vec![],
            }),
            data: b"inner".to_vec(),
        });
        let outer = unwrap_outer(&env).unwrap();
        assert!(outer.channel_header.is(HeaderType::OrdererTransaction));
        assert_eq!(outer.data, b"inner".to_vec());
    }

    #[test]
    fn test_outer_missing_header() {
        let env = envelope_of(&Payload::default());
        assert_eq!(unwrap_outer(&env).unwrap_err(), AdmissionError::MissingHeader);
    }

    #[test]
    fn test_inner_happy_path() {
        let last_update = Envelope {
            payload: b"update".to_vec(),
            signature: vec![],
        };
        let data = config_payload(
            marshal(&ConfigEnvelope {
                config: Some(Config::default()),
                last_update: Some(last_update.clone()),
            })
            .unwrap(),
        );

        let request = unwrap_channel_creation(&data).unwrap();
        assert_eq!(request.last_update, last_update);
        assert!(request.config_header.is(HeaderType::Config));
        assert_eq!(request.config_envelope.config, Some(Config::default()));
    }

    #[test]
    fn test_inner_missing_last_update() {
        let data = config_payload(marshal(&ConfigEnvelope::default()).unwrap());
        assert_eq!(
            unwrap_channel_creation(&data).unwrap_err(),
            AdmissionError::MissingLastUpdate
        );
    }

    #[test]
    fn test_inner_garbage() {
        let err = unwrap_channel_creation(b"bad configTx").unwrap_err();
        assert_eq!(err.kind(), "BadConfigTx");
    }
}
