//! # Signed Envelope Builder
//!
//! Constructs the signed [`Envelope`] sent to or accepted by the ordering
//! service, and verifies the creator signature on receipt.
//!
//! ## Security Properties
//!
//! - **Freshness**: every signed envelope carries a new 24-byte nonce, so two
//!   requests for the same data never share a transaction id.
//! - **Channel binding**: an optional TLS certificate hash is embedded in the
//!   signed channel header, tying the request to one transport session.
//! - **Creator authority**: the signature header's creator is the only
//!   identity the receiver trusts.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use serde::Serialize;
use shared_crypto::{compute_sha256_many, SerializedIdentity, SignerSerializer};

use crate::codec::{marshal, unmarshal};
use crate::common::{ChannelHeader, Envelope, Header, HeaderType, Payload, SignatureHeader};
use crate::errors::EnvelopeError;

/// Size of the replay-protection nonce.
pub const NONCE_SIZE: usize = 24;

/// Generate a fresh random nonce.
pub fn create_nonce() -> Vec<u8> {
    let mut nonce = vec![0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce);
    nonce
}

/// Transaction id: hex SHA-256 over `nonce || creator`.
pub fn compute_tx_id(nonce: &[u8], creator: &[u8]) -> String {
    hex::encode(compute_sha256_many(&[nonce, creator]))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Channel header stamped with the current time.
pub fn make_channel_header(
    header_type: HeaderType,
    version: i32,
    channel_id: &str,
    epoch: u64,
) -> ChannelHeader {
    ChannelHeader {
        header_type: header_type.as_i32(),
        version,
        timestamp: now_secs(),
        channel_id: channel_id.to_string(),
        epoch,
        ..Default::default()
    }
}

/// Build a signed envelope without a TLS binding.
pub fn create_signed_envelope<T: Serialize + ?Sized>(
    header_type: HeaderType,
    channel_id: &str,
    signer: Option<&dyn SignerSerializer>,
    data: &T,
    msg_version: i32,
    epoch: u64,
) -> Result<Envelope, EnvelopeError> {
    create_signed_envelope_with_tls_binding(
        header_type,
        channel_id,
        signer,
        data,
        msg_version,
        epoch,
        None,
    )
}

/// Build a signed envelope whose channel header carries `tls_cert_hash`.
///
/// Without a signer the signature header and signature are left empty.
pub fn create_signed_envelope_with_tls_binding<T: Serialize + ?Sized>(
    header_type: HeaderType,
    channel_id: &str,
    signer: Option<&dyn SignerSerializer>,
    data: &T,
    msg_version: i32,
    epoch: u64,
    tls_cert_hash: Option<&[u8]>,
) -> Result<Envelope, EnvelopeError> {
    let mut channel_header = make_channel_header(header_type, msg_version, channel_id, epoch);
    if let Some(hash) = tls_cert_hash {
        channel_header.tls_cert_hash = hash.to_vec();
    }

    let signature_header = match signer {
        Some(signer) => {
            let creator = signer.serialize()?;
            let nonce = create_nonce();
            channel_header.tx_id = compute_tx_id(&nonce, &creator);
            SignatureHeader { creator, nonce }
        }
        None => SignatureHeader::default(),
    };

    let payload = Payload {
        header: Some(Header {
            channel_header: marshal(&channel_header)?,
            signature_header: marshal(&signature_header)?,
        }),
        data: marshal(data)?,
    };
    let payload_bytes = marshal(&payload)?;

    let signature = match signer {
        Some(signer) => signer.sign(&payload_bytes)?,
        None => Vec::new(),
    };

    Ok(Envelope {
        payload: payload_bytes,
        signature,
    })
}

/// Check the envelope signature against the creator named in its header.
pub fn verify_envelope(env: &Envelope) -> Result<SerializedIdentity, EnvelopeError> {
    let payload = env.unwrap_payload()?;
    let header = payload.header.ok_or(EnvelopeError::MissingHeader)?;
    let signature_header: SignatureHeader = unmarshal(&header.signature_header)?;
    let identity = SerializedIdentity::from_bytes(&signature_header.creator)?;
    identity.verify(&env.payload, &env.signature)?;
    Ok(identity)
}
