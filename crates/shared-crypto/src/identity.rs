//! # Signing Identities
//!
//! Ed25519 key material plus the `SignerSerializer` seam used by the envelope
//! builder. A signer both signs message bytes and serializes the identity that
//! receivers use to check the signature.
//!
//! ## Security Properties
//!
//! - Deterministic Ed25519 nonces, no RNG needed at signing time
//! - `SigningKey` is `Sync`, so one signer can serve many channels concurrently
//! - Secret key is wiped on drop by `ed25519_dalek::SigningKey` itself
//!   (its default `zeroize` feature)

use crate::CryptoError;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};

/// Length of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Signs messages and exposes the creator identity embedded in headers.
///
/// Implementations MUST be safe to call from many tasks at once.
pub trait SignerSerializer: Send + Sync {
    /// Sign `message`, returning the raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Serialized identity of the signer (goes into `SignatureHeader.creator`).
    fn serialize(&self) -> Result<Vec<u8>, CryptoError>;
}

/// Membership-scoped identity as carried on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedIdentity {
    /// Membership service provider the identity belongs to.
    pub msp_id: String,
    /// Raw Ed25519 public key.
    pub id_bytes: Vec<u8>,
}

impl SerializedIdentity {
    /// Encode for embedding in a signature header.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CryptoError> {
        bincode::serialize(self).map_err(|e| CryptoError::IdentityEncoding(e.to_string()))
    }

    /// Decode from a signature header's creator field.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        bincode::deserialize(bytes).map_err(|e| CryptoError::IdentityEncoding(e.to_string()))
    }

    /// Verify `signature` over `message` against this identity's key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let key: [u8; 32] = self
            .id_bytes
            .as_slice()
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        let verifying_key =
            VerifyingKey::from_bytes(&key).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig_bytes: [u8; SIGNATURE_LEN] = signature
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureFormat(signature.len()))?;

        verifying_key
            .verify(message, &Signature::from_bytes(&sig_bytes))
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 keypair.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Create from secret seed (32 bytes).
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// Raw public key bytes.
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a message (deterministic).
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        self.signing_key.sign(message).to_bytes()
    }
}

/// Local signing identity backed by an in-process Ed25519 key.
pub struct LocalSigner {
    msp_id: String,
    keypair: Ed25519KeyPair,
}

impl LocalSigner {
    /// Create a signer for `msp_id` with a freshly generated key.
    pub fn generate(msp_id: impl Into<String>) -> Self {
        Self::new(msp_id, Ed25519KeyPair::generate())
    }

    /// Create a signer from existing key material.
    pub fn new(msp_id: impl Into<String>, keypair: Ed25519KeyPair) -> Self {
        Self {
            msp_id: msp_id.into(),
            keypair,
        }
    }

    /// MSP id of this signer.
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    /// Identity as a structured value.
    pub fn identity(&self) -> SerializedIdentity {
        SerializedIdentity {
            msp_id: self.msp_id.clone(),
            id_bytes: self.keypair.public_key().to_vec(),
        }
    }
}

impl SignerSerializer for LocalSigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(self.keypair.sign(message).to_vec())
    }

    fn serialize(&self) -> Result<Vec<u8>, CryptoError> {
        self.identity().to_bytes()
    }
}
