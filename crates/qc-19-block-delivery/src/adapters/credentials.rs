//! Client certificate providers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rustls::pki_types::CertificateDer;

use crate::domain::CredentialError;
use crate::ports::CredentialSupport;

/// Fixed certificate chain.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials {
    chain: Vec<CertificateDer<'static>>,
}

impl StaticCredentials {
    /// Chain with `leaf` first.
    pub fn new(chain: Vec<CertificateDer<'static>>) -> Self {
        Self { chain }
    }

    /// No client certificate.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl CredentialSupport for StaticCredentials {
    fn client_certificate_chain(&self) -> Vec<CertificateDer<'static>> {
        self.chain.clone()
    }
}

/// Certificate chain loaded from PEM.
#[derive(Clone, Debug)]
pub struct PemCredentials {
    chain: Vec<CertificateDer<'static>>,
}

impl PemCredentials {
    /// Load every certificate in a PEM file, in file order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CredentialError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(&mut BufReader::new(file))
    }

    /// Parse PEM bytes.
    pub fn from_pem(pem: &[u8]) -> Result<Self, CredentialError> {
        Self::from_reader(&mut BufReader::new(pem))
    }

    fn from_reader(reader: &mut dyn std::io::BufRead) -> Result<Self, CredentialError> {
        let chain = rustls_pemfile::certs(reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CredentialError::InvalidPem(e.to_string()))?;
        if chain.is_empty() {
            return Err(CredentialError::NoCertificate);
        }
        Ok(Self { chain })
    }
}

impl CredentialSupport for PemCredentials {
    fn client_certificate_chain(&self) -> Vec<CertificateDer<'static>> {
        self.chain.clone()
    }
}
