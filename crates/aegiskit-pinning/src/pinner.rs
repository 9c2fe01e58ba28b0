use aegiskit_core::{AegisError, AegisResult};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Configuration for certificate pinning.
///
/// Fingerprints are hex-encoded opaque bytes — raw certificate DER or a
/// digest of it, whichever convention the deployment pins. An empty list
/// disables pinning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PinningConfig {
    /// Hex-encoded certificate fingerprints.
    #[serde(default)]
    pub fingerprints: Vec<String>,
}

/// Answers whether a presented certificate identity is in the trusted set.
///
/// The pinned set is supplied at construction and never mutated, so
/// concurrent [`is_trusted`](Self::is_trusted) calls require no locking.
#[derive(Debug, Clone)]
pub struct CertificatePinner {
    pinned: HashSet<Vec<u8>>,
}

impl CertificatePinner {
    /// Build a pinner from raw fingerprint bytes. Duplicates collapse.
    pub fn new<I>(fingerprints: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            pinned: fingerprints.into_iter().collect(),
        }
    }

    /// Build a pinner from hex-encoded config entries.
    pub fn from_config(config: &PinningConfig) -> AegisResult<Self> {
        let mut pinned = HashSet::new();
        for entry in &config.fingerprints {
            let bytes = hex::decode(entry).map_err(|e| {
                AegisError::Config(format!("Invalid pinned fingerprint '{entry}': {e}"))
            })?;
            pinned.insert(bytes);
        }
        Ok(Self { pinned })
    }

    /// Whether the presented fingerprint is byte-exact-equal to a pinned one.
    ///
    /// An empty pinned set trusts everything: no configured pins means
    /// "defer to the platform's own chain validation", not "trust nothing".
    /// There is no partial or prefix matching, and no error path — rejecting
    /// an unreadable or missing certificate is the caller's job before this
    /// comparator runs.
    pub fn is_trusted(&self, presented: &[u8]) -> bool {
        if self.pinned.is_empty() {
            return true;
        }
        self.pinned.contains(presented)
    }

    /// Number of configured pins.
    pub fn pin_count(&self) -> usize {
        self.pinned.len()
    }
}

/// SHA-256 digest of a certificate, for deployments that pin digests
/// instead of raw DER bytes.
pub fn sha256_fingerprint(der: &[u8]) -> Vec<u8> {
    Sha256::digest(der).to_vec()
}
