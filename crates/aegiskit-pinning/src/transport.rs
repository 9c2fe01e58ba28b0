use crate::pinner::CertificatePinner;
use aegiskit_core::{AegisError, AegisResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// What an [`HttpTransport`] hands back for one request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
    /// Fingerprint extracted from the peer's leaf certificate, in whatever
    /// convention the deployment pins (raw DER or a digest).
    pub peer_fingerprint: Vec<u8>,
}

/// Seam for the layer that actually issues the HTTPS request.
///
/// Implementations own connection handling, timeouts, and extraction of the
/// peer certificate. Transport-level failures surface as
/// [`AegisError::Http`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request and return status, body, and peer fingerprint.
    async fn fetch(&self, url: &str) -> AegisResult<TransportResponse>;
}

/// Drives a transport and accepts a response only when the peer certificate
/// passes the pin check and the status is in the success range.
pub struct SecureClient {
    pinner: CertificatePinner,
    transport: Arc<dyn HttpTransport>,
}

impl SecureClient {
    /// Pair a pinner with the transport it gates.
    pub fn new(pinner: CertificatePinner, transport: Arc<dyn HttpTransport>) -> Self {
        Self { pinner, transport }
    }

    /// Fetch `url` through the transport.
    ///
    /// The pin check runs before the response is accepted: an untrusted
    /// peer fingerprint is rejected with [`AegisError::PinningRejected`]
    /// without looking at the status or body. A trusted response with a
    /// status outside 200–299 is rejected with
    /// [`AegisError::InvalidResponse`].
    pub async fn secure_request(&self, url: &str) -> AegisResult<Vec<u8>> {
        let response = self.transport.fetch(url).await?;

        if !self.pinner.is_trusted(&response.peer_fingerprint) {
            warn!(url, "peer certificate failed the pin check");
            return Err(AegisError::PinningRejected);
        }

        if !(200..300).contains(&response.status) {
            return Err(AegisError::InvalidResponse(response.status));
        }

        debug!(url, status = response.status, "pinned request accepted");
        Ok(response.body)
    }
}
