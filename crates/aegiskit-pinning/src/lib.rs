//! Certificate pinning for the Aegiskit toolkit.
//!
//! The comparator holds an immutable set of trusted certificate
//! fingerprints and answers yes/no for a presented certificate. The actual
//! HTTPS request, timeout handling, and extraction of the peer certificate
//! live behind the [`HttpTransport`] seam; this crate only judges what the
//! transport hands back.
//!
//! # Main types
//!
//! - [`CertificatePinner`] — Byte-equality comparator over pinned fingerprints.
//! - [`PinningConfig`] — Deserializable config with hex-encoded fingerprints.
//! - [`SecureClient`] — Drives a transport and enforces the pin check.
//! - [`HttpTransport`] — Seam for the layer that issues the request.

/// The pinned-set comparator and its configuration.
pub mod pinner;
/// The transport seam and the pinned request driver.
pub mod transport;

pub use pinner::{sha256_fingerprint, CertificatePinner, PinningConfig};
pub use transport::{HttpTransport, SecureClient, TransportResponse};
