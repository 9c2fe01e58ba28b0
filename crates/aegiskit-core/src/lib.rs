//! Core error types for the Aegiskit client-side security toolkit.
//!
//! This crate provides the error type shared across all Aegiskit crates.
//! The toolkit's components never retry, log-and-swallow, or fall back
//! silently: every failure is surfaced to the immediate caller as a typed
//! outcome, and the caller decides what to show the user.
//!
//! # Main types
//!
//! - [`AegisError`] — Unified error enum for all toolkit subsystems.
//! - [`AegisResult`] — Convenience alias for `Result<T, AegisError>`.

use thiserror::Error;

/// Top-level error type for the toolkit.
///
/// The taxonomy is deliberately coarse. Callers branch on the *kind* of
/// failure — "could not attempt" versus "attempted and failed" — not on
/// platform detail, which stays inside the message string.
#[derive(Debug, Error)]
pub enum AegisError {
    /// The biometric capability probe failed before any challenge was
    /// attempted. Recoverable by choosing a fallback authentication method.
    #[error("Biometrics unavailable: {0}")]
    BiometricsUnavailable(String),

    /// A biometric challenge was attempted and the platform subsystem
    /// reported non-success (no match, user cancel, lockout). Recoverable
    /// by retrying with caller-driven backoff.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The peer certificate did not match any pinned fingerprint.
    #[error("Certificate pinning rejected the peer certificate")]
    PinningRejected,

    /// The transport returned a status code outside the success range.
    #[error("Invalid response: HTTP status {0}")]
    InvalidResponse(u16),

    /// An error from the underlying transport (connection, timeout, DNS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience `Result` alias using [`AegisError`].
pub type AegisResult<T> = Result<T, AegisError>;
