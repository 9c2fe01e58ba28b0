//! Biometric-gated authentication sessions for the Aegiskit toolkit.
//!
//! An [`AuthSession`] wraps an opaque platform biometric subsystem behind a
//! small state machine: probe capability, then run at most one interactive
//! challenge per call. The toolkit never touches sensors — implementations
//! of [`BiometricSubsystem`] do, and tests substitute deterministic fakes.
//!
//! # Main types
//!
//! - [`AuthSession`] — Capability probe plus a single gated challenge.
//! - [`BiometricSubsystem`] — Seam to the platform biometric API.
//! - [`BiometricCapability`] — Tri-state capability classification.

/// The authentication session state machine.
pub mod session;
/// The platform subsystem seam and capability classification.
pub mod subsystem;

pub use session::AuthSession;
pub use subsystem::{BiometricCapability, BiometricSubsystem, EnrolledClass};
