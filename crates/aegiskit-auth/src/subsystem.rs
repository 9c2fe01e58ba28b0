use aegiskit_core::AegisResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Tri-state classification of the device's usable biometric capability.
///
/// Recomputed on demand from the platform capability probe; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiometricCapability {
    /// A face-class sensor is enrolled and currently usable.
    Face,
    /// A touch-class (fingerprint) sensor is enrolled and currently usable.
    Touch,
    /// Biometric authentication is not currently usable, or the enrolled
    /// class is one the toolkit does not recognize.
    None,
}

/// The biometric class the platform reports as enrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrolledClass {
    /// Face-class sensor.
    Face,
    /// Touch-class sensor.
    Touch,
    /// Any class that is neither face nor touch.
    Other,
}

/// Seam to the platform biometric subsystem.
///
/// Implementations wrap the platform API (sensor access, system prompt);
/// the toolkit treats the whole thing as an opaque capability. The platform
/// owns cancellation: a user dismissing the system prompt surfaces through
/// [`evaluate`](Self::evaluate) as a non-success outcome.
#[async_trait]
pub trait BiometricSubsystem: Send + Sync {
    /// Whether strong biometric authentication can currently be evaluated.
    ///
    /// A capability probe: answers without performing an authentication.
    fn can_evaluate(&self) -> bool;

    /// Which biometric class is enrolled. Only meaningful when
    /// [`can_evaluate`](Self::can_evaluate) returns true.
    fn enrolled_class(&self) -> EnrolledClass;

    /// Run a single interactive authentication challenge, presenting
    /// `reason` to the user as the justification string. Suspends until the
    /// platform resolves. `Ok(true)` on success; `Ok(false)` or an error
    /// when the subsystem reports non-success.
    async fn evaluate(&self, reason: &str) -> AegisResult<bool>;
}
