use crate::subsystem::{BiometricCapability, BiometricSubsystem, EnrolledClass};
use aegiskit_core::{AegisError, AegisResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Where a single `authenticate` invocation stands. Surfaced only through
/// tracing; every invocation starts over at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthPhase {
    Idle,
    Checking,
    Eligible,
    Ineligible,
    Authenticating,
    Success,
    Failure,
}

/// Gates a sensitive operation behind a biometric-capable authentication
/// session.
///
/// Each [`authenticate`](Self::authenticate) call is independent: the probe
/// re-runs, exactly one challenge is presented, and nothing survives the
/// call. A session never reports success without a capability check passing
/// first in the same call.
pub struct AuthSession {
    subsystem: Arc<dyn BiometricSubsystem>,
    // The platform permits at most one in-flight interactive challenge;
    // concurrent callers queue here instead of racing two prompts.
    challenge: Mutex<()>,
}

impl AuthSession {
    /// Wrap a platform biometric subsystem.
    pub fn new(subsystem: Arc<dyn BiometricSubsystem>) -> Self {
        Self {
            subsystem,
            challenge: Mutex::new(()),
        }
    }

    /// Classify the device's current biometric capability.
    ///
    /// A probe, not an authentication: idempotent and side-effect-free from
    /// the caller's point of view. Returns [`BiometricCapability::None`]
    /// whenever the subsystem cannot currently evaluate, regardless of what
    /// is enrolled, and for any enrolled class the toolkit does not know.
    pub fn classify_capability(&self) -> BiometricCapability {
        if !self.subsystem.can_evaluate() {
            return BiometricCapability::None;
        }
        match self.subsystem.enrolled_class() {
            EnrolledClass::Face => BiometricCapability::Face,
            EnrolledClass::Touch => BiometricCapability::Touch,
            EnrolledClass::Other => BiometricCapability::None,
        }
    }

    /// Run exactly one biometric challenge, presenting `reason` to the user.
    ///
    /// Re-runs the capability probe first; if the device cannot currently
    /// evaluate biometrics, fails with [`AegisError::BiometricsUnavailable`]
    /// without ever invoking the challenge. Otherwise suspends until the
    /// platform resolves the challenge. Subsystem-reported non-success —
    /// no match, user cancel, lockout, or any subsystem error — surfaces as
    /// [`AegisError::AuthenticationFailed`], never as `Ok(false)`: callers
    /// must be able to tell "attempted and failed" from "could not attempt".
    ///
    /// No internal retries; retry and backoff policy belong to the caller.
    pub async fn authenticate(&self, reason: &str) -> AegisResult<bool> {
        debug!(phase = ?AuthPhase::Idle, reason, "starting authentication");
        debug!(phase = ?AuthPhase::Checking, "probing biometric capability");
        if !self.subsystem.can_evaluate() {
            debug!(phase = ?AuthPhase::Ineligible, "device cannot evaluate biometrics");
            return Err(AegisError::BiometricsUnavailable(
                "device cannot currently evaluate biometric authentication".to_string(),
            ));
        }
        debug!(phase = ?AuthPhase::Eligible, "capability probe passed");

        let _guard = self.challenge.lock().await;
        debug!(phase = ?AuthPhase::Authenticating, "presenting biometric challenge");

        match self.subsystem.evaluate(reason).await {
            Ok(true) => {
                debug!(phase = ?AuthPhase::Success, "challenge succeeded");
                Ok(true)
            }
            Ok(false) => {
                debug!(phase = ?AuthPhase::Failure, "subsystem reported no match");
                Err(AegisError::AuthenticationFailed(
                    "biometric subsystem reported non-success".to_string(),
                ))
            }
            Err(err) => {
                debug!(phase = ?AuthPhase::Failure, "subsystem returned an error");
                Err(match err {
                    AegisError::AuthenticationFailed(_) => err,
                    other => AegisError::AuthenticationFailed(other.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSubsystem {
        usable: bool,
        class: EnrolledClass,
        outcome: AegisResult<bool>,
        challenges: AtomicUsize,
    }

    impl FakeSubsystem {
        fn new(usable: bool, class: EnrolledClass, outcome: AegisResult<bool>) -> Arc<Self> {
            Arc::new(Self {
                usable,
                class,
                outcome,
                challenges: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl BiometricSubsystem for FakeSubsystem {
        fn can_evaluate(&self) -> bool {
            self.usable
        }

        fn enrolled_class(&self) -> EnrolledClass {
            self.class
        }

        async fn evaluate(&self, _reason: &str) -> AegisResult<bool> {
            self.challenges.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(v) => Ok(*v),
                Err(AegisError::AuthenticationFailed(msg)) => {
                    Err(AegisError::AuthenticationFailed(msg.clone()))
                }
                Err(_) => Err(AegisError::Http("subsystem error".to_string())),
            }
        }
    }

    #[test]
    fn test_classify_maps_enrolled_classes() {
        let face = FakeSubsystem::new(true, EnrolledClass::Face, Ok(true));
        assert_eq!(
            AuthSession::new(face).classify_capability(),
            BiometricCapability::Face
        );

        let touch = FakeSubsystem::new(true, EnrolledClass::Touch, Ok(true));
        assert_eq!(
            AuthSession::new(touch).classify_capability(),
            BiometricCapability::Touch
        );

        let other = FakeSubsystem::new(true, EnrolledClass::Other, Ok(true));
        assert_eq!(
            AuthSession::new(other).classify_capability(),
            BiometricCapability::None
        );
    }

    #[test]
    fn test_classify_none_when_unusable_regardless_of_class() {
        for class in [EnrolledClass::Face, EnrolledClass::Touch, EnrolledClass::Other] {
            let subsystem = FakeSubsystem::new(false, class, Ok(true));
            assert_eq!(
                AuthSession::new(subsystem).classify_capability(),
                BiometricCapability::None
            );
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let subsystem = FakeSubsystem::new(true, EnrolledClass::Face, Ok(true));
        let session = AuthSession::new(Arc::clone(&subsystem) as Arc<dyn BiometricSubsystem>);
        assert!(session.authenticate("unlock vault").await.unwrap());
        assert_eq!(subsystem.challenges.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unavailable_never_invokes_challenge() {
        let subsystem = FakeSubsystem::new(false, EnrolledClass::Face, Ok(true));
        let session = AuthSession::new(Arc::clone(&subsystem) as Arc<dyn BiometricSubsystem>);
        let err = session.authenticate("unlock vault").await.unwrap_err();
        assert!(matches!(err, AegisError::BiometricsUnavailable(_)));
        assert_eq!(subsystem.challenges.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_match_surfaces_as_failure_not_false() {
        let subsystem = FakeSubsystem::new(true, EnrolledClass::Touch, Ok(false));
        let session = AuthSession::new(subsystem);
        let err = session.authenticate("unlock vault").await.unwrap_err();
        assert!(matches!(err, AegisError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_subsystem_error_maps_to_authentication_failed() {
        let subsystem = FakeSubsystem::new(
            true,
            EnrolledClass::Touch,
            Err(AegisError::Http("prompt dismissed".to_string())),
        );
        let session = AuthSession::new(subsystem);
        let err = session.authenticate("unlock vault").await.unwrap_err();
        assert!(matches!(err, AegisError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn test_exactly_one_challenge_per_call() {
        let subsystem = FakeSubsystem::new(true, EnrolledClass::Face, Ok(false));
        let session = AuthSession::new(Arc::clone(&subsystem) as Arc<dyn BiometricSubsystem>);
        let _ = session.authenticate("first").await;
        let _ = session.authenticate("second").await;
        assert_eq!(subsystem.challenges.load(Ordering::SeqCst), 2);
    }
}
