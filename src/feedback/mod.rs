//! The feedback capability manager.
//!
//! Wraps the native feedback service in a probe-once state machine: on first
//! use it initializes the service and probes whether the vibration pattern is
//! supported and permitted, then answers every vibrate request from the
//! cached state. The only mutation after the probe is a sticky permission
//! downgrade when the service reports a denial during playback.

pub mod service;
pub mod sys;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

pub use service::{FeedbackError, FeedbackService};

/// Classification of a single vibrate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// The pattern was played.
    Ok,
    /// The capability was probed and is absent on this device.
    NotSupported,
    /// The capability exists but access was refused.
    PermissionDenied,
    /// Initialization failed or the service reported an unclassified error.
    Unknown,
}

/// Capability state captured by the one-time probe.
#[derive(Debug, Clone, Copy)]
struct FeedbackState {
    /// The service is usable for playback classification.
    initialized: bool,
    /// The probe did not observe a permission denial.
    permitted: bool,
    /// The vibration pattern is available on this device.
    supported: bool,
    /// Native initialization succeeded, so teardown must release it.
    /// Distinct from `initialized`: a failed support probe marks the manager
    /// uninitialized for classification while the native side still needs a
    /// shutdown call.
    service_up: bool,
}

/// Probes the underlying feedback service once and exposes a classified
/// vibrate operation.
///
/// Owned by the application's composition root and injected wherever a
/// vibrate capability is needed. The probe runs lazily on the first request
/// and at most once, even under concurrent first use.
pub struct FeedbackManager<S: FeedbackService> {
    service: S,
    state: OnceLock<FeedbackState>,
    permission_revoked: AtomicBool,
}

impl<S: FeedbackService> FeedbackManager<S> {
    /// Creates a manager over the given service. No native call happens
    /// until the first [`vibrate`](Self::vibrate).
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: OnceLock::new(),
            permission_revoked: AtomicBool::new(false),
        }
    }

    /// Plays the vibration pattern, classifying the outcome.
    pub fn vibrate(&self) -> ResultCode {
        let state = self.probed();

        if !state.initialized {
            tracing::debug!("vibrate request dropped: feedback service not initialized");
            return ResultCode::Unknown;
        }
        if !state.permitted || self.permission_revoked.load(Ordering::Relaxed) {
            // Sticky: no point re-asking the service once it refused us.
            return ResultCode::PermissionDenied;
        }
        if !state.supported {
            return ResultCode::NotSupported;
        }

        match self.service.play_vibration() {
            Ok(()) => ResultCode::Ok,
            Err(FeedbackError::PermissionDenied) => {
                tracing::warn!("feedback playback denied; caching the permission downgrade");
                self.permission_revoked.store(true, Ordering::Relaxed);
                ResultCode::PermissionDenied
            }
            Err(FeedbackError::NotSupported) => ResultCode::NotSupported,
            Err(e) => {
                tracing::warn!("feedback playback failed: {e}");
                ResultCode::Unknown
            }
        }
    }

    /// Returns the probe state, running the probe on first access.
    fn probed(&self) -> &FeedbackState {
        self.state.get_or_init(|| self.probe())
    }

    fn probe(&self) -> FeedbackState {
        if let Err(e) = self.service.initialize() {
            tracing::warn!("feedback service initialization failed: {e}");
            return FeedbackState {
                initialized: false,
                permitted: true,
                supported: false,
                service_up: false,
            };
        }
        tracing::debug!("feedback service initialized");

        match self.service.vibration_supported() {
            Ok(supported) => {
                tracing::debug!("vibration pattern supported: {supported}");
                FeedbackState {
                    initialized: true,
                    permitted: true,
                    supported,
                    service_up: true,
                }
            }
            Err(FeedbackError::PermissionDenied) => {
                tracing::warn!("feedback support probe denied; permission not granted");
                FeedbackState {
                    initialized: true,
                    permitted: false,
                    supported: false,
                    service_up: true,
                }
            }
            Err(e) => {
                // Any other probe failure leaves the capability in an unknown
                // shape; treat the manager as not properly initialized.
                tracing::warn!("feedback support probe failed: {e}");
                FeedbackState {
                    initialized: false,
                    permitted: true,
                    supported: false,
                    service_up: true,
                }
            }
        }
    }
}

impl<S: FeedbackService> Drop for FeedbackManager<S> {
    /// Releases the native service. Teardown must never fail the process,
    /// so errors are logged and swallowed.
    fn drop(&mut self) {
        let Some(state) = self.state.get() else {
            return; // never probed, nothing to release
        };
        if !state.service_up {
            return;
        }
        match self.service.shutdown() {
            Ok(()) => tracing::debug!("feedback service released"),
            Err(e) => tracing::warn!("feedback service shutdown failed: {e}"),
        }
    }
}
