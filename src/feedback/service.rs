//! An abstraction layer over the native feedback service to enable testing.

use thiserror::Error;

/// Errors reported by the native feedback service.
///
/// The two causes the channel must distinguish get their own variants;
/// everything else is carried as the raw platform error code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// The caller lacks the feedback privilege.
    #[error("feedback service permission denied")]
    PermissionDenied,
    /// The device has no vibrator or the pattern is unavailable.
    #[error("feedback pattern not supported")]
    NotSupported,
    /// Any other native failure, identified by its raw error code.
    #[error("feedback service error: {0}")]
    Platform(i32),
}

/// Defines a common interface for the native feedback facility.
///
/// This allows for a mock implementation during tests, avoiding the need to
/// drive actual vibration hardware. The production implementation is
/// selected at build time (see [`crate::feedback::sys`]).
pub trait FeedbackService: Send + Sync {
    /// Initializes the native service. Called at most once per process.
    fn initialize(&self) -> Result<(), FeedbackError>;

    /// Probes whether the vibration pattern is supported on this device.
    fn vibration_supported(&self) -> Result<bool, FeedbackError>;

    /// Plays the vibration pattern once.
    fn play_vibration(&self) -> Result<(), FeedbackError>;

    /// Releases the native service. Called at most once, at teardown.
    fn shutdown(&self) -> Result<(), FeedbackError>;
}
