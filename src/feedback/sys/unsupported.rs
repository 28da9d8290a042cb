//! Feedback stub for device classes without a feedback service.

use crate::feedback::service::{FeedbackError, FeedbackService};

/// A no-service implementation: never touches a native API and probes as
/// unsupported, so every vibrate request classifies as `NotSupported`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedFeedback;

impl FeedbackService for UnsupportedFeedback {
    fn initialize(&self) -> Result<(), FeedbackError> {
        Ok(())
    }

    fn vibration_supported(&self) -> Result<bool, FeedbackError> {
        Ok(false)
    }

    fn play_vibration(&self) -> Result<(), FeedbackError> {
        Err(FeedbackError::NotSupported)
    }

    fn shutdown(&self) -> Result<(), FeedbackError> {
        Ok(())
    }
}
