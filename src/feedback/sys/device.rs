//! Native backend for device classes that ship the feedback service.
//!
//! Thin FFI layer over the platform `feedback` library. The raw error codes
//! are classified into [`FeedbackError`] here so nothing above this module
//! ever sees a bare `c_int`.

use std::os::raw::c_int;

use crate::feedback::service::{FeedbackError, FeedbackService};

// Values from the platform feedback headers.
const FEEDBACK_TYPE_VIBRATION: c_int = 2;
const FEEDBACK_PATTERN_SIP: c_int = 1;

const ERROR_NONE: c_int = 0;
const ERROR_PERMISSION_DENIED: c_int = -13; // TIZEN_ERROR_PERMISSION_DENIED
const ERROR_NOT_SUPPORTED: c_int = -1_073_741_822; // TIZEN_ERROR_NOT_SUPPORTED

#[link(name = "feedback")]
extern "C" {
    fn feedback_initialize() -> c_int;
    fn feedback_deinitialize() -> c_int;
    fn feedback_is_supported_pattern(
        feedback_type: c_int,
        pattern: c_int,
        status: *mut bool,
    ) -> c_int;
    fn feedback_play_type(feedback_type: c_int, pattern: c_int) -> c_int;
}

fn check(code: c_int) -> Result<(), FeedbackError> {
    match code {
        ERROR_NONE => Ok(()),
        ERROR_PERMISSION_DENIED => Err(FeedbackError::PermissionDenied),
        ERROR_NOT_SUPPORTED => Err(FeedbackError::NotSupported),
        other => Err(FeedbackError::Platform(other)),
    }
}

/// The production implementation backed by the native feedback library.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceFeedback;

impl FeedbackService for DeviceFeedback {
    fn initialize(&self) -> Result<(), FeedbackError> {
        check(unsafe { feedback_initialize() })
    }

    fn vibration_supported(&self) -> Result<bool, FeedbackError> {
        let mut supported = false;
        check(unsafe {
            feedback_is_supported_pattern(
                FEEDBACK_TYPE_VIBRATION,
                FEEDBACK_PATTERN_SIP,
                &mut supported,
            )
        })?;
        Ok(supported)
    }

    fn play_vibration(&self) -> Result<(), FeedbackError> {
        check(unsafe { feedback_play_type(FEEDBACK_TYPE_VIBRATION, FEEDBACK_PATTERN_SIP) })
    }

    fn shutdown(&self) -> Result<(), FeedbackError> {
        check(unsafe { feedback_deinitialize() })
    }
}
