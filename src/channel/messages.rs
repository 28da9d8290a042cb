//! The fixed error message templates for the haptic feedback path.

use crate::feedback::ResultCode;

/// The privilege the embedding application must declare to use the
/// feedback service.
pub const FEEDBACK_PRIVILEGE: &str = "http://tizen.org/privilege/feedback";

/// Short description carried in the `message` field of every haptic error.
pub const COULD_NOT_VIBRATE: &str = "Could not vibrate";

/// Cause string for a capability that was probed and found absent.
pub fn not_supported(method: &str) -> String {
    format!("{method}() is not supported")
}

/// Cause string for a permission failure, including the remediation
/// instruction for the application manifest.
pub fn permission_denied(method: &str) -> String {
    format!(
        "No permission to run {method}(). Add \"{FEEDBACK_PRIVILEGE}\" privilege \
         to tizen-manifest.xml to use this method"
    )
}

/// Cause string for any other native failure.
pub fn unknown(method: &str) -> String {
    format!("An unknown error on {method}()")
}

/// Maps a non-`Ok` result code to its cause string.
///
/// Callers handle [`ResultCode::Ok`] before reaching for an error message;
/// mapping it here would be a logic error, so it falls through to the
/// unknown-error template.
pub fn for_result(code: ResultCode, method: &str) -> String {
    match code {
        ResultCode::NotSupported => not_supported(method),
        ResultCode::PermissionDenied => permission_denied(method),
        ResultCode::Ok | ResultCode::Unknown => unknown(method),
    }
}
