//! Defines the response contract of the platform channel.

/// The result of handling a single method call.
///
/// Each variant corresponds to one of the three replies the transport can
/// carry back to the caller: a plain success, an explicit error, or the
/// "not implemented" sentinel for methods this platform does not provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The method was executed; no payload is needed.
    Success,
    /// The method is recognized but intentionally not provided, or unknown.
    NotImplemented,
    /// The method failed. `code` carries the human-readable cause,
    /// `message` a fixed short description.
    Error {
        /// Human-readable cause string, e.g. the haptic error templates.
        code: String,
        /// Fixed short description, e.g. "Could not vibrate".
        message: String,
    },
}

impl Outcome {
    /// Builds an [`Outcome::Error`] from anything string-like.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}
