//! The platform method channel: receives named calls from the UI
//! framework's messaging layer and answers each with an [`Outcome`].
//!
//! Dispatch is a static table from method name to a handler variant. Only
//! two methods have side effects (application exit and haptic feedback);
//! every other recognized method is an intentional "not implemented" stub.

pub mod call;
pub mod messages;
pub mod outcome;

pub use call::MethodCall;
pub use outcome::Outcome;

use crate::feedback::sys::PlatformFeedback;
use crate::feedback::{FeedbackManager, FeedbackService, ResultCode};
use crate::host::{HostHandle, ProcessHost};

/// The channel this dispatcher serves.
pub const CHANNEL_NAME: &str = "flutter/platform";

/// The handler a recognized method name maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    /// Terminate the host application.
    AppExit,
    /// Trigger haptic feedback via the capability manager.
    Vibrate,
    /// Recognized but intentionally not provided on this platform.
    Stub,
}

/// The fixed, case-sensitive registry of recognized method names.
const METHOD_TABLE: &[(&str, Handler)] = &[
    ("SystemNavigator.pop", Handler::AppExit),
    ("SystemSound.play", Handler::Stub),
    ("HapticFeedback.vibrate", Handler::Vibrate),
    ("Clipboard.getData", Handler::Stub),
    ("Clipboard.setData", Handler::Stub),
    ("Clipboard.hasStrings", Handler::Stub),
    ("SystemChrome.setPreferredOrientations", Handler::Stub),
    ("SystemChrome.setApplicationSwitcherDescription", Handler::Stub),
    ("SystemChrome.setEnabledSystemUIOverlays", Handler::Stub),
    ("SystemChrome.restoreSystemUIOverlays", Handler::Stub),
    ("SystemChrome.setSystemUIOverlayStyle", Handler::Stub),
];

fn lookup(method: &str) -> Option<Handler> {
    METHOD_TABLE
        .iter()
        .find(|(name, _)| *name == method)
        .map(|&(_, handler)| handler)
}

/// The backend half of the platform channel.
///
/// Generic over its two collaborators so tests can substitute mocks: the
/// feedback service behind the capability manager and the handle used for
/// application exit. The composition root wires the build-time selected
/// service and the process host in via [`PlatformChannel::new`].
pub struct PlatformChannel<S: FeedbackService, H: HostHandle> {
    feedback: FeedbackManager<S>,
    host: H,
}

impl PlatformChannel<PlatformFeedback, ProcessHost> {
    /// Creates a channel with the production collaborators: the build-time
    /// selected feedback service and process-exit host handle.
    pub fn new() -> Self {
        Self::with_parts(PlatformFeedback::default(), ProcessHost)
    }
}

impl Default for PlatformChannel<PlatformFeedback, ProcessHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FeedbackService, H: HostHandle> PlatformChannel<S, H> {
    /// Creates a channel over explicit collaborators.
    pub fn with_parts(service: S, host: H) -> Self {
        Self {
            feedback: FeedbackManager::new(service),
            host,
        }
    }

    /// Handles a single method call and produces its response.
    pub fn handle(&self, call: &MethodCall) -> Outcome {
        match lookup(&call.method) {
            Some(Handler::AppExit) => {
                self.host.request_exit();
                Outcome::Success
            }
            Some(Handler::Vibrate) => self.vibrate(call),
            Some(Handler::Stub) => Outcome::NotImplemented,
            None => {
                tracing::info!("Unimplemented method: {}", call.method);
                Outcome::NotImplemented
            }
        }
    }

    /// Decodes a raw transport message and handles it.
    ///
    /// Undecodable messages are logged and answered `NotImplemented`; a
    /// malformed frame must never take the channel down.
    pub fn handle_message(&self, raw: &str) -> Outcome {
        match MethodCall::from_json(raw) {
            Ok(call) => self.handle(&call),
            Err(e) => {
                tracing::warn!("Failed to decode method call {raw:?}: {e}");
                Outcome::NotImplemented
            }
        }
    }

    fn vibrate(&self, call: &MethodCall) -> Outcome {
        tracing::debug!("HapticFeedback.vibrate() call received");

        let code = self.feedback.vibrate();
        if code == ResultCode::Ok {
            return Outcome::Success;
        }

        let method = call.haptic_method_label();
        Outcome::error(messages::for_result(code, &method), messages::COULD_NOT_VIBRATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Host double that counts exit requests instead of terminating.
    #[derive(Default, Clone)]
    struct CountingHost {
        exits: Arc<AtomicUsize>,
    }

    impl CountingHost {
        fn exit_count(&self) -> usize {
            self.exits.load(Ordering::SeqCst)
        }
    }

    impl HostHandle for CountingHost {
        fn request_exit(&self) {
            self.exits.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Feedback double with a fixed probe result and scripted playback.
    struct ScriptedFeedback {
        supported: Result<bool, FeedbackError>,
        play: Result<(), FeedbackError>,
    }

    impl ScriptedFeedback {
        fn working() -> Self {
            Self {
                supported: Ok(true),
                play: Ok(()),
            }
        }

        fn unsupported() -> Self {
            Self {
                supported: Ok(false),
                play: Err(FeedbackError::NotSupported),
            }
        }
    }

    impl FeedbackService for ScriptedFeedback {
        fn initialize(&self) -> Result<(), FeedbackError> {
            Ok(())
        }
        fn vibration_supported(&self) -> Result<bool, FeedbackError> {
            self.supported.clone()
        }
        fn play_vibration(&self) -> Result<(), FeedbackError> {
            self.play.clone()
        }
        fn shutdown(&self) -> Result<(), FeedbackError> {
            Ok(())
        }
    }

    fn channel(service: ScriptedFeedback) -> (PlatformChannel<ScriptedFeedback, CountingHost>, CountingHost)
    {
        let host = CountingHost::default();
        (PlatformChannel::with_parts(service, host.clone()), host)
    }

    #[test]
    fn every_stub_method_reports_not_implemented() {
        let (channel, _host) = channel(ScriptedFeedback::working());
        let stubs = [
            "SystemSound.play",
            "Clipboard.getData",
            "Clipboard.setData",
            "Clipboard.hasStrings",
            "SystemChrome.setPreferredOrientations",
            "SystemChrome.setApplicationSwitcherDescription",
            "SystemChrome.setEnabledSystemUIOverlays",
            "SystemChrome.restoreSystemUIOverlays",
            "SystemChrome.setSystemUIOverlayStyle",
        ];
        for method in stubs {
            // Argument contents must not matter for stubs.
            let call = MethodCall::new(method, json!({"anything": [1, 2, 3]}));
            assert_eq!(channel.handle(&call), Outcome::NotImplemented, "{method}");
        }
    }

    #[test]
    fn method_names_are_case_sensitive() {
        let (channel, host) = channel(ScriptedFeedback::working());
        let call = MethodCall::named("systemnavigator.pop");
        assert_eq!(channel.handle(&call), Outcome::NotImplemented);
        assert_eq!(host.exit_count(), 0);
    }

    #[test]
    fn pop_requests_exit_exactly_once_and_succeeds() {
        let (channel, host) = channel(ScriptedFeedback::working());
        let outcome = channel.handle(&MethodCall::named("SystemNavigator.pop"));
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(host.exit_count(), 1);
    }

    #[test]
    fn vibrate_succeeds_when_the_pattern_plays() {
        let (channel, _host) = channel(ScriptedFeedback::working());
        let call = MethodCall::new(
            "HapticFeedback.vibrate",
            json!(["HapticFeedbackType.lightImpact"]),
        );
        assert_eq!(channel.handle(&call), Outcome::Success);
    }

    #[test]
    fn vibrate_error_embeds_the_rewritten_variant() {
        let (channel, _host) = channel(ScriptedFeedback::unsupported());
        let call = MethodCall::new(
            "HapticFeedback.vibrate",
            json!(["HapticFeedbackType.heavyImpact"]),
        );
        assert_eq!(
            channel.handle(&call),
            Outcome::error(
                "HapticFeedback.heavyImpact() is not supported",
                "Could not vibrate"
            )
        );
    }

    #[test]
    fn vibrate_without_args_uses_the_generic_variant() {
        let (channel, _host) = channel(ScriptedFeedback::unsupported());
        let call = MethodCall::named("HapticFeedback.vibrate");
        assert_eq!(
            channel.handle(&call),
            Outcome::error(
                "HapticFeedback.vibrate() is not supported",
                "Could not vibrate"
            )
        );
    }

    #[test]
    fn undecodable_message_is_tolerated() {
        let (channel, _host) = channel(ScriptedFeedback::working());
        assert_eq!(
            channel.handle_message("{ not json at all"),
            Outcome::NotImplemented
        );
        assert_eq!(channel.handle_message("[1,2,3]"), Outcome::NotImplemented);
    }

    #[test]
    fn handle_message_routes_decoded_calls() {
        let (channel, host) = channel(ScriptedFeedback::working());
        let outcome = channel.handle_message(r#"{"method":"SystemNavigator.pop","args":null}"#);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(host.exit_count(), 1);
    }
}
