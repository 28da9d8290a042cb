//! Defines the message structure received from the UI framework's
//! messaging layer.

use serde::Deserialize;

/// The argument prefix the framework uses for haptic feedback variants.
const HAPTIC_VARIANT_PREFIX: &str = "HapticFeedbackType.";

/// The variant name used when the vibrate payload is absent or malformed.
const DEFAULT_HAPTIC_VARIANT: &str = "vibrate";

/// A named method invocation received from the platform channel.
///
/// The transport delivers calls as JSON objects of the shape
/// `{"method": "...", "args": ...}`; `args` is an opaque payload whose
/// interpretation is up to the individual handler.
#[derive(Deserialize, Debug, Clone)]
pub struct MethodCall {
    /// The name of the method to execute, e.g. `SystemNavigator.pop`.
    pub method: String,
    /// The payload associated with the method, as a JSON value.
    #[serde(default)]
    pub args: serde_json::Value,
}

impl MethodCall {
    /// Creates a call with an explicit args payload.
    pub fn new(method: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    /// Creates a call without arguments.
    pub fn named(method: impl Into<String>) -> Self {
        Self::new(method, serde_json::Value::Null)
    }

    /// Decodes a raw transport message.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Rewrites the haptic feedback variant for use in error messages.
    ///
    /// The first element of the args payload (or the payload itself, when the
    /// framework sends a bare string) is expected to be of the form
    /// `HapticFeedbackType.<Variant>`. The prefix is stripped and the variant
    /// is reported as `HapticFeedback.<Variant>`. Absent or malformed
    /// payloads fall back to the generic `vibrate` variant; they are never a
    /// hard error.
    pub fn haptic_method_label(&self) -> String {
        let raw = match &self.args {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Array(items) => items.first().and_then(|v| v.as_str()),
            _ => None,
        };
        let variant = raw
            .and_then(|s| s.strip_prefix(HAPTIC_VARIANT_PREFIX))
            .unwrap_or(DEFAULT_HAPTIC_VARIANT);
        format!("HapticFeedback.{variant}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_method_and_args() {
        let call =
            MethodCall::from_json(r#"{"method":"Clipboard.getData","args":"text/plain"}"#).unwrap();
        assert_eq!(call.method, "Clipboard.getData");
        assert_eq!(call.args, json!("text/plain"));
    }

    #[test]
    fn missing_args_default_to_null() {
        let call = MethodCall::from_json(r#"{"method":"SystemNavigator.pop"}"#).unwrap();
        assert!(call.args.is_null());
    }

    #[test]
    fn haptic_label_strips_prefix_from_array_payload() {
        let call = MethodCall::new(
            "HapticFeedback.vibrate",
            json!(["HapticFeedbackType.lightImpact"]),
        );
        assert_eq!(call.haptic_method_label(), "HapticFeedback.lightImpact");
    }

    #[test]
    fn haptic_label_accepts_bare_string_payload() {
        let call = MethodCall::new(
            "HapticFeedback.vibrate",
            json!("HapticFeedbackType.selectionClick"),
        );
        assert_eq!(call.haptic_method_label(), "HapticFeedback.selectionClick");
    }

    #[test]
    fn haptic_label_defaults_for_missing_or_malformed_payloads() {
        for args in [json!(null), json!([]), json!([42]), json!("lightImpact")] {
            let call = MethodCall::new("HapticFeedback.vibrate", args);
            assert_eq!(call.haptic_method_label(), "HapticFeedback.vibrate");
        }
    }
}
