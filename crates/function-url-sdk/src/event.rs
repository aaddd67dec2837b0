//! Invocation event and context supplied by the hosting platform

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The payload that triggered an invocation.
///
/// The platform defines its schema; the SDK treats it as any JSON value,
/// including `null` and `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

impl From<Value> for InvocationEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Runtime metadata accompanying an invocation (request id, deadline, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationContext(pub Value);

impl InvocationContext {
    /// Request ID for tracing, when the platform supplied one
    pub fn request_id(&self) -> Option<&str> {
        self.0.get("requestId").and_then(Value::as_str)
    }
}

impl From<Value> for InvocationContext {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Envelope carried by one IPC frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub event: InvocationEvent,

    #[serde(default)]
    pub context: InvocationContext,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_null() {
        let invocation: Invocation = serde_json::from_str("{}").unwrap();
        assert_eq!(invocation.event.0, Value::Null);
        assert_eq!(invocation.context.0, Value::Null);
    }

    #[test]
    fn test_explicit_nulls() {
        let invocation: Invocation =
            serde_json::from_str(r#"{"event": null, "context": null}"#).unwrap();
        assert_eq!(invocation, Invocation::default());
    }

    #[test]
    fn test_event_is_opaque() {
        let invocation: Invocation = serde_json::from_value(json!({
            "event": {"path": "/foo", "httpMethod": "GET", "extra": [1, 2]},
            "context": {"requestId": "abc-123", "deadlineMs": 1700000000000u64}
        }))
        .unwrap();
        assert_eq!(invocation.event.0["path"], "/foo");
        assert_eq!(invocation.context.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_request_id_requires_string() {
        assert_eq!(InvocationContext(json!({"requestId": 42})).request_id(), None);
        assert_eq!(InvocationContext(Value::Null).request_id(), None);
    }

    #[test]
    fn test_transparent_serialization() {
        let event = InvocationEvent::from(json!(["a", 1]));
        assert_eq!(serde_json::to_string(&event).unwrap(), r#"["a",1]"#);
    }
}
