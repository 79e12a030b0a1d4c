//! Domain data types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key-value bundle delivered by the attribution SDK on a wake-up
/// event (cold start or foreground resume).
///
/// The bundle's shape is defined by the SDK; Workbridge never interprets the
/// keys, it only buffers and forwards them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WakeupPayload {
    params: Map<String, Value>,
}

impl WakeupPayload {
    /// Create a payload from an already-decoded key-value bundle.
    #[must_use]
    pub fn new(params: Map<String, Value>) -> Self {
        Self { params }
    }

    /// Parse a payload from the raw JSON string handed over by the SDK.
    ///
    /// Anything that is not a JSON object (including the empty string the
    /// SDK emits when no deep-link parameters are attached) yields an empty
    /// payload.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(params)) => Self { params },
            _ => Self::default(),
        }
    }

    /// Whether the bundle carries any parameters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Look up a single parameter by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Borrow the underlying key-value bundle.
    #[must_use]
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_parses_object() {
        let payload = WakeupPayload::from_json(r#"{"channel":"share","inviter":"42"}"#);

        assert!(!payload.is_empty());
        assert_eq!(payload.get("channel"), Some(&Value::String("share".to_string())));
        assert_eq!(payload.get("inviter"), Some(&Value::String("42".to_string())));
    }

    #[test]
    fn from_json_tolerates_garbage() {
        assert!(WakeupPayload::from_json("").is_empty());
        assert!(WakeupPayload::from_json("not json").is_empty());
        assert!(WakeupPayload::from_json("[1, 2, 3]").is_empty());
        assert!(WakeupPayload::from_json("null").is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        let payload = WakeupPayload::from_json(r#"{"k":"v"}"#);
        let json = serde_json::to_string(&payload).unwrap();

        assert_eq!(json, r#"{"k":"v"}"#);
    }
}
