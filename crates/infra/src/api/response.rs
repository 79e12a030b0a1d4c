//! Classification of raw response bodies.
//!
//! The wire contract embeds the authoritative status in the body:
//! `{ code, message?, data? }` with `code == 200` denoting success, whatever
//! the transport-level status said. Classification happens up front so that
//! message selection never inspects untyped JSON.

use serde_json::Value;
use workbridge_domain::constants::API_OK_CODE;

/// Tagged classification of a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedBody {
    /// Structured body with the designated "ok" code; `data` is the payload
    /// handed back to the caller (may be `Null` when the body omitted it).
    StructuredSuccess {
        data: Value,
    },
    /// Structured body with a non-ok code.
    StructuredFailure {
        code: u16,
        message: Option<String>,
    },
    /// The body is itself a string (JSON string or non-JSON text).
    RawString(String),
    /// Parseable JSON that does not follow the wire contract.
    Unrecognized(Value),
}

/// Classify a raw response body.
pub fn decode(raw: &str) -> DecodedBody {
    if raw.trim().is_empty() {
        return DecodedBody::Unrecognized(Value::Null);
    }

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        // Not JSON at all; the raw text is the message.
        Err(_) => return DecodedBody::RawString(raw.to_string()),
    };

    match value {
        Value::String(text) => DecodedBody::RawString(text),
        Value::Object(body) => {
            let code = body.get("code").and_then(Value::as_u64).and_then(|c| u16::try_from(c).ok());

            match code {
                Some(code) if code == API_OK_CODE => DecodedBody::StructuredSuccess {
                    data: body.get("data").cloned().unwrap_or(Value::Null),
                },
                Some(code) => DecodedBody::StructuredFailure {
                    code,
                    message: body
                        .get("message")
                        .and_then(Value::as_str)
                        .filter(|m| !m.is_empty())
                        .map(str::to_string),
                },
                None => DecodedBody::Unrecognized(Value::Object(body)),
            }
        }
        other => DecodedBody::Unrecognized(other),
    }
}
