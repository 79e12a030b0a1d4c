//! The failure half of the normalized request outcome.

use reqwest::StatusCode;
use thiserror::Error;
use workbridge_domain::constants::{
    API_FORBIDDEN_CODE, API_NOT_FOUND_CODE, API_SERVER_ERROR_FLOOR, API_UNAUTHORIZED_CODE,
    MSG_FORBIDDEN, MSG_GENERIC_ERROR, MSG_NOT_FOUND, MSG_UNAUTHORIZED,
};
use workbridge_domain::WorkbridgeError;

use super::response::DecodedBody;

/// Normalized failure produced by the API pipeline.
///
/// `status` is the classified application-level status: the code embedded in
/// a structured body when one exists, the wire status when the transport
/// answered non-success without a structured body, and absent for true
/// transport failures (no response at all).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiFailure {
    /// Human-readable message, already run through the selection rules.
    pub message: String,
    /// Classified application-level status, when one could be derived.
    pub status: Option<u16>,
    /// The underlying transport error, when the failure originated there.
    #[source]
    pub source: Option<WorkbridgeError>,
}

impl ApiFailure {
    /// Failure for a request that produced no usable response.
    pub fn from_transport(err: WorkbridgeError) -> Self {
        Self { message: err.to_string(), status: None, source: Some(err) }
    }

    /// Failure for a response whose body did not classify as success.
    ///
    /// Must not be called with [`DecodedBody::StructuredSuccess`]; success
    /// bodies never reach the failure path.
    pub fn from_body(decoded: DecodedBody, wire_status: StatusCode) -> Self {
        // Without a structured body the wire status stands in as the
        // classified status, but only when it actually signals a failure.
        let wire_fallback =
            if wire_status.is_success() { None } else { Some(wire_status.as_u16()) };

        let (status, body_message) = match decoded {
            DecodedBody::StructuredFailure { code, message } => (Some(code), message),
            DecodedBody::RawString(text) => {
                let message = if text.is_empty() { None } else { Some(text) };
                (wire_fallback, message)
            }
            DecodedBody::StructuredSuccess { .. } | DecodedBody::Unrecognized(_) => {
                (wire_fallback, None)
            }
        };

        Self { message: select_message(status, body_message), status, source: None }
    }

    /// Failure for a success payload the caller could not deserialize.
    pub fn invalid_payload(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            message: detail.clone(),
            status: None,
            source: Some(WorkbridgeError::InvalidInput(detail)),
        }
    }

    /// Whether this failure warrants the global notification.
    ///
    /// Infrastructure failures are transport errors (no classified status)
    /// and server-class statuses; everything else is a business failure the
    /// calling component presents itself.
    #[must_use]
    pub fn is_infrastructure(&self) -> bool {
        match self.status {
            None => true,
            Some(status) => status >= API_SERVER_ERROR_FLOOR,
        }
    }
}

/// Pick the user-facing message for a failure.
///
/// Order: canned override for the distinguished status classes, explicit
/// body message, generic fallback. The unauthorized class always uses the
/// canned re-authentication prompt; the forbidden and not-found classes
/// prefer the body's message when one exists.
fn select_message(status: Option<u16>, body_message: Option<String>) -> String {
    match status {
        Some(API_UNAUTHORIZED_CODE) => MSG_UNAUTHORIZED.to_string(),
        Some(API_FORBIDDEN_CODE) => body_message.unwrap_or_else(|| MSG_FORBIDDEN.to_string()),
        Some(API_NOT_FOUND_CODE) => body_message.unwrap_or_else(|| MSG_NOT_FOUND.to_string()),
        _ => body_message.unwrap_or_else(|| MSG_GENERIC_ERROR.to_string()),
    }
}
