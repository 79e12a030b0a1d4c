//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Application-level status code embedded in response bodies that denotes
/// success, as opposed to the transport-level HTTP status.
pub const API_OK_CODE: u16 = 200;

// Classified statuses with canned, user-facing messages
pub const API_UNAUTHORIZED_CODE: u16 = 401;
pub const API_FORBIDDEN_CODE: u16 = 403;
pub const API_NOT_FOUND_CODE: u16 = 404;

/// Classified statuses at or above this value are infrastructure failures.
pub const API_SERVER_ERROR_FLOOR: u16 = 500;

// Canned user-facing messages
pub const MSG_UNAUTHORIZED: &str = "Session expired, please sign in again";
pub const MSG_FORBIDDEN: &str = "You do not have permission to access this resource";
pub const MSG_NOT_FOUND: &str = "The requested resource was not found";

/// Fallback message when a failing response carries no usable message.
pub const MSG_GENERIC_ERROR: &str = "Error";

// Transport defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 5;

/// Default name of the channel between the wake-up bridge and the
/// application layer.
pub const DEFAULT_WAKEUP_CHANNEL: &str = "workbridge/wakeup";
