//! Channel seam between the bridge and the application layer.

use workbridge_domain::WakeupPayload;

/// Application-layer sink for pushed wake-up payloads.
///
/// `deliver` is fire-and-forget: no acknowledgment is expected and the
/// bridge never assumes the push landed. Delivery must not block — the
/// callback arrives on the platform SDK's thread.
pub trait WakeupChannel: Send + Sync {
    /// Push a payload to the application layer.
    fn deliver(&self, payload: &WakeupPayload);
}
