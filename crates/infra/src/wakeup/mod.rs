//! Wake-up bridge for deep-link/attribution payloads.
//!
//! The platform SDK invokes a callback at most once per cold start and once
//! per foreground resume. The bridge mailboxes the payload in a single slot
//! so the application layer can pick it up whenever it is ready: a
//! best-effort push happens immediately, and the pull path
//! ([`WakeupBridge::fetch_pending`]) is the authoritative delivery
//! mechanism.

mod bridge;
mod channel;

pub use bridge::WakeupBridge;
pub use channel::WakeupChannel;
