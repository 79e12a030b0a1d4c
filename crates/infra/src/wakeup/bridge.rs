//! Single-slot mailbox between the platform SDK callback and the
//! application layer.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;
use workbridge_domain::{WakeupConfig, WakeupPayload};

use super::channel::WakeupChannel;

/// Bridge relaying wake-up payloads from the platform SDK to the
/// application layer.
///
/// The bridge holds at most one pending payload ("last wake-up wins"): a
/// callback arriving while a previous payload is still unconsumed overwrites
/// it, never queues behind it. The slot is cleared by the first consumer
/// that pulls it. Slot and channel registration are each guarded by a mutex
/// because the callback arrives on the SDK's thread while the consumer runs
/// on the application's event thread.
pub struct WakeupBridge {
    channel_name: String,
    slot: Mutex<Option<WakeupPayload>>,
    channel: Mutex<Option<Arc<dyn WakeupChannel>>>,
}

impl WakeupBridge {
    /// Create a bridge for the configured channel.
    #[must_use]
    pub fn new(config: &WakeupConfig) -> Self {
        Self {
            channel_name: config.channel_name.clone(),
            slot: Mutex::new(None),
            channel: Mutex::new(None),
        }
    }

    /// Register the application-layer channel.
    ///
    /// Called when the application's messaging layer comes up; payloads that
    /// arrived earlier stay in the pending slot and are handed over through
    /// [`fetch_pending`](Self::fetch_pending).
    pub fn attach_channel(&self, channel: Arc<dyn WakeupChannel>) {
        *self.channel.lock() = Some(channel);
        debug!(channel = %self.channel_name, "wake-up channel attached");
    }

    /// Tear down the channel registration (e.g., on activity destruction).
    pub fn detach_channel(&self) {
        *self.channel.lock() = None;
        debug!(channel = %self.channel_name, "wake-up channel detached");
    }

    /// SDK callback entry point.
    ///
    /// Empty payloads are ignored. A non-empty payload is stored in the
    /// pending slot (overwriting any unconsumed predecessor) and then pushed
    /// to the application layer on a best-effort basis; a missing channel is
    /// tolerated silently because the pull path remains authoritative.
    pub fn on_wake_up(&self, payload: WakeupPayload) {
        if payload.is_empty() {
            debug!(channel = %self.channel_name, "ignoring empty wake-up payload");
            return;
        }

        debug!(channel = %self.channel_name, "wake-up payload received");

        // Store first so the payload survives even when the push is lost.
        *self.slot.lock() = Some(payload.clone());

        let channel = self.channel.lock().clone();
        match channel {
            Some(channel) => channel.deliver(&payload),
            None => {
                debug!(channel = %self.channel_name, "no channel attached; payload held pending");
            }
        }
    }

    /// Take the pending payload, clearing the slot.
    ///
    /// Returns `None` when nothing is pending; after a non-empty return the
    /// next call returns `None` until the next wake-up event.
    #[must_use]
    pub fn fetch_pending(&self) -> Option<WakeupPayload> {
        self.slot.lock().take()
    }

    /// Whether an unconsumed payload is currently buffered.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.slot.lock().is_some()
    }
}

impl Default for WakeupBridge {
    fn default() -> Self {
        Self::new(&WakeupConfig::default())
    }
}
