//! Global notification seam for infrastructure failures.
//!
//! The pipeline raises at most one notification per failing request, and
//! only for infrastructure-class failures; business failures stay silent at
//! this layer so callers rendering their own validation feedback never get a
//! duplicate banner.

use tracing::warn;

/// Sink for the user-visible, global failure notification.
pub trait Notifier: Send + Sync {
    /// Surface a failure message to the user.
    fn notify(&self, message: &str);
}

/// Default notifier: logs the banner-equivalent through `tracing`.
///
/// The UI shell subscribes to the log stream (or replaces this with its own
/// implementation) to render the actual toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(%message, "infrastructure failure");
    }
}
