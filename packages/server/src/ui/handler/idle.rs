//! Per-session idle watchdog.

use std::{sync::Arc, time::Duration};

use tokio::sync::Notify;

/// Handle the reader loop uses to report activity.
#[derive(Debug, Clone)]
pub struct ActivitySignal {
    notify: Arc<Notify>,
}

impl ActivitySignal {
    /// Record that the client just sent something.
    ///
    /// Stores a permit when the supervisor is not currently waiting, so a
    /// signal is never lost between two waits.
    pub fn observe(&self) {
        self.notify.notify_one();
    }
}

/// Waits for a session to stay silent for a whole timeout window.
///
/// Every activity signal re-arms the window. Once [`wait_for_idle`] returns
/// the session is to be evicted; the supervisor is not re-armed.
///
/// [`wait_for_idle`]: IdleSupervisor::wait_for_idle
#[derive(Debug)]
pub struct IdleSupervisor {
    timeout: Duration,
    notify: Arc<Notify>,
}

impl IdleSupervisor {
    pub fn new(timeout: Duration) -> (Self, ActivitySignal) {
        let notify = Arc::new(Notify::new());
        let signal = ActivitySignal {
            notify: notify.clone(),
        };
        (Self { timeout, notify }, signal)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve once no activity was observed for `timeout`.
    pub async fn wait_for_idle(&self) {
        while tokio::time::timeout(self.timeout, self.notify.notified())
            .await
            .is_ok()
        {}
    }
}
