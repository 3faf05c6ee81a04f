//! Shutdown coordination for the relay.

use tokio::sync::watch;

/// Owner side of the shutdown signal.
///
/// Whoever holds this decides when the server stops; handles handed to the
/// server resolve once `trigger` is called.
pub struct ShutdownSignal {
    tx: watch::Sender<bool>,
}

impl ShutdownSignal {
    /// Create a new, untriggered signal.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Create a handle for a task that must stop on shutdown.
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger shutdown. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side of the shutdown signal.
pub struct ShutdownHandle {
    rx: watch::Receiver<bool>,
}

impl ShutdownHandle {
    /// Resolve once shutdown has been triggered.
    ///
    /// Dropping the `ShutdownSignal` without triggering counts as a
    /// trigger.
    pub async fn triggered(mut self) {
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }
}
