//! Inactivity auto-clear.
//!
//! The calling context — not the crypto core — owns the decision to wipe
//! idle form state. [`ClearScheduler`] is the capability it provides;
//! [`IdleClear`] is the tokio-backed implementation. Arming replaces any
//! pending wipe, so callers re-arm on every user interaction.

use crate::session::Session;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Capability to schedule a deferred "clear sensitive state" action.
pub trait ClearScheduler {
    /// Schedules a wipe after the idle period, replacing any pending one.
    fn arm(&mut self, after: Duration);

    /// Cancels the pending wipe, if any.
    fn disarm(&mut self);
}

/// Tokio-backed scheduler that clears a shared [`Session`] when it fires.
pub struct IdleClear {
    session: Arc<Mutex<Session>>,
    pending: Option<JoinHandle<()>>,
}

impl IdleClear {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self {
            session,
            pending: None,
        }
    }
}

impl ClearScheduler for IdleClear {
    fn arm(&mut self, after: Duration) {
        self.disarm();
        let session = Arc::clone(&self.session);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            debug!("[SESSION] idle period elapsed, clearing form state");
            if let Ok(mut session) = session.lock() {
                session.clear();
            }
        }));
    }

    fn disarm(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for IdleClear {
    fn drop(&mut self) {
        self.disarm();
    }
}
