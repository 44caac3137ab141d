//! Cancelable auto-restart timer.
//!
//! The engine never owns timing; a [`RestartScheduler`] does. The
//! session requests a timer after a terminal result and cancels it on
//! any explicit start or reset, so a stale reset can never fire into a
//! fresh game. At most one timer is pending at a time.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Deferred, cancelable restart scheduling.
pub trait RestartScheduler {
    /// Schedules a restart after `delay`, replacing any pending timer.
    fn schedule(&mut self, delay: Duration);
    /// Cancels the pending timer, if any. Idempotent.
    fn cancel(&mut self);
}

/// Tokio-backed scheduler: each `schedule` spawns a sleep task that
/// sends one tick on the channel handed out at construction. The host
/// drives the restart by awaiting the receiver and calling
/// [`GameSession::auto_restart`].
///
/// [`GameSession::auto_restart`]: crate::GameSession::auto_restart
#[derive(Debug)]
pub struct TokioRestartTimer {
    tx: mpsc::UnboundedSender<()>,
    pending: Option<JoinHandle<()>>,
}

impl TokioRestartTimer {
    /// Creates a timer and the receiver its ticks arrive on. Must be
    /// called within a Tokio runtime.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, pending: None }, rx)
    }
}

impl RestartScheduler for TokioRestartTimer {
    #[instrument(skip(self))]
    fn schedule(&mut self, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        debug!(?delay, "scheduling auto-restart");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host shut down; nothing to do.
            let _ = tx.send(());
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            debug!("canceling pending auto-restart");
            task.abort();
        }
    }
}

/// Scheduler that does nothing, for hosts that drive restarts
/// themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl RestartScheduler for NoopScheduler {
    fn schedule(&mut self, _delay: Duration) {}
    fn cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timer_ticks_after_delay() {
        let (mut timer, mut rx) = TokioRestartTimer::new();
        timer.schedule(Duration::from_secs(2));
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_tick() {
        let (mut timer, mut rx) = TokioRestartTimer::new();
        timer.schedule(Duration::from_secs(2));
        timer.cancel();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_replaces_pending_timer() {
        let (mut timer, mut rx) = TokioRestartTimer::new();
        timer.schedule(Duration::from_secs(10));
        timer.schedule(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_secs(2)).await;
        // Exactly one tick: the replacement, not the original.
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(rx.try_recv().is_err());
    }
}
