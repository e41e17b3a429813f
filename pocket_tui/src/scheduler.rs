//! Bot-move scheduling.
//!
//! The bot "thinks" for a fixed delay before moving. The scheduler owns
//! a single cancellable delayed task: it is armed when the game enters a
//! bot-turn state and aborted the moment the state stops qualifying
//! (reset, mode change, leaving the game screen). Only one task may be
//! outstanding at a time; the decision itself lives in the engine's pure
//! heuristic, never here.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Events the scheduler sends to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// The thinking delay elapsed; ask the heuristic for a move.
    BotMoveDue,
}

/// Owns the single outstanding bot-move timer.
pub struct BotScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<SchedulerEvent>,
    pending: Option<JoinHandle<()>>,
}

impl BotScheduler {
    /// Creates a scheduler that reports on `tx` after `delay`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<SchedulerEvent>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Reconciles the timer with the game state: arms it on entering a
    /// bot turn, aborts it on leaving one. Arming while a timer is
    /// already pending is a no-op (the bot is already thinking).
    pub fn sync(&mut self, bot_turn: bool) {
        if bot_turn {
            if self.pending.is_none() {
                debug!(delay_ms = self.delay.as_millis() as u64, "arming bot timer");
                let tx = self.tx.clone();
                let delay = self.delay;
                self.pending = Some(tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(SchedulerEvent::BotMoveDue);
                }));
            }
        } else if let Some(handle) = self.pending.take() {
            debug!("cancelling bot timer");
            handle.abort();
        }
    }

    /// Marks the outstanding timer as consumed. Called by the UI loop
    /// after it handles a [`SchedulerEvent::BotMoveDue`].
    pub fn acknowledge(&mut self) {
        self.pending = None;
    }

    /// True while a timer is outstanding (the bot is "thinking").
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for BotScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_the_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = BotScheduler::new(Duration::from_millis(2_000), tx);

        scheduler.sync(true);
        assert!(scheduler.is_pending());
        assert_eq!(rx.recv().await, Some(SchedulerEvent::BotMoveDue));
        scheduler.acknowledge();
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = BotScheduler::new(Duration::from_millis(2_000), tx);

        scheduler.sync(true);
        scheduler.sync(false);
        assert!(!scheduler.is_pending());

        let raced = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(raced.is_err(), "aborted timer still fired");
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_one_timer_outstanding() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = BotScheduler::new(Duration::from_millis(100), tx);

        // Repeated syncs while thinking must not stack timers.
        scheduler.sync(true);
        scheduler.sync(true);
        scheduler.sync(true);

        assert_eq!(rx.recv().await, Some(SchedulerEvent::BotMoveDue));
        scheduler.acknowledge();
        let extra = tokio::time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(extra.is_err(), "more than one timer was armed");
    }
}
