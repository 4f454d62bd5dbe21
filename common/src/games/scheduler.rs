use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One-shot timer primitive. The owner of the scheduler is expected to feed
/// fired handles back to the session that requested them.
pub trait BotScheduler {
    fn schedule_delayed(&mut self, delay: Duration) -> TimerHandle;

    fn cancel_delayed(&mut self, handle: TimerHandle);
}

/// Sleeps on the tokio runtime and reports fired handles over a channel.
pub struct TokioBotScheduler {
    fired_tx: mpsc::UnboundedSender<TimerHandle>,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    next_id: u64,
}

impl TokioBotScheduler {
    pub fn new(fired_tx: mpsc::UnboundedSender<TimerHandle>) -> Self {
        Self {
            fired_tx,
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TimerHandle>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        (Self::new(fired_tx), fired_rx)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl BotScheduler for TokioBotScheduler {
    fn schedule_delayed(&mut self, delay: Duration) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());

        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;

        let fired_tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = fired_tx.send(handle);
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel_delayed(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioBotScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scheduled_timer_fires_with_its_handle() {
        let (mut scheduler, mut fired_rx) = TokioBotScheduler::channel();

        let handle = scheduler.schedule_delayed(Duration::from_millis(10));

        let fired = tokio::time::timeout(Duration::from_secs(2), fired_rx.recv())
            .await
            .expect("timer did not fire");
        assert_eq!(fired, Some(handle));
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_fires() {
        let (mut scheduler, mut fired_rx) = TokioBotScheduler::channel();

        let cancelled = scheduler.schedule_delayed(Duration::from_millis(30));
        scheduler.cancel_delayed(cancelled);
        let kept = scheduler.schedule_delayed(Duration::from_millis(60));

        let fired = tokio::time::timeout(Duration::from_secs(2), fired_rx.recv())
            .await
            .expect("timer did not fire");
        assert_eq!(fired, Some(kept));
        assert!(fired_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_handles_are_unique() {
        let (mut scheduler, _fired_rx) = TokioBotScheduler::channel();

        let first = scheduler.schedule_delayed(Duration::from_secs(60));
        let second = scheduler.schedule_delayed(Duration::from_secs(60));

        assert_ne!(first, second);
        assert_eq!(scheduler.pending_count(), 2);
        scheduler.cancel_delayed(first);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
