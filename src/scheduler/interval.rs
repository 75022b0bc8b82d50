use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::game::Scheduler;

/// One firing of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

pub type TickReceiver = mpsc::UnboundedReceiver<Tick>;

/// Tokio-backed scheduler.
///
/// Each schedule runs as a task that pushes [`Tick`]s into a channel; the
/// driver owns the receiving end and calls the game loop for every tick that
/// [`is_current`](IntervalScheduler::is_current). Ticks queued by a cancelled
/// schedule carry an old generation and are dropped by that check.
pub struct IntervalScheduler {
    tx: mpsc::UnboundedSender<Tick>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl IntervalScheduler {
    pub fn new() -> (Self, TickReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            generation: 0,
            task: None,
        };
        (scheduler, rx)
    }

    /// True if `tick` came from the schedule that is active right now
    pub fn is_current(&self, tick: Tick) -> bool {
        self.task.is_some() && tick.generation == self.generation
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, every: Duration) {
        self.cancel();

        // tokio intervals panic on a zero period
        let every = every.max(Duration::from_millis(1));
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();

        self.task = Some(tokio::spawn(async move {
            // First tick one full period from now, like setInterval
            let mut ticker = interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));

        debug!(generation, every_ms = every.as_millis() as u64, "schedule installed");
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(generation = self.generation, "schedule cancelled");
        }
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_at_cadence() {
        let (mut scheduler, mut ticks) = IntervalScheduler::new();
        let started = Instant::now();
        scheduler.schedule(Duration::from_millis(100));

        for n in 1..=3u64 {
            let tick = ticks.recv().await.unwrap();
            assert!(scheduler.is_current(tick));

            let elapsed = started.elapsed();
            assert!(elapsed >= Duration::from_millis(100 * n));
            assert!(elapsed < Duration::from_millis(100 * n + 50));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_makes_old_ticks_stale() {
        let (mut scheduler, mut ticks) = IntervalScheduler::new();
        scheduler.schedule(Duration::from_millis(200));
        let old = ticks.recv().await.unwrap();

        scheduler.schedule(Duration::from_millis(50));
        assert!(!scheduler.is_current(old));

        let started = Instant::now();
        let fresh = ticks.recv().await.unwrap();
        assert!(scheduler.is_current(fresh));
        assert!(started.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (mut scheduler, mut ticks) = IntervalScheduler::new();
        scheduler.schedule(Duration::from_millis(50));
        let tick = ticks.recv().await.unwrap();

        scheduler.cancel();

        assert!(!scheduler.is_active());
        assert!(!scheduler.is_current(tick));
        assert!(timeout(Duration::from_secs(5), ticks.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_closes_channel() {
        let (mut scheduler, mut ticks) = IntervalScheduler::new();
        scheduler.schedule(Duration::from_millis(50));
        drop(scheduler);

        // Sender in the scheduler and the aborted task are both gone
        assert_eq!(ticks.recv().await, None);
    }
}
