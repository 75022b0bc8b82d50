use std::time::Duration;

use crate::game::Scheduler;

/// Scheduler that never fires on its own.
///
/// The caller ticks the game loop by hand; this only remembers what the loop
/// asked for.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    active: Option<Duration>,
    schedules: usize,
    cancels: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the active schedule
    pub fn active(&self) -> Option<Duration> {
        self.active
    }

    pub fn schedules(&self) -> usize {
        self.schedules
    }

    pub fn cancels(&self) -> usize {
        self.cancels
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, every: Duration) {
        self.active = Some(every);
        self.schedules += 1;
    }

    fn cancel(&mut self) {
        self.active = None;
        self.cancels += 1;
    }
}
