pub mod interval;
pub mod manual;

pub use interval::{IntervalScheduler, Tick, TickReceiver};
pub use manual::ManualScheduler;
