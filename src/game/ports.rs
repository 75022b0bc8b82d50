//! Seams between the game loop and whatever hosts it.
//!
//! Every call here is fire-and-forget: implementations swallow (and log) their
//! own failures so the simulation never has to care.

use std::time::Duration;

use super::state::RenderSnapshot;

/// Periodic tick source. At most one schedule is active at a time.
pub trait Scheduler {
    /// Replace any active schedule with one firing every `every`
    fn schedule(&mut self, every: Duration);

    /// Stop the active schedule, if any
    fn cancel(&mut self);
}

/// Draws the grid and the score
pub trait Presenter {
    fn render(&mut self, snapshot: &RenderSnapshot);

    fn show_score(&mut self, score: u32);
}

/// Discrete sound cues emitted by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A direction was requested while running
    Turn,
    FoodEaten,
    GameOver,
}

pub trait AudioNotifier {
    fn cue(&mut self, cue: SoundCue);

    /// Continuous cue that plays while the game is running
    fn start_background(&mut self);

    fn stop_background(&mut self);
}

/// The process hosting the session
pub trait HostShell {
    /// Tell the player the game has ended
    fn announce_game_over(&mut self, final_score: u32);

    /// Ask for the whole session to be thrown away and rebuilt
    fn request_restart(&mut self);
}
