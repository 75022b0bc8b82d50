//! Core game logic module for Snake
//!
//! This module contains the grid rules and the session state machine without
//! any terminal, timer or audio dependencies. Hosts plug in through the traits
//! in [`ports`].

pub mod action;
pub mod config;
pub mod engine;
pub mod game_loop;
pub mod ports;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use config::{Difficulty, GameConfig};
pub use engine::{GameEngine, StepInfo};
pub use game_loop::{GameLoop, TickOutcome};
pub use ports::{AudioNotifier, HostShell, Presenter, Scheduler, SoundCue};
pub use state::{Board, Collision, GameState, Position, RenderSnapshot};
