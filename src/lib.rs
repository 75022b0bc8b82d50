//! Grid Snake - Snake on a fixed 30x30 grid, played in the terminal
//!
//! This library provides:
//! - Core game logic and the session state machine (game module)
//! - Tick scheduling backed by tokio or driven by hand (scheduler module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Sound cues as terminal bells (audio module)
//! - The interactive terminal session (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod scheduler;
