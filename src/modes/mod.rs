pub mod human;
pub mod shell;

pub use human::{HumanMode, HumanOptions};
pub use shell::TerminalShell;
