use crate::game::HostShell;

/// Holds the end-of-game notice until the driver picks it up
#[derive(Debug, Default)]
pub struct TerminalShell {
    notice: Option<String>,
    restart_requested: bool,
}

impl TerminalShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns the notice to show once a restart has been requested
    pub fn take_restart(&mut self) -> Option<String> {
        if !self.restart_requested {
            return None;
        }
        self.restart_requested = false;
        Some(self.notice.take().unwrap_or_else(|| "Game Over!".to_string()))
    }
}

impl HostShell for TerminalShell {
    fn announce_game_over(&mut self, final_score: u32) {
        self.notice = Some(format!("Game Over! You scored {final_score}."));
    }

    fn request_restart(&mut self) {
        self.restart_requested = true;
    }
}
