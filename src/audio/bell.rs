use std::io::Write;

use tracing::{trace, warn};

use crate::game::{AudioNotifier, SoundCue};

const BEL: &[u8] = b"\x07";

/// Number of BEL characters rung for a cue
pub fn bell_count(cue: SoundCue) -> usize {
    match cue {
        SoundCue::Turn => 0,
        SoundCue::FoodEaten => 1,
        SoundCue::GameOver => 2,
    }
}

/// Plays cues as terminal bells on `out`.
///
/// A terminal has no way to loop music, so the background cue is only
/// tracked as a flag for the header to show.
pub struct TerminalBell<W: Write> {
    out: W,
    muted: bool,
    background: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self {
            out,
            muted,
            background: false,
        }
    }

    pub fn is_background_playing(&self) -> bool {
        self.background
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn ring(&mut self, times: usize) {
        for _ in 0..times {
            if let Err(e) = self.out.write_all(BEL) {
                warn!("Failed to ring bell: {}", e);
                return;
            }
        }
        if let Err(e) = self.out.flush() {
            warn!("Failed to flush bell: {}", e);
        }
    }
}

impl<W: Write> AudioNotifier for TerminalBell<W> {
    fn cue(&mut self, cue: SoundCue) {
        trace!(?cue, muted = self.muted, "sound cue");
        if !self.muted {
            self.ring(bell_count(cue));
        }
    }

    fn start_background(&mut self) {
        self.background = true;
    }

    fn stop_background(&mut self) {
        self.background = false;
    }
}
