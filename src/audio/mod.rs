pub mod bell;
#[cfg(feature = "sound")]
pub mod device;
pub mod synth;

use std::io::{Stderr, stderr};

use crate::game::{AudioNotifier, SoundCue};

pub use bell::TerminalBell;
#[cfg(feature = "sound")]
pub use device::RodioNotifier;

/// Whatever can make noise on this machine
pub enum Speaker {
    Bell(TerminalBell<Stderr>),
    #[cfg(feature = "sound")]
    Device(RodioNotifier),
}

impl Speaker {
    /// The audio device when one opens, otherwise the terminal bell
    pub fn open(muted: bool) -> Self {
        if !muted {
            if let Some(device) = open_device() {
                return device;
            }
        }
        Speaker::Bell(TerminalBell::new(stderr(), muted))
    }

    pub fn is_background_playing(&self) -> bool {
        match self {
            Speaker::Bell(bell) => bell.is_background_playing(),
            #[cfg(feature = "sound")]
            Speaker::Device(device) => device.is_background_playing(),
        }
    }

    fn notifier(&mut self) -> &mut dyn AudioNotifier {
        match self {
            Speaker::Bell(bell) => bell,
            #[cfg(feature = "sound")]
            Speaker::Device(device) => device,
        }
    }
}

#[cfg(feature = "sound")]
fn open_device() -> Option<Speaker> {
    match RodioNotifier::try_new() {
        Ok(device) => Some(Speaker::Device(device)),
        Err(e) => {
            tracing::warn!("No audio device, falling back to the terminal bell: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "sound"))]
fn open_device() -> Option<Speaker> {
    None
}

impl AudioNotifier for Speaker {
    fn cue(&mut self, cue: SoundCue) {
        self.notifier().cue(cue);
    }

    fn start_background(&mut self) {
        self.notifier().start_background();
    }

    fn stop_background(&mut self) {
        self.notifier().stop_background();
    }
}
