use rodio::{OutputStream, OutputStreamHandle, Sink, Source, buffer::SamplesBuffer};
use tracing::{debug, warn};

use super::synth::{SAMPLE_RATE, background_samples, cue_samples};
use crate::game::{AudioNotifier, SoundCue};

/// Plays cues and the looping background track on the default output device
pub struct RodioNotifier {
    // Dropping the stream silences every sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
    background: Option<Sink>,
}

impl RodioNotifier {
    pub fn try_new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            background: None,
        })
    }

    pub fn is_background_playing(&self) -> bool {
        self.background.is_some()
    }

    fn play(&self, samples: Vec<f32>) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
                sink.detach();
            }
            Err(e) => warn!("Failed to open sink: {}", e),
        }
    }
}

impl AudioNotifier for RodioNotifier {
    fn cue(&mut self, cue: SoundCue) {
        self.play(cue_samples(cue));
    }

    fn start_background(&mut self) {
        if self.background.is_some() {
            return;
        }

        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                let track = SamplesBuffer::new(1, SAMPLE_RATE, background_samples());
                sink.append(track.repeat_infinite());
                self.background = Some(sink);
                debug!("background track started");
            }
            Err(e) => warn!("Failed to open background sink: {}", e),
        }
    }

    fn stop_background(&mut self) {
        if let Some(sink) = self.background.take() {
            sink.stop();
            debug!("background track stopped");
        }
    }
}
