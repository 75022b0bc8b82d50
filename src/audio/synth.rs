//! Mono sample synthesis for the sound cues and the background loop.

use std::f32::consts::PI;

use crate::game::SoundCue;

pub const SAMPLE_RATE: u32 = 44_100;

const ATTACK_SECONDS: f32 = 0.005;

/// One sine note with a short attack and a linear release
pub fn tone(freq: f32, seconds: f32, volume: f32) -> Vec<f32> {
    let count = (SAMPLE_RATE as f32 * seconds) as usize;
    let attack = (SAMPLE_RATE as f32 * ATTACK_SECONDS) as usize;
    let release = count.saturating_sub(attack).max(1);

    (0..count)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = if i < attack {
                i as f32 / attack as f32
            } else {
                1.0 - (i - attack) as f32 / release as f32
            };
            (2.0 * PI * freq * t).sin() * volume * envelope
        })
        .collect()
}

/// Notes played back to back, each `seconds` long
pub fn sequence(notes: &[f32], seconds: f32, volume: f32) -> Vec<f32> {
    notes
        .iter()
        .flat_map(|&freq| tone(freq, seconds, volume))
        .collect()
}

pub fn cue_samples(cue: SoundCue) -> Vec<f32> {
    match cue {
        SoundCue::Turn => tone(880.0, 0.04, 0.08),
        SoundCue::FoodEaten => sequence(&[520.0, 680.0], 0.09, 0.12),
        SoundCue::GameOver => sequence(&[392.0, 330.0, 262.0, 196.0], 0.15, 0.15),
    }
}

/// Two-second phrase on a D harmonic-minor run, meant to be looped
pub fn background_samples() -> Vec<f32> {
    const PHRASE: [f32; 8] = [
        293.66, 311.13, 369.99, 392.00, 440.00, 392.00, 369.99, 311.13,
    ];
    sequence(&PHRASE, 0.25, 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_and_level() {
        let samples = tone(440.0, 0.1, 0.2);
        assert_eq!(samples.len(), 4410);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.2 + f32::EPSILON));
        assert!(samples.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn test_tone_shorter_than_attack() {
        let samples = tone(440.0, 0.001, 0.2);
        assert_eq!(samples.len(), 44);
    }

    #[test]
    fn test_every_cue_is_audible() {
        for cue in [SoundCue::Turn, SoundCue::FoodEaten, SoundCue::GameOver] {
            let samples = cue_samples(cue);
            assert!(!samples.is_empty(), "{cue:?} is empty");
            assert!(samples.iter().any(|s| s.abs() > 0.01), "{cue:?} is silent");
        }
        assert!(cue_samples(SoundCue::Turn).len() < cue_samples(SoundCue::GameOver).len());
    }

    #[test]
    fn test_background_phrase_length() {
        let samples = background_samples();
        assert_eq!(samples.len(), 8 * 11025);
    }
}
