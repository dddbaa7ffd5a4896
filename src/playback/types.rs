//! Playback data type definitions
//!
//! The shapes handed to the browser synthesizer. Everything serialises to camelCase
//! JSON so the UI can pass it straight to its sound engine.

use serde::{Deserialize, Serialize};

use crate::error::EarError;
use crate::pitch::Key;

/// Oscillator shape for the wave source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// Wave-source settings applied to every note of a progression
///
/// # Fields
/// - `waveform`: oscillator shape
/// - `attack`: fade-in time in seconds
/// - `release`: fade-out time in seconds
/// - `volume`: gain between 0.0 and 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SoundOptions {
    pub waveform: Waveform,
    pub attack: f64,
    pub release: f64,
    pub volume: f64,
}

impl Default for SoundOptions {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            attack: 0.01,
            release: 0.4,
            volume: 0.5,
        }
    }
}

impl SoundOptions {
    pub fn validate(&self) -> Result<(), EarError> {
        let out_of_range = |secs: f64| !secs.is_finite() || secs < 0.0;
        if out_of_range(self.attack) || out_of_range(self.release) {
            return Err(EarError::ConfigError(format!(
                "attack and release must be finite and non-negative (got {} and {})",
                self.attack, self.release
            )));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(EarError::ConfigError(format!(
                "volume must be between 0 and 1 (got {})",
                self.volume
            )));
        }
        Ok(())
    }
}

/// One chord to sound, all notes at once
///
/// `notes`, `midi_notes` and `frequencies` are parallel and keep the voicing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackChord {
    pub notes: Vec<String>,
    pub midi_notes: Vec<i32>,
    pub frequencies: Vec<f64>,
}

/// A progression ready for the synthesizer, chords in play order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub key: Key,
    pub sound: SoundOptions,
    pub chords: Vec<PlaybackChord>,
}
