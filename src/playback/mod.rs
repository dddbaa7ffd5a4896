//! # Playback Module
//!
//! Turn a generated [`ChordProgression`](crate::question::ChordProgression) into the
//! data an external synthesizer needs: note names, MIDI numbers, frequencies and the
//! wave-source settings.
//!
//! ## Scope
//! This module only describes what to play. Oscillators, envelopes, effects, mixing
//! and timing all live in the sound engine on the other side.
//!
//! ## Key Types
//! - [`PlaybackData`] - Key, sound settings and chords in play order
//! - [`PlaybackChord`] - One voicing as parallel note/MIDI/frequency lists
//! - [`SoundOptions`] / [`Waveform`] - Wave-source configuration
//!
//! ## Example
//! ```rust
//! use chordear::playback::{build_playback_data, SoundOptions};
//! use chordear::{generate_progression, get_level, Key};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let level = get_level(1).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let progression = generate_progression(level, Key::C, &mut rng)?;
//!
//! let data = build_playback_data(&progression, SoundOptions::default());
//! assert_eq!(data.chords.len(), 2);
//! assert_eq!(data.chords[0].midi_notes.len(), 3);
//! # Ok::<(), chordear::EarError>(())
//! ```

mod engine;
mod types;


pub use engine::{build_playback_data, playback_chord};
pub use types::{PlaybackChord, PlaybackData, SoundOptions, Waveform};
