//! Converts a generated progression into synthesizer input.

use log::debug;

use super::types::{PlaybackChord, PlaybackData, SoundOptions};
use crate::chords::Voicing;
use crate::question::ChordProgression;

/// Note names, MIDI numbers and frequencies for one voicing
pub fn playback_chord(voicing: &Voicing) -> PlaybackChord {
    PlaybackChord {
        notes: voicing.note_names(),
        midi_notes: voicing.iter().map(|pitch| pitch.midi_number()).collect(),
        frequencies: voicing.iter().map(|pitch| pitch.frequency()).collect(),
    }
}

/// Build playback data for every chord of `progression`, in order
pub fn build_playback_data(progression: &ChordProgression, sound: SoundOptions) -> PlaybackData {
    let chords: Vec<PlaybackChord> = progression
        .chords
        .iter()
        .map(|chord| playback_chord(&chord.voicing))
        .collect();
    debug!(
        "built playback for {} chords in {} ({:?})",
        chords.len(),
        progression.key,
        sound.waveform
    );

    PlaybackData {
        key: progression.key,
        sound,
        chords,
    }
}
