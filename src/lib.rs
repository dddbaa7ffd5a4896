pub mod chords;
pub mod config;
pub mod error;
pub mod levels;
pub mod pitch;
pub mod playback;
pub mod question;
pub mod scoring;
pub mod transpose;

pub use chords::{
    chord_table, lookup_chord, random_voicing, select_voicing, Chord, ChordQuality, Inversion,
    InversionVoicings, Voicing,
};
pub use config::GameConfig;
pub use error::*;
pub use levels::{builtin_catalog, get_level, get_max_score, Level, LevelCatalog};
pub use pitch::{Key, Pitch, PitchClass};
pub use question::{generate_progression, ChordProgression, ProgressionChord};
pub use scoring::{points_for, score_for, CORRECT_POINTS, WRONG_PENALTY};
pub use transpose::{transpose, transpose_named, transpose_notes};

use rand::Rng;

/// Generate a question for a level of `catalog` and turn it into synthesizer input.
/// This is the main entry point for a game front end.
///
/// Unknown level numbers are reported as `EarError::CatalogError` here, since a
/// question cannot be asked for a level that does not exist.
pub fn play_question<R: Rng + ?Sized>(
    config: &GameConfig,
    level_number: u32,
    key: Option<Key>,
    rng: &mut R,
) -> Result<(ChordProgression, playback::PlaybackData), EarError> {
    let level = config
        .catalog
        .get_level(level_number)
        .ok_or_else(|| EarError::CatalogError {
            level: level_number,
            message: "no such level".to_string(),
        })?;
    let progression = generate_progression(level, key.unwrap_or(config.key), rng)?;
    let data = playback::build_playback_data(&progression, config.sound);
    Ok((progression, data))
}
