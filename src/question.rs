//! # Questions
//!
//! A question is a short chord progression drawn from one level's vocabulary and
//! voiced in a chosen key. The player hears it and names the chords in order.
//!
//! ## Generation
//! 1. Draw `chords_per_question` roman symbols uniformly, with replacement, from the
//!    level's `available_chords`
//! 2. Pick a random inversion of each chord
//! 3. Transpose each voicing into the question's key
//!
//! The random source is passed in, so a seeded generator replays the same question.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::chords::{lookup_chord, select_voicing, Voicing};
use crate::error::EarError;
use crate::levels::Level;
use crate::pitch::Key;
use crate::transpose::transpose;

/// One chord of a generated progression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionChord {
    pub roman: String,
    /// Chord name in the progression's key (e.g. "D Major" for I in D)
    pub name: String,
    /// Voicing already transposed into the progression's key
    pub voicing: Voicing,
}

/// A generated question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordProgression {
    pub level: u32,
    pub key: Key,
    pub chords: Vec<ProgressionChord>,
}

impl ChordProgression {
    /// Roman symbols in play order
    pub fn answer(&self) -> Vec<&str> {
        self.chords.iter().map(|chord| chord.roman.as_str()).collect()
    }

    /// Whether `guess` names every chord, in order
    pub fn is_correct<S: AsRef<str>>(&self, guess: &[S]) -> bool {
        guess.len() == self.chords.len()
            && guess
                .iter()
                .zip(&self.chords)
                .all(|(g, chord)| g.as_ref().trim() == chord.roman)
    }
}

/// Generate one question for `level` in `key`
pub fn generate_progression<R: Rng + ?Sized>(
    level: &Level,
    key: Key,
    rng: &mut R,
) -> Result<ChordProgression, EarError> {
    let mut chords = Vec::with_capacity(level.chords_per_question as usize);

    for _ in 0..level.chords_per_question {
        let roman = level
            .available_chords
            .choose(rng)
            .ok_or_else(|| EarError::CatalogError {
                level: level.number,
                message: "available-chords is empty".to_string(),
            })?;
        let chord = lookup_chord(roman)?;
        let voicing = transpose(&select_voicing(roman, rng)?, key);

        chords.push(ProgressionChord {
            roman: roman.clone(),
            name: chord.name_in(key),
            voicing,
        });
    }

    let progression = ChordProgression {
        level: level.number,
        key,
        chords,
    };
    debug!(
        "level {} question in {}: {:?}",
        level.number,
        key,
        progression.answer()
    );
    Ok(progression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{builtin_catalog, LevelCatalog};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key(name: &str) -> Key {
        name.parse().unwrap()
    }

    #[test]
    fn test_progression_length_follows_level() {
        let mut rng = StdRng::seed_from_u64(11);
        for level in builtin_catalog().levels() {
            let progression = generate_progression(level, Key::C, &mut rng).unwrap();
            assert_eq!(progression.chords.len(), level.chords_per_question as usize);
            assert_eq!(progression.level, level.number);
        }
    }

    #[test]
    fn test_chords_come_from_level_vocabulary() {
        let mut rng = StdRng::seed_from_u64(5);
        let level = builtin_catalog().get_level(2).unwrap();
        for _ in 0..50 {
            let progression = generate_progression(level, Key::C, &mut rng).unwrap();
            for chord in &progression.chords {
                assert!(level.contains_chord(&chord.roman));
                let defined = lookup_chord(&chord.roman).unwrap().voicings.all();
                assert!(defined.contains(&chord.voicing));
            }
        }
    }

    #[test]
    fn test_voicings_are_transposed() {
        let mut rng = StdRng::seed_from_u64(8);
        let level = builtin_catalog().get_level(1).unwrap();
        let d = key("D");
        let progression = generate_progression(level, d, &mut rng).unwrap();
        assert_eq!(progression.key, d);

        for chord in &progression.chords {
            let defined: Vec<Voicing> = lookup_chord(&chord.roman)
                .unwrap()
                .voicings
                .all()
                .iter()
                .map(|v| transpose(v, d))
                .collect();
            assert!(defined.contains(&chord.voicing));
            assert_eq!(chord.name, lookup_chord(&chord.roman).unwrap().name_in(d));
        }
    }

    #[test]
    fn test_same_seed_same_question() {
        let level = builtin_catalog().get_level(7).unwrap();
        let a = generate_progression(level, key("E"), &mut StdRng::seed_from_u64(21)).unwrap();
        let b = generate_progression(level, key("E"), &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_chord_vocabulary() {
        let catalog = LevelCatalog::from_yaml(
            r#"
- number: 1
  available-chords: [vi]
  chords-per-question: 4
"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let progression = generate_progression(catalog.first(), Key::C, &mut rng).unwrap();
        assert_eq!(progression.answer(), vec!["vi"; 4]);
    }

    #[test]
    fn test_is_correct() {
        let level = builtin_catalog().get_level(3).unwrap();
        let progression =
            generate_progression(level, Key::C, &mut StdRng::seed_from_u64(2)).unwrap();
        let answer: Vec<String> = progression.answer().iter().map(|s| s.to_string()).collect();

        assert!(progression.is_correct(&answer[..]));
        assert!(!progression.is_correct(&answer[..1]));

        let mut wrong = answer.clone();
        wrong[0] = if wrong[0] == "I" { "V".to_string() } else { "I".to_string() };
        assert!(!progression.is_correct(&wrong[..]));
    }
}
