use log::debug;

use crate::chords::Voicing;
use crate::error::EarError;
use crate::pitch::Key;

/// Transpose a key-of-C voicing into `key`.
///
/// Each note moves up by the key's semitone offset on its own: the pitch class wraps
/// modulo 12 and the octave goes up by one when the addition passes B. Note order is
/// kept as given, nothing is re-sorted or re-inverted, and the result is sharp-spelled.
///
/// ```rust
/// use chordear::{transpose, Key, Voicing};
///
/// let c_major: Voicing = "C4 E4 G4".parse()?;
/// let d: Key = "D".parse()?;
/// assert_eq!(transpose(&c_major, d).to_string(), "D4 F#4 A4");
/// assert_eq!(transpose(&c_major, Key::C), c_major);
/// # Ok::<(), chordear::EarError>(())
/// ```
pub fn transpose(voicing: &Voicing, key: Key) -> Voicing {
    if key.is_identity() {
        return *voicing;
    }

    let offset = key.semitone_offset();
    let transposed = voicing.map(|pitch| pitch.shifted_up(offset));
    debug!("transposed {} to {}: {}", voicing, key, transposed);
    transposed
}

/// Transpose to a key given by name, failing with `EarError::UnknownKey` for anything
/// other than the twelve sharp-spelled pitch classes
pub fn transpose_named(voicing: &Voicing, key_name: &str) -> Result<Voicing, EarError> {
    let key: Key = key_name.parse()?;
    Ok(transpose(voicing, key))
}

/// String-level transposition for callers holding note names (`["C4", "E4", "G4"]`)
pub fn transpose_notes<S: AsRef<str>>(notes: &[S], key_name: &str) -> Result<Vec<String>, EarError> {
    let voicing = Voicing::parse(notes)?;
    Ok(transpose_named(&voicing, key_name)?.note_names())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::chord_table;

    fn voicing(notes: &str) -> Voicing {
        notes.parse().unwrap()
    }

    fn key(name: &str) -> Key {
        name.parse().unwrap()
    }

    #[test]
    fn test_transpose_to_d_without_wrap() {
        assert_eq!(transpose(&voicing("C4 E4 G4"), key("D")), voicing("D4 F#4 A4"));
    }

    #[test]
    fn test_identity_in_c() {
        assert_eq!(transpose(&voicing("B4 D5 F5"), Key::C), voicing("B4 D5 F5"));
        for chord in chord_table() {
            for v in chord.voicings.all() {
                assert_eq!(transpose(&v, Key::C), v);
            }
        }
    }

    #[test]
    fn test_octave_wraps_per_note() {
        // A4 + 3 passes B, the other notes do not
        assert_eq!(transpose(&voicing("E4 G4 A4"), key("D#")), voicing("G4 A#4 C5"));
        // Every note of the vii chord wraps in B
        assert_eq!(transpose(&voicing("B4 D5 F5"), key("B")), voicing("A#5 C#6 E6"));
    }

    #[test]
    fn test_order_is_preserved() {
        // Second inversion of I: no re-sorting after transposition
        let out = transpose(&voicing("G3 C4 E4"), key("F"));
        assert_eq!(out, voicing("C4 F4 A4"));

        let out = transpose(&voicing("G4 E4 C4"), key("G"));
        assert_eq!(out, voicing("D5 B4 G4"));
    }

    #[test]
    fn test_sharp_spelling_only() {
        let out = transpose(&voicing("F4 A4 C5"), key("A#"));
        assert_eq!(out.note_names(), vec!["D#5", "G5", "A#5"]);
    }

    #[test]
    fn test_inverse_round_trip_keeps_pitch_classes() {
        for chord in chord_table() {
            for v in chord.voicings.all() {
                for k in Key::ALL {
                    let there = transpose(&v, k.inverse());
                    let back = transpose(&there, k);
                    let shifts: Vec<i8> = v
                        .iter()
                        .zip(back.iter())
                        .map(|(orig, round)| {
                            assert_eq!(orig.class, round.class);
                            round.octave - orig.octave
                        })
                        .collect();
                    // Same octave shift for every note
                    assert!(shifts.windows(2).all(|w| w[0] == w[1]), "{} via {}", v, k);
                }
            }
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            transpose_named(&voicing("C4 E4 G4"), "H"),
            Err(EarError::UnknownKey("H".to_string()))
        );
    }

    #[test]
    fn test_top_octave_output_parses_back() {
        let moved = transpose_notes(&["G9", "A9", "B9"], "B").unwrap();
        assert_eq!(moved, vec!["F#10", "G#10", "A#10"]);

        let again = transpose_notes(&moved[..], "C").unwrap();
        assert_eq!(again, moved);

        let top = transpose(&voicing("G9 A9 B9"), key("B"));
        let json = serde_json::to_string(&top).unwrap();
        assert_eq!(serde_json::from_str::<Voicing>(&json).unwrap(), top);
    }

    #[test]
    fn test_transpose_notes() {
        assert_eq!(
            transpose_notes(&["C4", "E4", "G4"], "D").unwrap(),
            vec!["D4", "F#4", "A4"]
        );
        assert_eq!(
            transpose_notes(&["C4", "E4"], "D"),
            Err(EarError::InvalidVoicing { found: 2 })
        );
    }
}
