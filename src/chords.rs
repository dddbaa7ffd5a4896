//! # Chord Table
//!
//! The seven diatonic triads of C major, keyed by roman numeral, with a root-position
//! voicing and two inversions each. Everything is stored in the key of C; the
//! `transpose` module moves voicings into other keys.
//!
//! ## Table
//! ```text
//! roman  name           root        first       second
//! I      C Major        C4 E4 G4    E4 G4 C5    G3 C4 E4
//! ii     D minor        D4 F4 A4    F4 A4 D5    A3 D4 F4
//! iii    E minor        E4 G4 B4    G4 B4 E5    B3 E4 G4
//! IV     F Major        F4 A4 C5    A4 C5 F5    C4 F4 A4
//! V      G Major        G4 B4 D5    B4 D5 G5    D4 G4 B4
//! vi     A minor        A4 C5 E5    C5 E5 A5    E4 A4 C5
//! vii    B diminished   B4 D5 F5    D5 F5 B5    F4 B4 D5
//! ```
//!
//! ## Voicing Selection
//! [`select_voicing`] draws one of the three inversions uniformly from a caller-supplied
//! random source. Pass a seeded `StdRng` for reproducible draws, or use
//! [`random_voicing`] for the thread-local generator.
//!
//! ```rust
//! use chordear::{lookup_chord, select_voicing};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let chord = lookup_chord("V")?;
//! assert_eq!(chord.name, "G Major");
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let voicing = select_voicing("V", &mut rng)?;
//! assert!(chord.voicings.all().contains(&voicing));
//! # Ok::<(), chordear::EarError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EarError;
use crate::pitch::PitchClass::{A, B, C, D, E, F, G};
use crate::pitch::{Key, Pitch, PitchClass};

/// Exactly three notes, lowest-listed first, forming one inversion of a triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voicing([Pitch; 3]);

impl Voicing {
    pub const fn new(notes: [Pitch; 3]) -> Self {
        Self(notes)
    }

    /// Build a voicing from note names such as `["C4", "E4", "G4"]`
    pub fn parse<S: AsRef<str>>(notes: &[S]) -> Result<Self, EarError> {
        if notes.len() != 3 {
            return Err(EarError::InvalidVoicing { found: notes.len() });
        }
        Ok(Self([
            notes[0].as_ref().parse()?,
            notes[1].as_ref().parse()?,
            notes[2].as_ref().parse()?,
        ]))
    }

    pub fn notes(&self) -> &[Pitch; 3] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pitch> {
        self.0.iter()
    }

    /// Apply `f` to every note, keeping the order
    pub fn map(&self, f: impl FnMut(Pitch) -> Pitch) -> Self {
        Self(self.0.map(f))
    }

    pub fn note_names(&self) -> Vec<String> {
        self.0.iter().map(|pitch| pitch.to_string()).collect()
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Voicing {
    type Err = EarError;

    /// Parse whitespace-separated note names (`"C4 E4 G4"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notes: Vec<&str> = s.split_whitespace().collect();
        Self::parse(&notes)
    }
}

/// Triad quality, used to name a chord in any key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
        }
    }
}

/// Which chord tone is in the bass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Inversion {
    Root,
    First,
    Second,
}

impl Inversion {
    pub const ALL: [Inversion; 3] = [Inversion::Root, Inversion::First, Inversion::Second];

    /// Uniform draw over the three inversions
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The voicings defined for one chord. Root position is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InversionVoicings {
    pub root: Voicing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Voicing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<Voicing>,
}

impl InversionVoicings {
    /// Voicing for `inversion`, or root position if that inversion is not defined
    pub fn get(&self, inversion: Inversion) -> Voicing {
        let requested = match inversion {
            Inversion::Root => Some(self.root),
            Inversion::First => self.first,
            Inversion::Second => self.second,
        };
        requested.unwrap_or(self.root)
    }

    /// Every defined voicing, root first
    pub fn all(&self) -> Vec<Voicing> {
        std::iter::once(self.root)
            .chain(self.first)
            .chain(self.second)
            .collect()
    }
}

/// A chord table entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub roman: &'static str,
    pub name: &'static str,
    pub quality: ChordQuality,
    /// Root-position notes in the key of C
    pub notes: Voicing,
    pub voicings: InversionVoicings,
}

impl Chord {
    pub fn voicing(&self, inversion: Inversion) -> Voicing {
        self.voicings.get(inversion)
    }

    /// Root pitch class in the key of C
    pub fn root(&self) -> PitchClass {
        self.notes.notes()[0].class
    }

    /// Chord name when the progression is played in `key` (`I` in D is "D Major")
    pub fn name_in(&self, key: Key) -> String {
        let root = PitchClass::from_semitone(self.root().semitone() + key.semitone_offset());
        format!("{} {}", root, self.quality.label())
    }
}

const fn n(class: PitchClass, octave: i8) -> Pitch {
    Pitch::new(class, octave)
}

const fn triad(root: Pitch, third: Pitch, fifth: Pitch) -> Voicing {
    Voicing::new([root, third, fifth])
}

const fn chord(
    roman: &'static str,
    name: &'static str,
    quality: ChordQuality,
    root: Voicing,
    first: Voicing,
    second: Voicing,
) -> Chord {
    Chord {
        roman,
        name,
        quality,
        notes: root,
        voicings: InversionVoicings {
            root,
            first: Some(first),
            second: Some(second),
        },
    }
}

static CHORD_TABLE: [Chord; 7] = [
    chord(
        "I",
        "C Major",
        ChordQuality::Major,
        triad(n(C, 4), n(E, 4), n(G, 4)),
        triad(n(E, 4), n(G, 4), n(C, 5)),
        triad(n(G, 3), n(C, 4), n(E, 4)),
    ),
    chord(
        "ii",
        "D minor",
        ChordQuality::Minor,
        triad(n(D, 4), n(F, 4), n(A, 4)),
        triad(n(F, 4), n(A, 4), n(D, 5)),
        triad(n(A, 3), n(D, 4), n(F, 4)),
    ),
    chord(
        "iii",
        "E minor",
        ChordQuality::Minor,
        triad(n(E, 4), n(G, 4), n(B, 4)),
        triad(n(G, 4), n(B, 4), n(E, 5)),
        triad(n(B, 3), n(E, 4), n(G, 4)),
    ),
    chord(
        "IV",
        "F Major",
        ChordQuality::Major,
        triad(n(F, 4), n(A, 4), n(C, 5)),
        triad(n(A, 4), n(C, 5), n(F, 5)),
        triad(n(C, 4), n(F, 4), n(A, 4)),
    ),
    chord(
        "V",
        "G Major",
        ChordQuality::Major,
        triad(n(G, 4), n(B, 4), n(D, 5)),
        triad(n(B, 4), n(D, 5), n(G, 5)),
        triad(n(D, 4), n(G, 4), n(B, 4)),
    ),
    chord(
        "vi",
        "A minor",
        ChordQuality::Minor,
        triad(n(A, 4), n(C, 5), n(E, 5)),
        triad(n(C, 5), n(E, 5), n(A, 5)),
        triad(n(E, 4), n(A, 4), n(C, 5)),
    ),
    chord(
        "vii",
        "B diminished",
        ChordQuality::Diminished,
        triad(n(B, 4), n(D, 5), n(F, 5)),
        triad(n(D, 5), n(F, 5), n(B, 5)),
        triad(n(F, 4), n(B, 4), n(D, 5)),
    ),
];

/// The full chord table, in scale-degree order
pub fn chord_table() -> &'static [Chord] {
    &CHORD_TABLE
}

/// Look up a chord by roman symbol (case-sensitive: `ii` is not `II`)
pub fn lookup_chord(roman: &str) -> Result<&'static Chord, EarError> {
    CHORD_TABLE
        .iter()
        .find(|chord| chord.roman == roman)
        .ok_or_else(|| EarError::UnknownChord(roman.to_string()))
}

/// Pick a random inversion of `roman` using the supplied random source
pub fn select_voicing<R: Rng + ?Sized>(roman: &str, rng: &mut R) -> Result<Voicing, EarError> {
    let chord = lookup_chord(roman)?;
    let inversion = Inversion::random(rng);
    let voicing = chord.voicing(inversion);
    debug!("selected {:?} inversion of {}: {}", inversion, roman, voicing);
    Ok(voicing)
}

/// [`select_voicing`] with the thread-local generator
pub fn random_voicing(roman: &str) -> Result<Voicing, EarError> {
    select_voicing(roman, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROMANS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii"];

    #[test]
    fn test_every_roman_has_three_base_notes() {
        for roman in ROMANS {
            let chord = lookup_chord(roman).unwrap();
            assert_eq!(chord.roman, roman);
            assert_eq!(chord.notes.notes().len(), 3);
            assert_eq!(chord.notes, chord.voicings.root);
        }
        assert_eq!(chord_table().len(), ROMANS.len());
    }

    #[test]
    fn test_unknown_chord() {
        assert_eq!(
            lookup_chord("blah"),
            Err(EarError::UnknownChord("blah".to_string()))
        );
        // Symbols are case-sensitive
        assert!(lookup_chord("II").is_err());
        assert!(select_voicing("bVII", &mut StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_table_contents() {
        let one = lookup_chord("I").unwrap();
        assert_eq!(one.name, "C Major");
        assert_eq!(one.voicing(Inversion::First).to_string(), "E4 G4 C5");
        assert_eq!(one.voicing(Inversion::Second).to_string(), "G3 C4 E4");

        let vii = lookup_chord("vii").unwrap();
        assert_eq!(vii.name, "B diminished");
        assert_eq!(vii.quality, ChordQuality::Diminished);
        assert_eq!(vii.notes.to_string(), "B4 D5 F5");
    }

    #[test]
    fn test_select_voicing_only_returns_defined_voicings() {
        let mut rng = StdRng::seed_from_u64(42);
        for roman in ROMANS {
            let defined = lookup_chord(roman).unwrap().voicings.all();
            for _ in 0..50 {
                let voicing = select_voicing(roman, &mut rng).unwrap();
                assert!(defined.contains(&voicing), "{} produced {}", roman, voicing);
            }
        }
    }

    #[test]
    fn test_select_voicing_covers_all_inversions() {
        let mut rng = StdRng::seed_from_u64(3);
        let defined = lookup_chord("IV").unwrap().voicings.all();
        let mut seen = [false; 3];
        for _ in 0..200 {
            let voicing = select_voicing("IV", &mut rng).unwrap();
            let idx = defined.iter().position(|v| *v == voicing).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| select_voicing("vi", &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }

    #[test]
    fn test_missing_inversion_falls_back_to_root() {
        let root = triad(n(C, 4), n(E, 4), n(G, 4));
        let voicings = InversionVoicings {
            root,
            first: None,
            second: Some(triad(n(G, 3), n(C, 4), n(E, 4))),
        };
        assert_eq!(voicings.get(Inversion::First), root);
        assert_ne!(voicings.get(Inversion::Second), root);
        assert_eq!(voicings.all().len(), 2);
    }

    #[test]
    fn test_name_in_key() {
        let one = lookup_chord("I").unwrap();
        assert_eq!(one.name_in(Key::C), "C Major");
        assert_eq!(one.name_in("D".parse().unwrap()), "D Major");

        let vi = lookup_chord("vi").unwrap();
        assert_eq!(vi.name_in("G".parse().unwrap()), "E minor");

        let vii = lookup_chord("vii").unwrap();
        assert_eq!(vii.name_in("C#".parse().unwrap()), "C diminished");
    }

    #[test]
    fn test_voicing_parse() {
        let voicing: Voicing = "C4 E4 G4".parse().unwrap();
        assert_eq!(voicing, lookup_chord("I").unwrap().notes);

        assert_eq!(
            Voicing::parse(&["C4", "E4"]),
            Err(EarError::InvalidVoicing { found: 2 })
        );
        assert_eq!(
            Voicing::parse(&["C4", "E4", "Q4"]),
            Err(EarError::InvalidPitch("Q4".to_string()))
        );
    }
}
