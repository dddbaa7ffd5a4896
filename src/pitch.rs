//! # Pitch Types
//!
//! Value types for notes and keys. A note such as `"F#5"` is parsed once into a
//! [`Pitch`] (pitch class + octave) so transposition works on integers instead of
//! re-slicing strings.
//!
//! ## Spelling
//! - Output is always sharp-spelled: `C C# D D# E F F# G G# A A# B`
//! - Input accepts `#` and `b`; flats and edge spellings are canonicalised by pitch
//!   height, so `Eb4` reads as `D#4`, `Cb4` as `B3` and `B#3` as `C4`
//! - Octave numbers follow scientific pitch notation (C4 = middle C = MIDI 60) and may
//!   be any value that fits an `i8`, checked after respelling, so every displayed pitch
//!   parses back to itself
//!
//! ## Keys
//! A [`Key`] is one of the twelve sharp-spelled pitch-class names. Unlike notes,
//! keys are not canonicalised: `"Bb"` is rejected with `EarError::UnknownKey`.
//!
//! ## Example
//! ```rust
//! use chordear::{Key, Pitch};
//!
//! let pitch: Pitch = "Eb4".parse()?;
//! assert_eq!(pitch.to_string(), "D#4");
//! assert_eq!(pitch.midi_number(), 63);
//!
//! let key: Key = "F#".parse()?;
//! assert_eq!(key.semitone_offset(), 6);
//! assert_eq!(key.inverse().to_string(), "F#");
//! # Ok::<(), chordear::EarError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EarError;

/// The twelve pitch classes, in semitone order from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PitchClass {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitones above C (0-11)
    pub const fn semitone(self) -> u8 {
        self as u8
    }

    /// Pitch class for a semitone count, wrapping modulo 12
    pub const fn from_semitone(semitone: u8) -> Self {
        Self::ALL[(semitone % 12) as usize]
    }

    /// Canonical sharp spelling
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Natural note letter to semitone offset from C
fn letter_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// A concrete note: pitch class plus octave (e.g. `C4`, `F#5`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pitch {
    pub class: PitchClass,
    pub octave: i8,
}

impl Pitch {
    pub const fn new(class: PitchClass, octave: i8) -> Self {
        Self { class, octave }
    }

    /// Returns MIDI note number (C4 = 60, middle C)
    pub fn midi_number(&self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.class.semitone() as i32
    }

    /// Pitch for a MIDI-style note number, sharp-spelled.
    ///
    /// Returns `None` when the octave does not fit an `i8`.
    pub fn from_midi(midi: i32) -> Option<Self> {
        let octave = i8::try_from(midi.div_euclid(12) - 1).ok()?;
        Some(Self {
            class: PitchClass::from_semitone(midi.rem_euclid(12) as u8),
            octave,
        })
    }

    /// Equal-tempered frequency in Hz, tuned to A4 = 440 Hz
    pub fn frequency(&self) -> f64 {
        440.0 * 2f64.powf((self.midi_number() - 69) as f64 / 12.0)
    }

    /// Move the pitch up by `semitones`.
    ///
    /// The class wraps modulo 12 and the octave increases once for every time the
    /// addition passes B, so `B4` shifted by 1 is `C5`. The octave saturates at
    /// `i8::MAX`.
    pub fn shifted_up(self, semitones: u8) -> Self {
        let sum = self.class.semitone() as u16 + semitones as u16;
        Self {
            class: PitchClass::from_semitone((sum % 12) as u8),
            octave: self.octave.saturating_add((sum / 12) as i8),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = EarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EarError::InvalidPitch(s.to_string());
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let base = letter_semitone(letter).ok_or_else(invalid)?;

        let rest = chars.as_str();
        let (accidental, octave_text) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };

        if octave_text.starts_with('+') {
            return Err(invalid());
        }
        let octave: i8 = octave_text.parse().map_err(|_| invalid())?;

        // Resolve through MIDI so Cb/B#/E#/Fb land in the right octave
        Pitch::from_midi((octave as i32 + 1) * 12 + base + accidental).ok_or_else(invalid)
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

impl TryFrom<String> for Pitch {
    type Error = EarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Transposition target: one of the twelve pitch classes, defaulting to C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Key(PitchClass);

impl Key {
    /// The identity key
    pub const C: Key = Key(PitchClass::C);

    pub const ALL: [Key; 12] = [
        Key(PitchClass::C),
        Key(PitchClass::CSharp),
        Key(PitchClass::D),
        Key(PitchClass::DSharp),
        Key(PitchClass::E),
        Key(PitchClass::F),
        Key(PitchClass::FSharp),
        Key(PitchClass::G),
        Key(PitchClass::GSharp),
        Key(PitchClass::A),
        Key(PitchClass::ASharp),
        Key(PitchClass::B),
    ];

    pub const fn new(tonic: PitchClass) -> Self {
        Self(tonic)
    }

    pub fn tonic(self) -> PitchClass {
        self.0
    }

    /// Semitones to add when moving from C to this key
    pub fn semitone_offset(self) -> u8 {
        self.0.semitone()
    }

    /// The key whose offset undoes this one modulo the octave
    pub fn inverse(self) -> Key {
        Key(PitchClass::from_semitone((12 - self.semitone_offset()) % 12))
    }

    pub fn is_identity(self) -> bool {
        self == Key::C
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl FromStr for Key {
    type Err = EarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PitchClass::ALL
            .iter()
            .find(|class| class.name() == trimmed)
            .map(|class| Key(*class))
            .ok_or_else(|| EarError::UnknownKey(s.to_string()))
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for Key {
    type Error = EarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
