//! # Error Types
//!
//! This module defines all error types for the chordear core.
//!
//! Chord and key lookups fail loudly: an unknown roman symbol or key name means the
//! caller passed something that did not come from the chord table or the key list.
//! Level lookups are lenient and never produce an error (see `levels`).
//!
//! ## Error Types
//! - `UnknownChord` - Roman symbol not present in the chord table
//! - `UnknownKey` - Key name not one of the twelve recognised pitch classes
//! - `InvalidPitch` - Note name that is not `<letter><accidental?><octave>`
//! - `InvalidVoicing` - Note list that is not exactly three notes long
//! - `CatalogError` - Level catalog violates its invariants
//! - `ConfigError` - YAML configuration could not be read or parsed
//!
//! ## Usage
//! ```rust
//! use chordear::{lookup_chord, EarError};
//!
//! match lookup_chord("blah") {
//!     Ok(chord) => println!("{}", chord.name),
//!     Err(EarError::UnknownChord(symbol)) => eprintln!("no chord named {}", symbol),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EarError {
    /// Roman symbol not in the chord table.
    ///
    /// # Example
    /// ```
    /// # use chordear::EarError;
    /// let err = EarError::UnknownChord("bVII".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord symbol: bVII");
    /// ```
    #[error("Unknown chord symbol: {0}")]
    UnknownChord(String),

    /// Key name not one of `C C# D D# E F F# G G# A A# B`.
    ///
    /// # Example
    /// ```
    /// # use chordear::EarError;
    /// let err = EarError::UnknownKey("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown key: H");
    /// ```
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Invalid pitch name: {0}")]
    InvalidPitch(String),

    /// A voicing was built from a note list of the wrong length.
    #[error("A voicing needs exactly 3 notes, found {found}")]
    InvalidVoicing { found: usize },

    /// Level catalog invariant violation, reported against the offending level number.
    ///
    /// # Example
    /// ```
    /// # use chordear::EarError;
    /// let err = EarError::CatalogError {
    ///     level: 3,
    ///     message: "unknown chord 'bVII' in available-chords".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid level 3: unknown chord 'bVII' in available-chords");
    /// ```
    #[error("Invalid level {level}: {message}")]
    CatalogError { level: u32, message: String },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
