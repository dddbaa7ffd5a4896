//! # Level Catalog
//!
//! An ordered list of difficulty tiers. Each level names the chords a question may
//! draw from, how many chords a question plays, and how many questions make up the
//! level.
//!
//! ## Lookups
//! Level lookups are lenient: an unknown level number yields `None` from
//! [`LevelCatalog::get_level`] and `0` from [`LevelCatalog::max_score`], so callers can
//! probe for "is there a level after this one?" without handling an error.
//!
//! ## Catalog Invariants
//! Checked by [`LevelCatalog::new`] and everything that loads a catalog from YAML:
//! - at least one level
//! - level numbers strictly ascending (and therefore unique)
//! - every `available-chords` entry exists in the chord table, listed once
//! - `questions-per-level >= 1` and `chords-per-question >= 1`
//!
//! ## YAML Schema
//! ```yaml
//! - number: 1
//!   available-chords: [I, IV, V]
//!   description: Primary Chords (I, IV, V)
//!   questions-per-level: 10   # optional, defaults to 10
//!   chords-per-question: 2    # optional, defaults to 2
//! ```
//!
//! ## Example
//! ```rust
//! use chordear::{get_level, get_max_score};
//!
//! assert_eq!(get_max_score(1), 10);
//! assert_eq!(get_max_score(999), 0);
//! assert!(get_level(5).unwrap().contains_chord("vii"));
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use log::info;
use serde::{Deserialize, Serialize};

use crate::chords::lookup_chord;
use crate::error::EarError;
use crate::scoring::CORRECT_POINTS;

/// Questions per level when a catalog entry leaves it out
pub const DEFAULT_QUESTIONS_PER_LEVEL: u32 = 10;
/// Chords per question when a catalog entry leaves it out
pub const DEFAULT_CHORDS_PER_QUESTION: u32 = 2;

/// A level as written in YAML, before validation
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawLevel {
    pub number: u32,
    pub available_chords: Vec<String>,
    pub description: Option<String>,
    pub questions_per_level: Option<u32>,
    pub chords_per_question: Option<u32>,
}

impl From<RawLevel> for Level {
    fn from(raw: RawLevel) -> Self {
        Level {
            number: raw.number,
            available_chords: raw.available_chords,
            description: raw.description.unwrap_or_default(),
            questions_per_level: raw.questions_per_level.unwrap_or(DEFAULT_QUESTIONS_PER_LEVEL),
            chords_per_question: raw.chords_per_question.unwrap_or(DEFAULT_CHORDS_PER_QUESTION),
        }
    }
}

/// One difficulty tier
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub number: u32,
    pub available_chords: Vec<String>,
    pub description: String,
    pub questions_per_level: u32,
    pub chords_per_question: u32,
}

impl Level {
    fn new(
        number: u32,
        available_chords: &[&str],
        description: &str,
        chords_per_question: u32,
    ) -> Self {
        Self {
            number,
            available_chords: available_chords.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
            questions_per_level: DEFAULT_QUESTIONS_PER_LEVEL,
            chords_per_question,
        }
    }

    /// Highest score reachable in this level: every question answered correctly
    pub fn max_score(&self) -> u32 {
        self.questions_per_level * CORRECT_POINTS as u32
    }

    pub fn contains_chord(&self, roman: &str) -> bool {
        self.available_chords.iter().any(|c| c == roman)
    }

    fn validate(&self) -> Result<(), EarError> {
        let fail = |message: String| EarError::CatalogError {
            level: self.number,
            message,
        };

        if self.questions_per_level == 0 {
            return Err(fail("questions-per-level must be at least 1".to_string()));
        }
        if self.chords_per_question == 0 {
            return Err(fail("chords-per-question must be at least 1".to_string()));
        }
        if self.available_chords.is_empty() {
            return Err(fail("available-chords is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for roman in &self.available_chords {
            if lookup_chord(roman).is_err() {
                return Err(fail(format!("unknown chord '{}' in available-chords", roman)));
            }
            if !seen.insert(roman.as_str()) {
                return Err(fail(format!("chord '{}' listed more than once", roman)));
            }
        }
        Ok(())
    }
}

/// Ordered, validated list of levels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, checking every invariant listed in the module docs
    pub fn new(levels: Vec<Level>) -> Result<Self, EarError> {
        if levels.is_empty() {
            return Err(EarError::ConfigError("level catalog has no levels".to_string()));
        }

        let mut previous: Option<u32> = None;
        for level in &levels {
            if let Some(prev) = previous {
                if level.number <= prev {
                    return Err(EarError::CatalogError {
                        level: level.number,
                        message: format!(
                            "level numbers must be unique and ascending (follows level {})",
                            prev
                        ),
                    });
                }
            }
            level.validate()?;
            previous = Some(level.number);
        }

        Ok(Self { levels })
    }

    pub fn from_raw(raw: Vec<RawLevel>) -> Result<Self, EarError> {
        Self::new(raw.into_iter().map(Level::from).collect())
    }

    /// Parse and validate a YAML list of levels
    pub fn from_yaml(source: &str) -> Result<Self, EarError> {
        let raw: Vec<RawLevel> =
            serde_yaml::from_str(source).map_err(|e| EarError::ConfigError(e.to_string()))?;
        let catalog = Self::from_raw(raw)?;
        info!("loaded level catalog with {} levels", catalog.len());
        Ok(catalog)
    }

    /// The nine-level curriculum shipped with the game
    pub fn builtin() -> Self {
        const PRIMARY: &[&str] = &["I", "IV", "V"];
        const DIATONIC: &[&str] = &["I", "ii", "iii", "IV", "V", "vi", "vii"];
        const DIM: &str = "All Major/Minor Chords + vii dim";

        let mut levels = vec![
            Level::new(1, PRIMARY, "Primary Chords (I, IV, V)", 2),
            Level::new(2, &["I", "IV", "V", "vi"], "Primary Chords + vi", 2),
            Level::new(3, &["I", "ii", "IV", "V", "vi"], "Primary Chords + ii, vi", 2),
            Level::new(4, &["I", "ii", "iii", "IV", "V", "vi"], "All Major/Minor Chords", 2),
        ];
        // Levels 5-9 use the full vocabulary with one more chord per question each step
        levels.extend((5..=9).map(|number| Level::new(number, DIATONIC, DIM, number - 2)));

        Self { levels }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get_level(&self, number: u32) -> Option<&Level> {
        self.levels.iter().find(|level| level.number == number)
    }

    /// `questions_per_level * CORRECT_POINTS`, or `0` for an unknown level
    pub fn max_score(&self, number: u32) -> u32 {
        self.get_level(number).map_or(0, Level::max_score)
    }

    /// The level after `number` in catalog order
    pub fn next_level(&self, number: u32) -> Option<&Level> {
        self.levels.iter().find(|level| level.number > number)
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Shared read-only built-in catalog
pub fn builtin_catalog() -> &'static LevelCatalog {
    static CATALOG: OnceLock<LevelCatalog> = OnceLock::new();
    CATALOG.get_or_init(LevelCatalog::builtin)
}

/// Level lookup against the built-in catalog
pub fn get_level(number: u32) -> Option<&'static Level> {
    builtin_catalog().get_level(number)
}

/// Maximum score for a built-in level, `0` when the level does not exist
pub fn get_max_score(number: u32) -> u32 {
    builtin_catalog().max_score(number)
}
