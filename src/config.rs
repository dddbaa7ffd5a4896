//! # Game Configuration
//!
//! Optional YAML settings for a game: default key, wave-source settings and a level
//! catalog to use instead of the built-in one. Every field may be left out.
//!
//! ```yaml
//! key: D
//! sound:
//!   waveform: triangle
//!   attack: 0.02
//!   release: 0.5
//!   volume: 0.6
//! levels:
//!   - number: 1
//!     available-chords: [I, IV, V]
//!     description: Primary Chords
//! ```
//!
//! Raw YAML is read into [`RawConfig`], then each part is validated on its way into
//! [`GameConfig`]: the key must be one of the twelve key names, the sound settings
//! must be in range and the levels must satisfy the catalog invariants.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::EarError;
use crate::levels::{LevelCatalog, RawLevel};
use crate::pitch::Key;
use crate::playback::SoundOptions;

/// Configuration as written in YAML
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub key: Option<String>,
    pub sound: Option<SoundOptions>,
    pub levels: Option<Vec<RawLevel>>,
}

/// Validated game settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameConfig {
    pub key: Key,
    pub sound: SoundOptions,
    pub catalog: LevelCatalog,
}

impl GameConfig {
    pub fn from_yaml(source: &str) -> Result<Self, EarError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(source).map_err(|e| EarError::ConfigError(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, EarError> {
        let key = match &raw.key {
            Some(name) => name.parse()?,
            None => Key::default(),
        };

        let sound = raw.sound.unwrap_or_default();
        sound.validate()?;

        let catalog = match raw.levels {
            Some(levels) => LevelCatalog::from_raw(levels)?,
            None => LevelCatalog::builtin(),
        };

        Ok(Self {
            key,
            sound,
            catalog,
        })
    }

    /// Read and validate a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EarError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            EarError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&source)?;
        info!(
            "loaded config from {} (key {}, {} levels)",
            path.display(),
            config.key,
            config.catalog.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Waveform;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_yaml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.key, Key::C);
        assert_eq!(config.catalog, LevelCatalog::builtin());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
key: F#
sound:
  waveform: triangle
  attack: 0.02
  release: 0.5
  volume: 0.6
levels:
  - number: 1
    available-chords: [I, IV, V]
    description: Primary Chords
    questions-per-level: 5
"#;
        let config = GameConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key.to_string(), "F#");
        assert_eq!(config.sound.waveform, Waveform::Triangle);
        assert_eq!(config.sound.volume, 0.6);
        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog.max_score(1), 5);
    }

    #[test]
    fn test_partial_sound_keeps_defaults() {
        let config = GameConfig::from_yaml("sound:\n  waveform: square\n").unwrap();
        assert_eq!(config.sound.waveform, Waveform::Square);
        assert_eq!(config.sound.release, SoundOptions::default().release);
    }

    #[test]
    fn test_invalid_key() {
        assert_eq!(
            GameConfig::from_yaml("key: H"),
            Err(EarError::UnknownKey("H".to_string()))
        );
    }

    #[test]
    fn test_invalid_sound() {
        assert!(matches!(
            GameConfig::from_yaml("sound:\n  volume: 1.5\n"),
            Err(EarError::ConfigError(_))
        ));
        assert!(matches!(
            GameConfig::from_yaml("sound:\n  attack: -1\n"),
            Err(EarError::ConfigError(_))
        ));
        assert!(matches!(
            GameConfig::from_yaml("sound:\n  waveform: noise\n"),
            Err(EarError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_levels() {
        let yaml = r#"
levels:
  - number: 1
    available-chords: [bVII]
"#;
        assert!(matches!(
            GameConfig::from_yaml(yaml),
            Err(EarError::CatalogError { level: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            GameConfig::from_yaml("tempo: 120"),
            Err(EarError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/chordear.yaml"),
            Err(EarError::ConfigError(_))
        ));
    }
}
