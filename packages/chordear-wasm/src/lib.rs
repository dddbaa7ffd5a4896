use chordear::{EarError, GameConfig, Key, Voicing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct JsError {
    message: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Question<'a> {
    question: &'a chordear::ChordProgression,
    playback: &'a chordear::playback::PlaybackData,
    max_score: u32,
}

fn error_to_js_error(e: EarError) -> JsError {
    let message = e.to_string();
    match e {
        EarError::UnknownChord(_) => JsError { message, kind: "unknown-chord", level: None },
        EarError::UnknownKey(_) => JsError { message, kind: "unknown-key", level: None },
        EarError::InvalidPitch(_) | EarError::InvalidVoicing { .. } => {
            JsError { message, kind: "invalid-notes", level: None }
        }
        EarError::CatalogError { level, .. } => JsError { message, kind: "catalog", level: Some(level) },
        EarError::ConfigError(_) => JsError { message, kind: "config", level: None },
    }
}

fn to_js(e: EarError) -> JsValue {
    let error = error_to_js_error(e);
    JsValue::from_str(&serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn load_config(config_yaml: Option<String>) -> Result<GameConfig, JsValue> {
    match config_yaml {
        Some(yaml) => GameConfig::from_yaml(&yaml).map_err(to_js),
        None => Ok(GameConfig::default()),
    }
}

/// Chord table as a JSON array
#[wasm_bindgen]
pub fn chord_table() -> Result<String, JsValue> {
    to_json(&chordear::chord_table())
}

/// Level catalog as a JSON array, from YAML config or the built-in curriculum
#[wasm_bindgen]
pub fn levels(config_yaml: Option<String>) -> Result<String, JsValue> {
    let config = load_config(config_yaml)?;
    to_json(&config.catalog)
}

/// Maximum score for a built-in level, 0 when the level does not exist
#[wasm_bindgen]
pub fn max_score(level: u32) -> u32 {
    chordear::get_max_score(level)
}

#[wasm_bindgen]
pub fn score_for(correct: u32, wrong: u32) -> i32 {
    chordear::score_for(correct, wrong)
}

/// Random inversion of a chord, as a JSON array of note names
#[wasm_bindgen]
pub fn random_voicing(roman: &str, key: Option<String>) -> Result<String, JsValue> {
    let voicing = chordear::random_voicing(roman).map_err(to_js)?;
    let voicing = match key {
        Some(name) => chordear::transpose_named(&voicing, &name).map_err(to_js)?,
        None => voicing,
    };
    to_json(&voicing)
}

/// Transpose three key-of-C note names into `key`
#[wasm_bindgen]
pub fn transpose(notes: Vec<String>, key: &str) -> Result<String, JsValue> {
    let voicing = Voicing::parse(&notes[..]).map_err(to_js)?;
    let transposed = chordear::transpose_named(&voicing, key).map_err(to_js)?;
    to_json(&transposed)
}

/// Generate a question with playback data
///
/// Pass `seed` to replay a question; without it the browser's random source is used.
#[wasm_bindgen]
pub fn generate_question(
    level: u32,
    key: Option<String>,
    seed: Option<u64>,
    config_yaml: Option<String>,
) -> Result<String, JsValue> {
    let config = load_config(config_yaml)?;
    let key = key
        .map(|name| name.parse::<Key>())
        .transpose()
        .map_err(to_js)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (question, playback) =
        chordear::play_question(&config, level, key, &mut rng).map_err(to_js)?;
    to_json(&Question {
        question: &question,
        playback: &playback,
        max_score: config.catalog.max_score(level),
    })
}
