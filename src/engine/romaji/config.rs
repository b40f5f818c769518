use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RomajiConfig {
    /// romaji → hiragana.
    pub mappings: BTreeMap<String, String>,
    /// hiragana → canonical romaji.
    #[serde(default)]
    pub reverse: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("uppercase key: {0}")]
    UppercaseKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("[reverse] {kana} = {romaji:?} does not map back to {kana} through [mappings]")]
    ReverseMismatch { kana: String, romaji: String },
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a romaji table.
pub fn parse_romaji_toml(toml_str: &str) -> Result<RomajiConfig, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if !key.is_ascii() {
            return Err(RomajiConfigError::NonAsciiKey(key.clone()));
        }
        // Input is lowercased before lookup, so uppercase keys never match.
        if key.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(RomajiConfigError::UppercaseKey(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
    }

    for (kana, romaji) in &config.reverse {
        if romaji.is_empty() {
            return Err(RomajiConfigError::EmptyValue(kana.clone()));
        }
        if config.mappings.get(romaji) != Some(kana) {
            return Err(RomajiConfigError::ReverseMismatch {
                kana: kana.clone(),
                romaji: romaji.clone(),
            });
        }
    }

    Ok(config)
}
