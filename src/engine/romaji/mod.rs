//! Romaji ↔ kana tables for the built-in Latin transforms.
//!
//! The table is TOML: `[mappings]` drives Latin → kana by greedy longest
//! match, `[reverse]` gives the canonical spelling for kana → Latin.

mod config;
mod convert;
mod trie;

use std::sync::OnceLock;

pub use config::{parse_romaji_toml, RomajiConfig, RomajiConfigError};

use trie::KeyTrie;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct RomajiTable {
    forward: KeyTrie,
    reverse: KeyTrie,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let config = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            RomajiTable::from_config(&config)
        })
    }

    pub fn from_config(config: &RomajiConfig) -> Self {
        RomajiTable {
            forward: KeyTrie::from_map(&config.mappings),
            reverse: KeyTrie::from_map(&config.reverse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::KanaScript;

    #[test]
    fn custom_table_from_config() {
        let config = parse_romaji_toml(
            r#"
[mappings]
ka = "か"
ca = "か"
n = "ん"

[reverse]
"か" = "ca"
"ん" = "n"
"#,
        )
        .unwrap();
        let table = RomajiTable::from_config(&config);
        assert_eq!(table.to_kana("kacan", KanaScript::Hiragana), "かかん");
        assert_eq!(table.to_latin("カカン", KanaScript::Katakana), "cacan");
    }

    #[test]
    fn init_custom_rejects_invalid_table() {
        let err = RomajiTable::init_custom("[mappings]\n".to_string()).unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }
}
