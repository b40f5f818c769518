use tracing::debug;

use super::codec;
use super::romaji::RomajiTable;
use super::{Direction, Engine};
use crate::status::StatusCode;
use crate::unicode::{hiragana_to_katakana, katakana_to_hiragana, KanaScript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    LatinToKana(KanaScript),
    KanaToLatin(KanaScript),
    HiraganaToKatakana,
    KatakanaToHiragana,
    Null,
}

impl Transform {
    fn apply(self, text: &str) -> String {
        match self {
            Transform::LatinToKana(script) => RomajiTable::global().to_kana(text, script),
            Transform::KanaToLatin(script) => RomajiTable::global().to_latin(text, script),
            Transform::HiraganaToKatakana => hiragana_to_katakana(text),
            Transform::KatakanaToHiragana => katakana_to_hiragana(text),
            Transform::Null => text.to_string(),
        }
    }
}

/// `(id, forward, reverse)`.
const REGISTRY: &[(&str, Transform, Transform)] = &[
    (
        "Latin-Hiragana",
        Transform::LatinToKana(KanaScript::Hiragana),
        Transform::KanaToLatin(KanaScript::Hiragana),
    ),
    (
        "Latin-Katakana",
        Transform::LatinToKana(KanaScript::Katakana),
        Transform::KanaToLatin(KanaScript::Katakana),
    ),
    (
        "Hiragana-Katakana",
        Transform::HiraganaToKatakana,
        Transform::KatakanaToHiragana,
    ),
    ("Any-Null", Transform::Null, Transform::Null),
];

/// Resolve `Source-Target` (ASCII case-insensitive). The inverse spelling
/// `Target-Source` is accepted and swaps the directions.
fn resolve(id: &str, direction: Direction) -> Option<(&'static str, Transform)> {
    let (source, target) = id.trim().split_once('-')?;
    for &(name, forward, reverse) in REGISTRY {
        let Some((s, t)) = name.split_once('-') else {
            continue;
        };
        let (fwd, rev) = if s.eq_ignore_ascii_case(source) && t.eq_ignore_ascii_case(target) {
            (forward, reverse)
        } else if t.eq_ignore_ascii_case(source) && s.eq_ignore_ascii_case(target) {
            (reverse, forward)
        } else {
            continue;
        };
        let transform = match direction {
            Direction::Forward => fwd,
            Direction::Reverse => rev,
        };
        return Some((name, transform));
    }
    None
}

/// Table-driven engine for Japanese script transforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEngine;

/// An opened built-in transform.
#[derive(Debug)]
pub struct BuiltinInstance {
    id: &'static str,
    direction: Direction,
    transform: Transform,
}

impl BuiltinInstance {
    /// Canonical ID of the registered transform.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl BuiltinEngine {
    /// Canonical IDs this engine can open.
    pub fn available_ids() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|&(name, _, _)| name)
    }
}

impl Engine for BuiltinEngine {
    type Instance = BuiltinInstance;

    fn open(&self, id: &str, direction: Direction) -> Result<BuiltinInstance, StatusCode> {
        let Some((name, transform)) = resolve(id, direction) else {
            debug!(id, %direction, "unknown transliterator");
            return Err(StatusCode::INVALID_ID);
        };
        debug!(id = name, %direction, "opened transliterator");
        Ok(BuiltinInstance {
            id: name,
            direction,
            transform,
        })
    }

    fn transliterate(
        &self,
        instance: &BuiltinInstance,
        text: &mut [u16],
        text_len: &mut usize,
        start: usize,
        limit: &mut usize,
    ) -> StatusCode {
        let capacity = text.len();
        if start > *limit || *limit > *text_len || *text_len > capacity {
            return StatusCode::ILLEGAL_ARGUMENT_ERROR;
        }

        let Ok(span) = String::from_utf16(&text[start..*limit]) else {
            return StatusCode::INVALID_CHAR_FOUND;
        };
        let replacement: Vec<u16> = instance.transform.apply(&span).encode_utf16().collect();

        let new_limit = start + replacement.len();
        let new_len = new_limit + (*text_len - *limit);
        if new_len > capacity {
            *text_len = new_len;
            return StatusCode::BUFFER_OVERFLOW_ERROR;
        }

        text.copy_within(*limit..*text_len, new_limit);
        text[start..new_limit].copy_from_slice(&replacement);
        *limit = new_limit;
        *text_len = new_len;
        codec::terminate(text, new_len)
    }

    fn close(&self, instance: BuiltinInstance) {
        debug!(id = instance.id, direction = %instance.direction, "closed transliterator");
    }
}
