//! Character-level Unicode classification and kana script shifting.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Distance between a hiragana and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Hiragana with a katakana counterpart: ぁ..ゖ plus the iteration marks ゝゞ.
fn has_katakana_form(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309E}').contains(&c)
}

fn has_hiragana_form(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FE}').contains(&c)
}

pub fn to_katakana_char(c: char) -> char {
    if has_katakana_form(c) {
        char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

pub fn to_hiragana_char(c: char) -> char {
    if has_hiragana_form(c) {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars().map(to_katakana_char).collect()
}

pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(to_hiragana_char).collect()
}

/// Which kana script a transform reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaScript {
    Hiragana,
    Katakana,
}

impl KanaScript {
    /// Whether `c` belongs to this script. The prolonged sound mark ー
    /// (U+30FC, technically katakana) counts for both, as in "らーめん".
    pub fn contains(self, c: char) -> bool {
        match self {
            KanaScript::Hiragana => is_hiragana(c) || c == 'ー',
            KanaScript::Katakana => is_katakana(c),
        }
    }

    /// Append hiragana `s` to `out`, rewritten into this script.
    pub fn push_from_hiragana(self, out: &mut String, s: &str) {
        match self {
            KanaScript::Hiragana => out.push_str(s),
            KanaScript::Katakana => out.extend(s.chars().map(to_katakana_char)),
        }
    }
}
