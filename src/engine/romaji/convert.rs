use crate::unicode::{to_hiragana_char, KanaScript};

use super::RomajiTable;

const SOKUON: char = 'っ';
const HATSUON: &str = "ん";

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'i' | b'u' | b'e' | b'o')
}

/// Consonants that form sokuon when doubled ("kk" → っk). `n` is excluded:
/// "nn" is ん followed by an n-row kana.
fn is_sokuon_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !is_vowel(b) && b != b'n'
}

/// Consonants っ may be written as by doubling. "mm" reads back as ん
/// (m before a labial), so っ before the m-row keeps its table spelling.
fn doubles_after_sokuon(b: u8) -> bool {
    is_sokuon_consonant(b) && b != b'm'
}

impl RomajiTable {
    /// Latin → kana in `script`. Matching is ASCII case-insensitive;
    /// characters with no mapping are copied unchanged.
    pub fn to_kana(&self, input: &str, script: KanaScript) -> String {
        // ASCII lowercasing keeps byte offsets identical to `input`.
        let lowered = input.to_ascii_lowercase();
        let bytes = lowered.as_bytes();
        let mut out = String::with_capacity(input.len() * 3);
        let mut pos = 0;

        while pos < bytes.len() {
            let b = bytes[pos];
            let next = bytes.get(pos + 1).copied();

            // Hepburn: m before a labial is ん ("compyuta", "tempura").
            if b == b'm' && matches!(next, Some(b'b' | b'm' | b'p')) {
                script.push_from_hiragana(&mut out, HATSUON);
                pos += 1;
                continue;
            }
            if is_sokuon_consonant(b) && next == Some(b) {
                script.push_from_hiragana(&mut out, "っ");
                pos += 1;
                continue;
            }
            if let Some((len, kana)) = self.forward.longest_match(&lowered[pos..]) {
                script.push_from_hiragana(&mut out, kana);
                pos += len;
                continue;
            }

            let Some(ch) = input[pos..].chars().next() else {
                break;
            };
            out.push(ch);
            pos += ch.len_utf8();
        }
        out
    }

    /// Kana in `script` → Latin. Kana of the other script and non-kana
    /// characters are copied unchanged.
    pub fn to_latin(&self, input: &str, script: KanaScript) -> String {
        let mut out = String::with_capacity(input.len());
        let mut run = String::new();
        for c in input.chars() {
            if script.contains(c) {
                run.push(to_hiragana_char(c));
                continue;
            }
            if !run.is_empty() {
                self.romanize(&run, &mut out);
                run.clear();
            }
            out.push(c);
        }
        if !run.is_empty() {
            self.romanize(&run, &mut out);
        }
        out
    }

    /// Romanize a run of hiragana into `out`.
    fn romanize(&self, kana: &str, out: &mut String) {
        let mut sokuon = false;
        let mut pos = 0;

        while pos < kana.len() {
            let rest = &kana[pos..];

            if rest.starts_with(SOKUON) {
                if sokuon {
                    self.push_lone_sokuon(out);
                }
                sokuon = true;
                pos += SOKUON.len_utf8();
                continue;
            }

            let Some((len, romaji)) = self.reverse.longest_match(rest) else {
                if sokuon {
                    self.push_lone_sokuon(out);
                    sokuon = false;
                }
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                out.push(ch);
                pos += ch.len_utf8();
                continue;
            };

            if sokuon {
                match romaji.bytes().next() {
                    Some(b) if doubles_after_sokuon(b) => out.push(b as char),
                    _ => self.push_lone_sokuon(out),
                }
                sokuon = false;
            }
            out.push_str(romaji);
            pos += len;

            // ん before a vowel or y would re-read as a na/nya-row kana.
            if &rest[..len] == HATSUON {
                if let Some((_, following)) = self.reverse.longest_match(&kana[pos..]) {
                    if following
                        .bytes()
                        .next()
                        .is_some_and(|b| is_vowel(b) || b == b'y')
                    {
                        out.push('\'');
                    }
                }
            }
        }

        if sokuon {
            self.push_lone_sokuon(out);
        }
    }

    /// っ with nothing to double: use the table's own spelling, if any.
    fn push_lone_sokuon(&self, out: &mut String) {
        match self.reverse.longest_match("っ") {
            Some((_, romaji)) => out.push_str(romaji),
            None => out.push(SOKUON),
        }
    }
}
