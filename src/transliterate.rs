//! UTF-8 in, UTF-8 out: decode → pipeline → encode.

use tracing::{debug, debug_span};

use crate::buffer::{ByteBuffer, ConvertOptions};
use crate::convert::{decode_utf8_to_code_units, encode_code_units_to_utf8};
use crate::engine::{BuiltinEngine, Direction, Engine};
use crate::error::TranslitError;
use crate::pipeline::transliterate_units;

/// Transliterate NUL-terminated UTF-8 with the built-in engine and the
/// process-wide settings.
///
/// ```
/// use lex_translit::{transliterate, Direction};
///
/// let out = transliterate("Latin-Katakana", Direction::Forward, b"Compyutaa").unwrap();
/// assert_eq!(out.to_str().unwrap(), "コンピュタア");
/// ```
pub fn transliterate(
    id: &str,
    direction: Direction,
    input: &[u8],
) -> Result<ByteBuffer, TranslitError> {
    transliterate_with(&BuiltinEngine, &ConvertOptions::global(), id, direction, input)
}

/// [`transliterate`] with an explicit engine and options.
pub fn transliterate_with<E: Engine>(
    engine: &E,
    opts: &ConvertOptions,
    id: &str,
    direction: Direction,
    input: &[u8],
) -> Result<ByteBuffer, TranslitError> {
    let _span = debug_span!("transliterate", id, %direction, input_len = input.len()).entered();
    let result = decode_utf8_to_code_units(input, opts)
        .and_then(|units| transliterate_units(engine, opts, id, direction, &units))
        .and_then(|units| encode_code_units_to_utf8(&units, opts));
    match &result {
        Ok(out) => debug!(output_len = out.len(), "done"),
        Err(e) => debug!(stage = %e.stage(), status = %e.status(), "failed"),
    }
    result
}

/// Convenience wrapper over [`transliterate`] for Rust strings.
///
/// Input after an embedded NUL is ignored.
pub fn transliterate_str(
    id: &str,
    direction: Direction,
    input: &str,
) -> Result<String, TranslitError> {
    let out = transliterate(id, direction, input.as_bytes())?;
    // Encoded from well-formed UTF-16, so always valid.
    Ok(String::from_utf8_lossy(out.as_slice()).into_owned())
}
