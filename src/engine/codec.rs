//! UTF-8 / UTF-16 conversion primitives writing into caller-supplied buffers.
//!
//! Both functions follow the ICU `u_strFromUTF8` / `u_strToUTF8` contract:
//! the source is read up to its first NUL, the full required length is
//! always returned, as many whole characters as fit are written, and a NUL
//! is appended only when there is room for it.

use crate::buffer::{terminated_len, CodeUnit};
use crate::status::StatusCode;

/// Convert UTF-8 `src` into UTF-16 `dest`. Returns `(required_len, status)`.
pub fn str_from_utf8(dest: &mut [u16], src: &[u8]) -> (usize, StatusCode) {
    let src = &src[..terminated_len(src)];
    let text = match std::str::from_utf8(src) {
        Ok(text) => text,
        // error_len() is None when the input ends mid-sequence.
        Err(e) if e.error_len().is_none() => return (0, StatusCode::TRUNCATED_CHAR_FOUND),
        Err(_) => return (0, StatusCode::INVALID_CHAR_FOUND),
    };

    let mut scratch = [0u16; 2];
    let mut written = 0;
    let mut required = 0;
    for ch in text.chars() {
        let encoded = ch.encode_utf16(&mut scratch);
        let n = encoded.len();
        if written == required && written + n <= dest.len() {
            dest[written..written + n].copy_from_slice(encoded);
            written += n;
        }
        required += n;
    }
    (required, terminate(dest, required))
}

/// Convert UTF-16 `src` into UTF-8 `dest`. Returns `(required_len, status)`.
///
/// Unpaired surrogates are rejected with `INVALID_CHAR_FOUND`.
pub fn str_to_utf8(dest: &mut [u8], src: &[u16]) -> (usize, StatusCode) {
    let src = &src[..terminated_len(src)];

    let mut scratch = [0u8; 4];
    let mut written = 0;
    let mut required = 0;
    for decoded in char::decode_utf16(src.iter().copied()) {
        let Ok(ch) = decoded else {
            return (0, StatusCode::INVALID_CHAR_FOUND);
        };
        let encoded = ch.encode_utf8(&mut scratch).as_bytes();
        let n = encoded.len();
        if written == required && written + n <= dest.len() {
            dest[written..written + n].copy_from_slice(encoded);
            written += n;
        }
        required += n;
    }
    (required, terminate(dest, required))
}

/// Sizing status for `required` units written into `dest`; writes the
/// terminator when it fits.
pub(crate) fn terminate<T: CodeUnit>(dest: &mut [T], required: usize) -> StatusCode {
    if required > dest.len() {
        StatusCode::BUFFER_OVERFLOW_ERROR
    } else if required == dest.len() {
        StatusCode::STRING_NOT_TERMINATED_WARNING
    } else {
        dest[required] = T::default();
        StatusCode::ZERO_ERROR
    }
}
