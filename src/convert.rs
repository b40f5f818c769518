//! UTF-8 ↔ UTF-16 converters built on [`grow_and_fill`].

use crate::buffer::{
    grow_and_fill, terminated_len, ByteBuffer, CodeUnitBuffer, ConvertOptions, FillError,
};
use crate::engine::codec;
use crate::error::{Stage, TranslitError};

/// Decode NUL-terminated UTF-8 into an owned, terminated UTF-16 buffer.
///
/// Input is read up to its first NUL (or the end of the slice).
pub fn decode_utf8_to_code_units(
    bytes: &[u8],
    opts: &ConvertOptions,
) -> Result<CodeUnitBuffer, TranslitError> {
    let src = &bytes[..terminated_len(bytes)];
    grow_and_fill(src.len(), opts, |dest| codec::str_from_utf8(dest, src))
        .map_err(|e| encoding_error(Stage::DecodeInput, e))
}

/// Encode NUL-terminated UTF-16 into an owned, terminated UTF-8 buffer.
pub fn encode_code_units_to_utf8(
    units: &[u16],
    opts: &ConvertOptions,
) -> Result<ByteBuffer, TranslitError> {
    let src = &units[..terminated_len(units)];
    grow_and_fill(src.len(), opts, |dest| codec::str_to_utf8(dest, src))
        .map_err(|e| encoding_error(Stage::EncodeOutput, e))
}

fn encoding_error(stage: Stage, e: FillError) -> TranslitError {
    match e {
        FillError::Status(status) => TranslitError::Encoding { stage, status },
        FillError::CapacityExceeded { limit } => TranslitError::CapacityExceeded { stage, limit },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::status::StatusCode;

    fn opts() -> ConvertOptions {
        ConvertOptions::default()
    }

    #[test]
    fn decode_ascii() {
        let buf = decode_utf8_to_code_units(b"Compyutaa", &opts()).unwrap();
        let expected: Vec<u16> = "Compyutaa".encode_utf16().collect();
        assert_eq!(buf.as_slice(), expected.as_slice());
        assert_eq!(buf.as_slice_with_nul().last(), Some(&0));
        assert_eq!(buf.capacity(), expected.len() + 1);
    }

    #[test]
    fn decode_empty() {
        let buf = decode_utf8_to_code_units(b"", &opts()).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.as_slice_with_nul(), &[0]);
    }

    #[test]
    fn decode_reads_up_to_nul() {
        let buf = decode_utf8_to_code_units(b"ka\0na", &opts()).unwrap();
        assert_eq!(buf.as_slice(), &[0x6B, 0x61]);
    }

    #[test]
    fn decode_invalid_utf8() {
        let err = decode_utf8_to_code_units(b"ab\xC0\xAF", &opts()).unwrap_err();
        assert_eq!(
            err,
            TranslitError::Encoding {
                stage: Stage::DecodeInput,
                status: StatusCode::INVALID_CHAR_FOUND,
            }
        );
    }

    #[test]
    fn encode_grows_for_multibyte_output() {
        // 3 code units become 9 bytes: first guess (4) must grow twice.
        let units: Vec<u16> = "カタカ".encode_utf16().collect();
        let buf = encode_code_units_to_utf8(&units, &opts()).unwrap();
        assert_eq!(buf.to_str().unwrap(), "カタカ");
        assert_eq!(buf.capacity(), 10);
    }

    #[test]
    fn encode_unpaired_surrogate() {
        let err = encode_code_units_to_utf8(&[0xDBFF], &opts()).unwrap_err();
        assert_eq!(err.stage(), Stage::EncodeOutput);
        assert_eq!(err.status(), StatusCode::INVALID_CHAR_FOUND);
    }

    #[test]
    fn encode_respects_capacity_ceiling() {
        let units: Vec<u16> = "アイウエオ".encode_utf16().collect();
        let small = ConvertOptions {
            max_capacity: 8,
            ..ConvertOptions::default()
        };
        let err = encode_code_units_to_utf8(&units, &small).unwrap_err();
        assert_eq!(
            err,
            TranslitError::CapacityExceeded {
                stage: Stage::EncodeOutput,
                limit: 8,
            }
        );
    }

    proptest! {
        #[test]
        fn round_trip_is_byte_identical(s in "[^\\x00]*") {
            let units = decode_utf8_to_code_units(s.as_bytes(), &opts()).unwrap();
            let bytes = encode_code_units_to_utf8(&units, &opts()).unwrap();
            prop_assert_eq!(bytes.as_slice(), s.as_bytes());
            prop_assert_eq!(bytes.as_slice_with_nul().len(), s.len() + 1);
        }

        #[test]
        fn decode_matches_std(s in "[^\\x00]{0,64}") {
            let units = decode_utf8_to_code_units(s.as_bytes(), &opts()).unwrap();
            let expected: Vec<u16> = s.encode_utf16().collect();
            prop_assert_eq!(units.as_slice(), expected.as_slice());
        }
    }
}
