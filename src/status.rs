//! Status codes reported by the transliteration engine and the encoding
//! primitives.
//!
//! Numbering follows ICU's `UErrorCode`: warnings are negative, zero means
//! success, errors are positive. Names and descriptions come from a single
//! table sorted by code, so lookups are a binary search rather than a switch.

use std::ffi::CStr;
use std::fmt;

use serde::Deserialize;

/// A raw engine status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Success,
    Error,
}

/// Which statuses abort a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Any non-zero status aborts, warnings included.
    Strict,
    /// Only error-severity statuses abort; warnings are logged and ignored.
    #[default]
    Lenient,
}

impl StatusPolicy {
    pub fn aborts_on(self, status: StatusCode) -> bool {
        match self {
            StatusPolicy::Strict => status != StatusCode::ZERO_ERROR,
            StatusPolicy::Lenient => status.is_failure(),
        }
    }
}

macro_rules! status_table {
    ($( $name:ident = $value:expr => $desc:literal ; )*) => {
        impl StatusCode {
            $( pub const $name: StatusCode = StatusCode($value); )*
        }

        /// `(code, NUL-terminated name, description)`, sorted by code.
        static TABLE: &[(i32, &str, &str)] = &[
            $( ($value, concat!("U_", stringify!($name), "\0"), $desc), )*
        ];
    };
}

const PARSE_ERROR_START: i32 = 0x10000;
const FMT_PARSE_ERROR_START: i32 = 0x10100;

status_table! {
    USING_FALLBACK_WARNING = -128 => "a resource bundle lookup returned a fallback result";
    USING_DEFAULT_WARNING = -127 => "a resource bundle lookup returned a result from the root locale";
    SAFECLONE_ALLOCATED_WARNING = -126 => "a safe clone operation required allocating memory";
    STATE_OLD_WARNING = -125 => "state data is older than expected";
    STRING_NOT_TERMINATED_WARNING = -124 => "output filled the buffer exactly and is not NUL-terminated";
    SORT_KEY_TOO_SHORT_WARNING = -123 => "the sort key is too short to guarantee uniqueness";
    AMBIGUOUS_ALIAS_WARNING = -122 => "the requested alias maps to more than one item";
    ZERO_ERROR = 0 => "no error";
    ILLEGAL_ARGUMENT_ERROR = 1 => "an argument was out of range or otherwise invalid";
    MISSING_RESOURCE_ERROR = 2 => "the requested resource cannot be found";
    INVALID_FORMAT_ERROR = 3 => "data format is not what was expected";
    FILE_ACCESS_ERROR = 4 => "the requested file cannot be found";
    INTERNAL_PROGRAM_ERROR = 5 => "internal error, indicates a bug";
    MESSAGE_PARSE_ERROR = 6 => "unable to parse a message";
    MEMORY_ALLOCATION_ERROR = 7 => "memory allocation failed or a size limit was reached";
    INDEX_OUTOFBOUNDS_ERROR = 8 => "trying to access an index that is out of bounds";
    PARSE_ERROR = 9 => "generic parse error";
    INVALID_CHAR_FOUND = 10 => "character conversion: unmappable or ill-formed input sequence";
    TRUNCATED_CHAR_FOUND = 11 => "character conversion: incomplete input sequence";
    ILLEGAL_CHAR_FOUND = 12 => "character conversion: illegal input sequence";
    INVALID_TABLE_FORMAT = 13 => "conversion table file found, but corrupted";
    INVALID_TABLE_FILE = 14 => "conversion table file not found";
    BUFFER_OVERFLOW_ERROR = 15 => "a result would not fit in the supplied buffer";
    UNSUPPORTED_ERROR = 16 => "requested operation not supported in current context";
    RESOURCE_TYPE_MISMATCH = 17 => "an operation is requested over a resource that does not support it";
    ILLEGAL_ESCAPE_SEQUENCE = 18 => "ISO-2022 illegal escape sequence";
    UNSUPPORTED_ESCAPE_SEQUENCE = 19 => "ISO-2022 unsupported escape sequence";
    NO_SPACE_AVAILABLE = 20 => "no space available for in-buffer expansion";
    CE_NOT_FOUND_ERROR = 21 => "a collation element was not found";
    PRIMARY_TOO_LONG_ERROR = 22 => "user tried to set a primary that is too long";
    STATE_TOO_OLD_ERROR = 23 => "state data is too old to be used";
    TOO_MANY_ALIASES_ERROR = 24 => "too many aliases in the path to the requested resource";
    ENUM_OUT_OF_SYNC_ERROR = 25 => "an enumeration was modified during iteration";
    INVARIANT_CONVERSION_ERROR = 26 => "unable to convert a character string with invariant conversion";
    INVALID_STATE_ERROR = 27 => "requested operation cannot be completed in the current state";
    COLLATOR_VERSION_MISMATCH = 28 => "collator version is not compatible with the base version";
    USELESS_COLLATOR_ERROR = 29 => "collator is options only and no base is specified";
    NO_WRITE_PERMISSION = 30 => "attempt to modify read-only or constant data";
    BAD_VARIABLE_DEFINITION = PARSE_ERROR_START => "missing '$' or duplicate variable name";
    MALFORMED_RULE = PARSE_ERROR_START + 1 => "elements of a rule are misplaced";
    MALFORMED_SET = PARSE_ERROR_START + 2 => "a set is malformed";
    MALFORMED_SYMBOL_REFERENCE = PARSE_ERROR_START + 3 => "a symbol reference is malformed";
    MALFORMED_UNICODE_ESCAPE = PARSE_ERROR_START + 4 => "a unicode escape pattern is invalid";
    MALFORMED_VARIABLE_DEFINITION = PARSE_ERROR_START + 5 => "a variable definition is invalid";
    MALFORMED_VARIABLE_REFERENCE = PARSE_ERROR_START + 6 => "a variable reference is invalid";
    MISMATCHED_SEGMENT_DELIMITERS = PARSE_ERROR_START + 7 => "segment delimiters do not match";
    MISPLACED_ANCHOR_START = PARSE_ERROR_START + 8 => "a start anchor appears at an illegal position";
    MISPLACED_CURSOR_OFFSET = PARSE_ERROR_START + 9 => "a cursor offset occurs at an illegal position";
    MISPLACED_QUANTIFIER = PARSE_ERROR_START + 10 => "a quantifier appears after a segment close delimiter";
    MISSING_OPERATOR = PARSE_ERROR_START + 11 => "a rule contains no operator";
    MISSING_SEGMENT_CLOSE = PARSE_ERROR_START + 12 => "a segment is not closed";
    MULTIPLE_ANTE_CONTEXTS = PARSE_ERROR_START + 13 => "more than one ante context";
    MULTIPLE_CURSORS = PARSE_ERROR_START + 14 => "more than one cursor";
    MULTIPLE_POST_CONTEXTS = PARSE_ERROR_START + 15 => "more than one post context";
    TRAILING_BACKSLASH = PARSE_ERROR_START + 16 => "a dangling backslash";
    UNDEFINED_SEGMENT_REFERENCE = PARSE_ERROR_START + 17 => "a segment reference does not correspond to a defined segment";
    UNDEFINED_VARIABLE = PARSE_ERROR_START + 18 => "a variable reference does not correspond to a defined variable";
    UNQUOTED_SPECIAL = PARSE_ERROR_START + 19 => "a special character was not quoted or escaped";
    UNTERMINATED_QUOTE = PARSE_ERROR_START + 20 => "a closing single quote is missing";
    RULE_MASK_ERROR = PARSE_ERROR_START + 21 => "a rule is hidden by an earlier more general rule";
    MISPLACED_COMPOUND_FILTER = PARSE_ERROR_START + 22 => "a compound filter is in an invalid location";
    MULTIPLE_COMPOUND_FILTERS = PARSE_ERROR_START + 23 => "more than one compound filter";
    INVALID_RBT_SYNTAX = PARSE_ERROR_START + 24 => "a rule-based transliterator definition is invalid";
    INVALID_PROPERTY_PATTERN = PARSE_ERROR_START + 25 => "a property pattern is invalid";
    MALFORMED_PRAGMA = PARSE_ERROR_START + 26 => "a 'use' pragma is invalid";
    UNCLOSED_SEGMENT = PARSE_ERROR_START + 27 => "a closing ')' is missing";
    ILLEGAL_CHAR_IN_SEGMENT = PARSE_ERROR_START + 28 => "a segment contains an illegal character";
    VARIABLE_RANGE_EXHAUSTED = PARSE_ERROR_START + 29 => "too many stand-ins generated for the given variable range";
    VARIABLE_RANGE_OVERLAP = PARSE_ERROR_START + 30 => "the variable range overlaps characters used in rules";
    ILLEGAL_CHARACTER = PARSE_ERROR_START + 31 => "a special character is outside its allowed context";
    INTERNAL_TRANSLITERATOR_ERROR = PARSE_ERROR_START + 32 => "internal transliterator system error";
    INVALID_ID = PARSE_ERROR_START + 33 => "a transliterator ID is invalid or unknown";
    INVALID_FUNCTION = PARSE_ERROR_START + 34 => "a function reference is invalid";
    UNEXPECTED_TOKEN = FMT_PARSE_ERROR_START => "syntax error in format pattern";
    MULTIPLE_DECIMAL_SEPARATORS = FMT_PARSE_ERROR_START + 1 => "more than one decimal separator in number pattern";
    MULTIPLE_EXPONENTIAL_SYMBOLS = FMT_PARSE_ERROR_START + 2 => "more than one exponent symbol in number pattern";
    MALFORMED_EXPONENTIAL_PATTERN = FMT_PARSE_ERROR_START + 3 => "grouping separator in exponential pattern";
    MULTIPLE_PERCENT_SYMBOLS = FMT_PARSE_ERROR_START + 4 => "more than one percent symbol in number pattern";
    MULTIPLE_PERMILL_SYMBOLS = FMT_PARSE_ERROR_START + 5 => "more than one permill symbol in number pattern";
    MULTIPLE_PAD_SPECIFIERS = FMT_PARSE_ERROR_START + 6 => "more than one pad symbol in number pattern";
    PATTERN_SYNTAX_ERROR = FMT_PARSE_ERROR_START + 7 => "syntax error in format pattern";
    ILLEGAL_PAD_POSITION = FMT_PARSE_ERROR_START + 8 => "pad symbol misplaced in number pattern";
    UNMATCHED_BRACES = FMT_PARSE_ERROR_START + 9 => "braces do not match in message pattern";
    UNSUPPORTED_PROPERTY = FMT_PARSE_ERROR_START + 10 => "unsupported property";
    UNSUPPORTED_ATTRIBUTE = FMT_PARSE_ERROR_START + 11 => "unsupported attribute";
}

const UNKNOWN_NAME: &str = "U_UNKNOWN_STATUS\0";
const UNKNOWN_DESCRIPTION: &str = "unrecognized status code";

impl StatusCode {
    /// True for zero and for warnings.
    pub fn is_success(self) -> bool {
        self.0 <= 0
    }

    pub fn is_failure(self) -> bool {
        self.0 > 0
    }

    pub fn is_warning(self) -> bool {
        self.0 < 0
    }

    pub fn severity(self) -> Severity {
        match self.0 {
            c if c < 0 => Severity::Warning,
            0 => Severity::Success,
            _ => Severity::Error,
        }
    }

    fn entry(self) -> Option<&'static (i32, &'static str, &'static str)> {
        TABLE
            .binary_search_by_key(&self.0, |&(code, _, _)| code)
            .ok()
            .map(|i| &TABLE[i])
    }

    fn raw_name(self) -> &'static str {
        self.entry().map_or(UNKNOWN_NAME, |e| e.1)
    }

    /// Symbolic name, e.g. `"U_INVALID_ID"`.
    pub fn name(self) -> &'static str {
        let raw = self.raw_name();
        &raw[..raw.len() - 1]
    }

    /// Same as [`name`](Self::name), NUL-terminated for C callers.
    pub fn name_cstr(self) -> &'static CStr {
        CStr::from_bytes_with_nul(self.raw_name().as_bytes()).unwrap_or(c"U_UNKNOWN_STATUS")
    }

    pub fn description(self) -> &'static str {
        self.entry().map_or(UNKNOWN_DESCRIPTION, |e| e.2)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for pair in TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} !< {}", pair[0].1, pair[1].1);
        }
    }

    #[test]
    fn names_are_nul_terminated() {
        for &(_, name, _) in TABLE {
            assert!(name.ends_with('\0'));
            assert_eq!(name.find('\0'), Some(name.len() - 1));
        }
    }

    #[test]
    fn severity_ordering() {
        assert_eq!(
            StatusCode::STRING_NOT_TERMINATED_WARNING.severity(),
            Severity::Warning
        );
        assert_eq!(StatusCode::ZERO_ERROR.severity(), Severity::Success);
        assert_eq!(StatusCode::INVALID_ID.severity(), Severity::Error);
        assert!(StatusCode::USING_FALLBACK_WARNING.is_success());
        assert!(!StatusCode::USING_FALLBACK_WARNING.is_failure());
        assert!(StatusCode::BUFFER_OVERFLOW_ERROR.is_failure());
    }

    #[test]
    fn icu_numbering() {
        assert_eq!(StatusCode::BUFFER_OVERFLOW_ERROR.0, 15);
        assert_eq!(StatusCode::STRING_NOT_TERMINATED_WARNING.0, -124);
        assert_eq!(StatusCode::MALFORMED_RULE.0, 0x10001);
        assert_eq!(StatusCode::INVALID_ID.0, 0x10021);
        assert_eq!(StatusCode::UNSUPPORTED_ATTRIBUTE.0, 0x1010B);
    }

    #[test]
    fn names_and_descriptions() {
        assert_eq!(StatusCode::INVALID_ID.name(), "U_INVALID_ID");
        assert_eq!(StatusCode::ZERO_ERROR.name(), "U_ZERO_ERROR");
        assert_eq!(
            StatusCode::BUFFER_OVERFLOW_ERROR.name_cstr(),
            c"U_BUFFER_OVERFLOW_ERROR"
        );
        assert_eq!(StatusCode(12345).name(), "U_UNKNOWN_STATUS");
        assert_eq!(StatusCode(12345).description(), "unrecognized status code");
        assert_eq!(StatusCode::ZERO_ERROR.description(), "no error");
        assert_eq!(
            StatusCode::INVALID_CHAR_FOUND.to_string(),
            "U_INVALID_CHAR_FOUND (10)"
        );
    }

    #[test]
    fn policy_strict_vs_lenient() {
        let warning = StatusCode::USING_DEFAULT_WARNING;
        assert!(StatusPolicy::Strict.aborts_on(warning));
        assert!(!StatusPolicy::Lenient.aborts_on(warning));
        assert!(StatusPolicy::Strict.aborts_on(StatusCode::INVALID_ID));
        assert!(StatusPolicy::Lenient.aborts_on(StatusCode::INVALID_ID));
        assert!(!StatusPolicy::Strict.aborts_on(StatusCode::ZERO_ERROR));
        assert_eq!(StatusPolicy::default(), StatusPolicy::Lenient);
    }
}
