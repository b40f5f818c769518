use std::fmt;

use crate::engine::Direction;
use crate::status::StatusCode;

/// Where in a transliteration call an error was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// UTF-8 input to UTF-16 code units.
    DecodeInput,
    OpenInstance,
    ApplyInstance,
    /// UTF-16 code units back to UTF-8.
    EncodeOutput,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::DecodeInput => "decode_input",
            Stage::OpenInstance => "open_instance",
            Stage::ApplyInstance => "apply_instance",
            Stage::EncodeOutput => "encode_output",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslitError {
    #[error("{stage}: malformed text: {status}")]
    Encoding { stage: Stage, status: StatusCode },

    #[error("{stage}: cannot open transliterator {id:?} ({direction}): {status}")]
    EngineOpen {
        stage: Stage,
        id: String,
        direction: Direction,
        status: StatusCode,
    },

    #[error("{stage}: transliteration failed: {status}")]
    EngineApply { stage: Stage, status: StatusCode },

    #[error("{stage}: output does not fit in {limit} code units")]
    CapacityExceeded { stage: Stage, limit: usize },
}

impl TranslitError {
    pub fn stage(&self) -> Stage {
        match self {
            TranslitError::Encoding { stage, .. }
            | TranslitError::EngineOpen { stage, .. }
            | TranslitError::EngineApply { stage, .. }
            | TranslitError::CapacityExceeded { stage, .. } => *stage,
        }
    }

    /// The engine status that caused the failure, unchanged.
    ///
    /// `CapacityExceeded` has no engine status of its own and reports
    /// `MEMORY_ALLOCATION_ERROR`.
    pub fn status(&self) -> StatusCode {
        match self {
            TranslitError::Encoding { status, .. }
            | TranslitError::EngineOpen { status, .. }
            | TranslitError::EngineApply { status, .. } => *status,
            TranslitError::CapacityExceeded { .. } => StatusCode::MEMORY_ALLOCATION_ERROR,
        }
    }
}
