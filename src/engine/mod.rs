//! The transliteration engine seam.
//!
//! The pipeline only knows the [`Engine`] contract: open an instance by ID
//! and direction, rewrite a UTF-16 span in place, close the instance.
//! [`BuiltinEngine`] is the implementation shipped with the crate.

mod builtin;
pub mod codec;
pub mod romaji;

use std::fmt;

pub use builtin::{BuiltinEngine, BuiltinInstance};

use crate::status::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// From the C ABI value: 0 = forward, 1 = reverse.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Direction::Forward),
            1 => Some(Direction::Reverse),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        })
    }
}

/// An instance-based transliteration engine.
///
/// Every opened instance must be handed back to [`close`](Engine::close)
/// exactly once.
pub trait Engine {
    type Instance;

    fn open(&self, id: &str, direction: Direction) -> Result<Self::Instance, StatusCode>;

    /// Transliterate `text[start..*limit]` in place.
    ///
    /// `text.len()` is the capacity and `text[..*text_len]` the current
    /// content. On return `*text_len` is the new content length and `*limit`
    /// the end of the rewritten span. If the result needs more than the
    /// capacity, returns `BUFFER_OVERFLOW_ERROR` with `*text_len` set to the
    /// required length and the buffer contents unspecified.
    fn transliterate(
        &self,
        instance: &Self::Instance,
        text: &mut [u16],
        text_len: &mut usize,
        start: usize,
        limit: &mut usize,
    ) -> StatusCode;

    fn close(&self, instance: Self::Instance);
}
