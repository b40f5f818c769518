// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Text transliteration over a pluggable UTF-16 engine.
//!
//! UTF-8 input is decoded to UTF-16, rewritten by an [`Engine`] instance and
//! encoded back, each step sizing its output with the grow-and-retry loop in
//! [`buffer`]. [`BuiltinEngine`] provides romaji/kana transforms.

pub mod buffer;
pub mod convert;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod pipeline;
pub mod settings;
pub mod status;
pub mod trace_init;
pub mod transliterate;
pub mod unicode;

#[cfg(test)]
mod testutil;

pub use buffer::{ByteBuffer, CodeUnitBuffer, ConvertOptions};
pub use engine::{BuiltinEngine, Direction, Engine};
pub use error::{Stage, TranslitError};
pub use ffi::*;
pub use pipeline::transliterate_units;
pub use status::{StatusCode, StatusPolicy};
pub use transliterate::{transliterate, transliterate_str, transliterate_with};
