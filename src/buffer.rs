//! NUL-terminated text buffers and the grow-and-retry fill loop shared by
//! the encoding converters and the transliteration pipeline.
//!
//! Every sizing-sensitive call in this crate writes into a caller-supplied
//! buffer and reports how many units it needed. [`grow_and_fill`] owns the
//! buffer across attempts: it starts at `source_len + 1`, doubles on
//! overflow, and hands back a buffer sized exactly to content + terminator.

use std::ffi::{CString, FromVecWithNulError};
use std::fmt;
use std::ops::Deref;
use std::str::Utf8Error;

use tracing::{debug, warn};

use crate::settings::Settings;
use crate::status::{StatusCode, StatusPolicy};

/// Default ceiling for [`ConvertOptions::max_capacity`], in code units.
pub const DEFAULT_MAX_CAPACITY: usize = 16 * 1024 * 1024;

/// A fixed-width unit of a text encoding. `Default` is the terminator.
pub trait CodeUnit: Copy + Default + Eq + fmt::Debug + 'static {}

impl CodeUnit for u8 {}
impl CodeUnit for u16 {}

/// Length of a terminator-delimited sequence: up to the first NUL, or the
/// whole slice if there is none.
pub fn terminated_len<T: CodeUnit>(units: &[T]) -> usize {
    units
        .iter()
        .position(|&u| u == T::default())
        .unwrap_or(units.len())
}

/// Owned text followed by exactly one NUL. Storage is sized to
/// content + terminator.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer<T: CodeUnit> {
    units: Vec<T>,
}

/// UTF-16 code units.
pub type CodeUnitBuffer = TextBuffer<u16>;
/// UTF-8 bytes.
pub type ByteBuffer = TextBuffer<u8>;

impl<T: CodeUnit> TextBuffer<T> {
    pub fn empty() -> Self {
        Self {
            units: vec![T::default()],
        }
    }

    /// Copy `content` up to its first NUL and terminate it.
    pub fn from_units(content: &[T]) -> Self {
        let len = terminated_len(content);
        let mut units = Vec::with_capacity(len + 1);
        units.extend_from_slice(&content[..len]);
        units.push(T::default());
        Self { units }
    }

    /// Content length, terminator excluded.
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.units[..self.len()]
    }

    pub fn as_slice_with_nul(&self) -> &[T] {
        &self.units
    }

    /// Allocated storage in units.
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    pub fn into_vec(mut self) -> Vec<T> {
        self.units.pop();
        self.units
    }
}

impl ByteBuffer {
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_slice())
    }

    /// Fails only if the content itself contains a NUL.
    pub fn into_c_string(self) -> Result<CString, FromVecWithNulError> {
        CString::from_vec_with_nul(self.units)
    }
}

impl<T: CodeUnit> Deref for TextBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: CodeUnit> fmt::Debug for TextBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len", &self.len())
            .field("units", &self.as_slice())
            .finish()
    }
}

/// Knobs for every buffer-filling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub policy: StatusPolicy,
    /// Largest buffer, in code units, the fill loop may allocate.
    pub max_capacity: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            policy: StatusPolicy::default(),
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl ConvertOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            policy: settings.conversion.status_policy,
            max_capacity: settings.conversion.max_capacity,
        }
    }

    /// Options from the process-wide settings.
    pub fn global() -> Self {
        Self::from_settings(crate::settings::settings())
    }
}

/// Why [`grow_and_fill`] gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// The fill reported a status that aborts under the active policy.
    Status(StatusCode),
    /// Still too small at `limit` units.
    CapacityExceeded { limit: usize },
}

/// Run `fill` into a fresh buffer until its output fits with room for the
/// terminator.
///
/// `fill` receives a zeroed buffer whose length is the current capacity and
/// returns `(required_len, status)`. `BUFFER_OVERFLOW_ERROR`, or any
/// non-failure status with `required_len >= capacity`, triggers a retry at
/// twice the capacity, clamped to `opts.max_capacity`.
pub fn grow_and_fill<T, F>(
    source_len: usize,
    opts: &ConvertOptions,
    mut fill: F,
) -> Result<TextBuffer<T>, FillError>
where
    T: CodeUnit,
    F: FnMut(&mut [T]) -> (usize, StatusCode),
{
    let limit = opts.max_capacity.max(1);
    let mut capacity = source_len.saturating_add(1);

    loop {
        if capacity > limit {
            return Err(FillError::CapacityExceeded { limit });
        }

        let mut units = vec![T::default(); capacity];
        let (len, status) = fill(&mut units);

        let overflow = status == StatusCode::BUFFER_OVERFLOW_ERROR
            || (!status.is_failure() && len >= capacity);
        if overflow {
            debug!(capacity, required = len, "buffer too small, growing");
            if capacity == limit {
                return Err(FillError::CapacityExceeded { limit });
            }
            capacity = capacity.saturating_mul(2).min(limit);
            continue;
        }

        if opts.policy.aborts_on(status) {
            return Err(FillError::Status(status));
        }
        if status.is_warning() {
            warn!(%status, "ignoring warning");
        }

        units.truncate(len + 1);
        units[len] = T::default();
        units.shrink_to_fit();
        return Ok(TextBuffer { units });
    }
}
