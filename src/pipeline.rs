//! Open → apply → close over UTF-16 code units.
//!
//! An opened instance lives inside an [`InstanceGuard`] and is closed when
//! the guard drops, so every exit from [`transliterate_units`] (success,
//! apply error, unwinding) releases it exactly once.

use tracing::{debug, debug_span};

use crate::buffer::{grow_and_fill, terminated_len, CodeUnitBuffer, ConvertOptions, FillError};
use crate::engine::{Direction, Engine};
use crate::error::{Stage, TranslitError};
use crate::status::StatusCode;

struct InstanceGuard<'e, E: Engine> {
    engine: &'e E,
    /// Taken only by `drop`.
    instance: Option<E::Instance>,
}

impl<E: Engine> Drop for InstanceGuard<'_, E> {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.engine.close(instance);
        }
    }
}

fn open_instance<'e, E: Engine>(
    engine: &'e E,
    id: &str,
    direction: Direction,
) -> Result<InstanceGuard<'e, E>, TranslitError> {
    let _span = debug_span!("open_instance", id, %direction).entered();
    match engine.open(id, direction) {
        Ok(instance) => Ok(InstanceGuard {
            engine,
            instance: Some(instance),
        }),
        Err(status) => {
            debug!(%status, "open failed");
            Err(TranslitError::EngineOpen {
                stage: Stage::OpenInstance,
                id: id.to_string(),
                direction,
                status,
            })
        }
    }
}

fn apply_instance<E: Engine>(
    guard: &InstanceGuard<'_, E>,
    opts: &ConvertOptions,
    src: &[u16],
) -> Result<CodeUnitBuffer, TranslitError> {
    let _span = debug_span!("apply_instance", src_len = src.len()).entered();
    let Some(instance) = guard.instance.as_ref() else {
        return Err(TranslitError::EngineApply {
            stage: Stage::ApplyInstance,
            status: StatusCode::INTERNAL_TRANSLITERATOR_ERROR,
        });
    };
    let result = grow_and_fill(src.len(), opts, |text: &mut [u16]| {
        // Capacity is never below src.len() + 1.
        text[..src.len()].copy_from_slice(src);
        let mut text_len = src.len();
        let mut limit = src.len();
        let status = guard.engine.transliterate(instance, text, &mut text_len, 0, &mut limit);
        (text_len, status)
    });
    result.map_err(|e| {
        let err = match e {
            FillError::Status(status) => TranslitError::EngineApply {
                stage: Stage::ApplyInstance,
                status,
            },
            FillError::CapacityExceeded { limit } => TranslitError::CapacityExceeded {
                stage: Stage::ApplyInstance,
                limit,
            },
        };
        debug!(error = %err, "apply failed");
        err
    })
}

/// Transliterate NUL-terminated UTF-16 `units` with the transform `id`.
///
/// Input is read up to its first NUL. The instance opened for this call is
/// closed before this returns.
pub fn transliterate_units<E: Engine>(
    engine: &E,
    opts: &ConvertOptions,
    id: &str,
    direction: Direction,
    units: &[u16],
) -> Result<CodeUnitBuffer, TranslitError> {
    let src = &units[..terminated_len(units)];
    let guard = open_instance(engine, id, direction)?;
    apply_instance(&guard, opts, src)
}
