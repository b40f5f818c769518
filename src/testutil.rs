//! Shared test fixtures: a scripted [`Engine`] that counts its calls.
#![cfg(test)]

use std::cell::{Cell, RefCell};

use crate::engine::codec;
use crate::engine::{Direction, Engine};
use crate::status::StatusCode;

/// Replaces the whole span with `output` (or leaves it unchanged), and
/// records every open/apply/close.
#[derive(Default)]
pub struct StubEngine {
    pub open_status: Option<StatusCode>,
    pub apply_status: Option<StatusCode>,
    pub output: Option<Vec<u16>>,
    pub opens: Cell<usize>,
    pub applies: Cell<usize>,
    pub closes: Cell<usize>,
    /// Capacity seen by each apply attempt.
    pub capacities: RefCell<Vec<usize>>,
}

#[derive(Debug)]
pub struct StubInstance;

impl StubEngine {
    pub fn producing(output: &str) -> Self {
        Self {
            output: Some(output.encode_utf16().collect()),
            ..Default::default()
        }
    }

    pub fn failing_open(status: StatusCode) -> Self {
        Self {
            open_status: Some(status),
            ..Default::default()
        }
    }

    pub fn failing_apply(status: StatusCode) -> Self {
        Self {
            apply_status: Some(status),
            ..Default::default()
        }
    }

    /// Every opened instance was closed.
    pub fn balanced(&self) -> bool {
        self.opens.get() == self.closes.get()
    }
}

impl Engine for StubEngine {
    type Instance = StubInstance;

    fn open(&self, _id: &str, _direction: Direction) -> Result<StubInstance, StatusCode> {
        if let Some(status) = self.open_status {
            return Err(status);
        }
        self.opens.set(self.opens.get() + 1);
        Ok(StubInstance)
    }

    fn transliterate(
        &self,
        _instance: &StubInstance,
        text: &mut [u16],
        text_len: &mut usize,
        start: usize,
        limit: &mut usize,
    ) -> StatusCode {
        self.applies.set(self.applies.get() + 1);
        self.capacities.borrow_mut().push(text.len());
        if let Some(status) = self.apply_status {
            return status;
        }

        let replacement = match &self.output {
            Some(out) => out.clone(),
            None => text[start..*limit].to_vec(),
        };
        let new_limit = start + replacement.len();
        let new_len = new_limit + (*text_len - *limit);
        if new_len > text.len() {
            *text_len = new_len;
            return StatusCode::BUFFER_OVERFLOW_ERROR;
        }
        text.copy_within(*limit..*text_len, new_limit);
        text[start..new_limit].copy_from_slice(&replacement);
        *limit = new_limit;
        *text_len = new_len;
        codec::terminate(text, new_len)
    }

    fn close(&self, _instance: StubInstance) {
        self.closes.set(self.closes.get() + 1);
    }
}
