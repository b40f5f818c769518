use std::ffi::{c_char, CString};
use std::ptr;

use tracing::debug;

use super::ffi_guard;
use crate::engine::Direction;
use crate::status::StatusCode;
use crate::transliterate::transliterate;

/// Store `status` through `out` when the caller asked for it.
fn report(out: *mut i32, status: StatusCode) {
    if !out.is_null() {
        unsafe { *out = status.0 };
    }
}

/// Transliterate NUL-terminated UTF-8 `input` with transform `id`.
///
/// `direction`: 0 = forward, 1 = reverse. Returns a string to be released
/// with [`lex_translit_free`], or null on failure. The outcome status is
/// written to `status_out` when it is non-null.
#[no_mangle]
pub extern "C" fn lex_translit_utf8(
    id: *const c_char,
    direction: i32,
    input: *const c_char,
    status_out: *mut i32,
) -> *mut c_char {
    let illegal = || {
        report(status_out, StatusCode::ILLEGAL_ARGUMENT_ERROR);
        ptr::null_mut()
    };
    ffi_guard!(illegal();
        str: id_str = id,
        bytes: input_bytes = input,
    );
    let Some(direction) = Direction::from_raw(direction) else {
        return illegal();
    };

    let out = match transliterate(id_str, direction, input_bytes) {
        Ok(out) => out,
        Err(e) => {
            debug!(error = %e, "lex_translit_utf8 failed");
            report(status_out, e.status());
            return ptr::null_mut();
        }
    };
    match out.into_c_string() {
        Ok(cs) => {
            report(status_out, StatusCode::ZERO_ERROR);
            cs.into_raw()
        }
        // A transform emitted U+0000; C cannot represent it.
        Err(_) => {
            report(status_out, StatusCode::INVALID_CHAR_FOUND);
            ptr::null_mut()
        }
    }
}

/// Release a string returned by [`lex_translit_utf8`]. Null is a no-op.
#[no_mangle]
pub extern "C" fn lex_translit_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe { drop(CString::from_raw(ptr)) };
    }
}

/// Static symbolic name of `code`, e.g. `"U_INVALID_ID"`. Never null.
#[no_mangle]
pub extern "C" fn lex_translit_status_name(code: i32) -> *const c_char {
    StatusCode(code).name_cstr().as_ptr()
}
