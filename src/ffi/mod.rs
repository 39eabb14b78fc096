//! FFI layer – each sub-module exposes one area of the C API.
//!
//! Pointer helpers and the argument-guard macro shared across sub-modules
//! live here.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub mod convert;
pub mod standards;


pub use convert::*;
pub use standards::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand an owned string to the caller, who frees it with `rumna_string_free`.
/// Returns null if `s` contains an interior NUL.
pub(crate) fn string_into_raw(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Early-return guard for FFI arguments.
///
/// `str: name = ptr` binds a `&str` or returns `$on_err` when the pointer is
/// null or not UTF-8.
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

#[no_mangle]
pub extern "C" fn rumna_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
