//! C ABI over `rumna-core` for editor front ends.
//!
//! The host picks a standard by name and hands over already-decoded UTF-8
//! text; file handling stays on the host side.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
pub mod trace_init;

pub use ffi::*;
pub use rumna_core::{Registry, Transliterate};

use std::ffi::c_char;

#[no_mangle]
pub extern "C" fn rumna_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}
