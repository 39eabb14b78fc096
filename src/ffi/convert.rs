use std::ffi::c_char;
use std::path::Path;
use std::ptr;

use rumna_core::Registry;

use super::{ffi_guard, string_into_raw};

/// Romanize `text` with the standard named `standard`. Unknown names use the
/// fallback system. Returns null only for null or non-UTF-8 arguments; free
/// the result with `rumna_string_free`.
#[no_mangle]
pub extern "C" fn rumna_convert(text: *const c_char, standard: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
        str: standard_str = standard,
    );
    string_into_raw(Registry::global().convert(text_str, standard_str))
}

#[no_mangle]
pub extern "C" fn rumna_init_tracing(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir));
}
