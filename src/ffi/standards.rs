use std::ffi::{c_char, CString};
use std::ptr;
use std::sync::OnceLock;

use rumna_core::{Registry, Transliterate};

use super::ffi_guard;

/// Registry names as C strings, built once alongside the registry.
fn c_names() -> &'static [CString] {
    static NAMES: OnceLock<Vec<CString>> = OnceLock::new();
    NAMES.get_or_init(|| {
        Registry::global()
            .names()
            .filter_map(|n| CString::new(n).ok())
            .collect()
    })
}

#[no_mangle]
pub extern "C" fn rumna_standards_count() -> u32 {
    c_names().len() as u32
}

/// Name at `index` in registration order, or null when out of range.
/// The pointer stays valid for the life of the process.
#[no_mangle]
pub extern "C" fn rumna_standard_name(index: u32) -> *const c_char {
    c_names()
        .get(index as usize)
        .map_or(ptr::null(), |n| n.as_ptr())
}

/// Whether the system `name` resolves to does real work (the external
/// system may be missing and pass text through).
#[no_mangle]
pub extern "C" fn rumna_standard_available(name: *const c_char) -> bool {
    ffi_guard!(false;
        str: name_str = name,
    );
    Registry::global().resolve(name_str).is_available()
}

/// Replace the embedded standards tables. Must precede any other call.
/// Returns 0 on success, -1 on invalid TOML, -2 if already initialized.
#[no_mangle]
pub extern "C" fn rumna_init_standards(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match Registry::init_custom(toml_str.to_string()) {
        Ok(()) => 0,
        Err(rumna_core::standard::StandardsConfigError::AlreadyInitialized) => -2,
        Err(_) => -1,
    }
}
