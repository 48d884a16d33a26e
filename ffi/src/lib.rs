//! C FFI bindings for quitall-core
//!
//! This crate provides a C-compatible API for launcher hosts. Result items
//! cross the boundary as JSON strings; the host renders them and echoes an
//! item's action payload back on selection.

use libc::{c_char, c_int};
use quitall_core::QuitAllEngine;
use std::ffi::{CStr, CString};
use std::ptr;

/// Opaque handle to the QuitAll engine
pub struct QuitAllHandle {
    engine: QuitAllEngine,
}

// ============================================================================
// Lifecycle Functions
// ============================================================================

/// Create a new QuitAll instance
///
/// Returns a handle that must be freed with `quitall_free`,
/// or null on initialization failure.
#[no_mangle]
pub extern "C" fn quitall_new() -> *mut QuitAllHandle {
    match QuitAllEngine::new() {
        Ok(engine) => Box::into_raw(Box::new(QuitAllHandle { engine })),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a QuitAll instance
#[no_mangle]
pub extern "C" fn quitall_free(handle: *mut QuitAllHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

// ============================================================================
// Query / Selection
// ============================================================================

/// Handle a query event
///
/// Returns the result items as a JSON array string.
/// Must be freed with `quitall_string_free`. Returns null on failure.
#[no_mangle]
pub extern "C" fn quitall_query(handle: *mut QuitAllHandle) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }

    let handle = unsafe { &*handle };
    let items = handle.engine.query();

    match serde_json::to_string(&items)
        .ok()
        .and_then(|json| CString::new(json).ok())
    {
        Some(json) => json.into_raw(),
        None => ptr::null_mut(),
    }
}

/// Handle an item-selection event
///
/// `payload` is the selected item's JSON action payload.
/// Returns 1 when the host should dismiss its UI, 0 otherwise.
#[no_mangle]
pub extern "C" fn quitall_handle_enter(
    handle: *mut QuitAllHandle,
    payload: *const c_char,
) -> c_int {
    if handle.is_null() || payload.is_null() {
        return 0;
    }

    let handle = unsafe { &*handle };
    let payload = match unsafe { CStr::from_ptr(payload) }.to_str() {
        Ok(payload) => payload,
        Err(_) => return 0,
    };

    handle.engine.handle_enter(payload) as c_int
}

// ============================================================================
// Preferences
// ============================================================================

/// Set the comma-separated exclusion list
///
/// Returns 1 on success, 0 on failure.
#[no_mangle]
pub extern "C" fn quitall_set_excluded_apps(
    handle: *mut QuitAllHandle,
    excluded_apps: *const c_char,
) -> c_int {
    if handle.is_null() || excluded_apps.is_null() {
        return 0;
    }

    let handle = unsafe { &*handle };
    let excluded_apps = match unsafe { CStr::from_ptr(excluded_apps) }.to_str() {
        Ok(excluded_apps) => excluded_apps,
        Err(_) => return 0,
    };

    match handle.engine.set_excluded_apps(excluded_apps) {
        Ok(()) => 1,
        Err(_) => 0,
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by this library
#[no_mangle]
pub extern "C" fn quitall_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
