// src/c_api.rs
// FFI surface for the mobile host. Raw pointers plus catch_unwind at every
// entry point: a panic must never unwind across the C boundary.
use crate::ReadingEngine;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;

static mut READING_ENGINE: *mut ReadingEngine = ptr::null_mut();

fn get_progress_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("read-better");
    path.push("progress.bin");
    path
}

#[no_mangle]
pub extern "C" fn reading_engine_init() {
    let result = catch_unwind(|| unsafe {
        if !READING_ENGINE.is_null() {
            return;
        }
        let progress_path = get_progress_path();
        if let Some(parent) = progress_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let engine = ReadingEngine::from_file_or_new(progress_path.to_str().unwrap_or(""));
        READING_ENGINE = Box::into_raw(Box::new(engine));
        eprintln!("[Rust] Reading engine initialized.");
    });
    if result.is_err() {
        eprintln!("[Rust FATAL] A panic occurred during reading engine initialization.");
        unsafe {
            READING_ENGINE = ptr::null_mut();
        }
    }
}

#[no_mangle]
pub extern "C" fn reading_engine_destroy() {
    unsafe {
        if READING_ENGINE.is_null() {
            return;
        }
        let engine = Box::from_raw(READING_ENGINE);
        if let Err(e) = engine.save_progress() {
            eprintln!("[Rust ERR] Failed to save progress: {}", e);
        }
        READING_ENGINE = ptr::null_mut();
    }
}

unsafe fn get_engine_mut<'a>() -> Option<&'a mut ReadingEngine> {
    READING_ENGINE.as_mut()
}
unsafe fn get_engine<'a>() -> Option<&'a ReadingEngine> {
    READING_ENGINE.as_ref()
}

fn c_str_or_empty<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    unsafe { CStr::from_ptr(s) }.to_str().unwrap_or("")
}

/// Returns a JSON array of syllables, e.g. `["fan","tas","tic"]`.
/// The caller frees the string with `reading_free_string`.
#[no_mangle]
pub extern "C" fn reading_split_syllables(word: *const c_char) -> *mut c_char {
    let word = c_str_or_empty(word);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let syllables = crate::split_syllables(word);
        serde_json::to_string(&syllables).unwrap_or_else(|_| "[]".to_string())
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in split_syllables.");
        "[]".to_string()
    });
    CString::new(json_string).unwrap().into_raw()
}

/// Returns a JSON object `{"is_correct":bool,"similarity":float}`.
/// The caller frees the string with `reading_free_string`.
#[no_mangle]
pub extern "C" fn reading_check_pronunciation(
    recognized: *const c_char,
    target: *const c_char,
) -> *mut c_char {
    let recognized = c_str_or_empty(recognized);
    let target = c_str_or_empty(target);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let graded = crate::check_pronunciation(recognized, target);
        serde_json::to_string(&graded).unwrap_or_else(|_| "{}".to_string())
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in check_pronunciation.");
        "{}".to_string()
    });
    CString::new(json_string).unwrap().into_raw()
}

/// Grades an attempt against the global engine's progress state and
/// returns the points earned (0 on a miss or when uninitialized).
#[no_mangle]
pub extern "C" fn reading_record_attempt(
    word: *const c_char,
    recognized: *const c_char,
    is_first_try: c_int,
) -> u64 {
    let word = c_str_or_empty(word);
    let recognized = c_str_or_empty(recognized);
    if word.is_empty() {
        return 0;
    }
    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        if let Some(engine) = get_engine_mut() {
            engine
                .record_attempt(word, recognized, is_first_try != 0)
                .points_earned
        } else {
            0
        }
    }));
    result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in record_attempt.");
        0
    })
}

/// Returns the tracker's total points, for progress screens.
#[no_mangle]
pub extern "C" fn reading_total_points() -> u64 {
    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        get_engine().map(|e| e.progress.total_points).unwrap_or(0)
    }));
    result.unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn reading_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
