// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// msgfilter-ffi: C-compatible FFI layer for the banned-word filter.
//
// The handle is a SharedMessageFilter, so one handle may be used from
// several threads at once.
//
// Memory management rules:
// - Opaque handle pointer: created by `msgfilter_new`, freed by `msgfilter_free`.
// - Returned strings: caller must free with `msgfilter_free_str`.
// - Returned string arrays: caller must free with `msgfilter_free_str_array`.
// - Error strings written to `error_out`: caller frees with `msgfilter_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use msgfilter::{FilterError, MessageFilter, NormalizationPolicy, SharedMessageFilter};

/// Opaque filter handle.
pub type MsgFilterHandle = SharedMessageFilter;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new, empty filter.
///
/// - `policy_json`: normalization policy as a JSON object, e.g.
///   `{"homoglyphs": "phonetic", "leetspeak": true}`. NULL for the default.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `msgfilter_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_new(
    policy_json: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut MsgFilterHandle {
    let policy = if policy_json.is_null() {
        NormalizationPolicy::default()
    } else {
        let Some(json) = cstr_to_str(policy_json) else {
            set_error(error_out, "policy_json is not valid UTF-8");
            return ptr::null_mut();
        };
        match serde_json::from_str(json) {
            Ok(policy) => policy,
            Err(e) => {
                set_error(error_out, &format!("invalid policy: {e}"));
                return ptr::null_mut();
            }
        }
    };
    Box::into_raw(Box::new(SharedMessageFilter::with_policy(policy)))
}

/// Free a handle created by `msgfilter_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_free(handle: *mut MsgFilterHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Banned-word list ────────────────────────────────────────────

/// Ban a word. Returns 0 on success, -1 on error.
///
/// Fails when the word has no letters or digits; `error_out` (if non-NULL)
/// then receives the reason.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_ban_word(
    handle: *const MsgFilterHandle,
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    with_word(handle, word, error_out, |filter, word| filter.ban_word(word))
}

/// Unban a word. Returns 0 on success, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_unban_word(
    handle: *const MsgFilterHandle,
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    with_word(handle, word, error_out, |filter, word| filter.unban_word(word))
}

/// Ban every word of a NULL-terminated array, rebuilding the index once.
///
/// Returns the number of newly banned words, or -1 on error. On error no
/// word is banned.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_ban_words(
    handle: *const MsgFilterHandle,
    words: *const *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(filter) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return -1;
    };
    let Some(words) = c_array_to_strs(words) else {
        set_error(error_out, "words is null or not valid UTF-8");
        return -1;
    };
    match filter.ban_words(words) {
        Ok(added) => c_int::try_from(added).unwrap_or(c_int::MAX),
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

/// Remove every banned word.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_clear(handle: *const MsgFilterHandle) {
    if let Some(filter) = unsafe { handle.as_ref() } {
        filter.clear();
    }
}

/// Get the banned words in the order they were first banned.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `msgfilter_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_banned_words(
    handle: *const MsgFilterHandle,
) -> *mut *mut c_char {
    let Some(filter) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&filter.banned_words())
}

// ── Message checks ──────────────────────────────────────────────

/// Check whether a message contains a banned word.
/// Returns 1 for blocked, 0 for clean, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_check_message(
    handle: *const MsgFilterHandle,
    message: *const c_char,
) -> c_int {
    let Some(filter) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let Some(message) = cstr_to_str(message) else {
        return -1;
    };
    if filter.check_message(message) { 1 } else { 0 }
}

/// Get the distinct banned words contained in a message.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `msgfilter_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_matched_words(
    handle: *const MsgFilterHandle,
    message: *const c_char,
) -> *mut *mut c_char {
    let Some(filter) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(message) = cstr_to_str(message) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&filter.matched_words(message))
}

/// Canonical form of `text` under the handle's policy.
///
/// Returns a heap-allocated C string. Caller must free with `msgfilter_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_normalize(
    handle: *const MsgFilterHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(filter) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&filter.normalize(text))
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn msgfilter_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(MessageFilter::version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by msgfilter functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn msgfilter_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn with_word(
    handle: *const MsgFilterHandle,
    word: *const c_char,
    error_out: *mut *mut c_char,
    op: impl FnOnce(&SharedMessageFilter, &str) -> Result<(), FilterError>,
) -> c_int {
    let Some(filter) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        set_error(error_out, "word is null or not valid UTF-8");
        return -1;
    };
    match op(filter, word) {
        Ok(()) => 0,
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn c_array_to_strs<'a>(arr: *const *const c_char) -> Option<Vec<&'a str>> {
    if arr.is_null() {
        return None;
    }
    let mut strs = Vec::new();
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        strs.push(cstr_to_str(p)?);
        i += 1;
    }
    Some(strs)
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    Box::into_raw(ptrs.into_boxed_slice()) as *mut *mut c_char
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // Allocated as a boxed slice of i + 1 pointers
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn take_array(arr: *mut *mut c_char) -> Vec<String> {
        let mut out = Vec::new();
        let mut i = 0;
        loop {
            let p = unsafe { *arr.add(i) };
            if p.is_null() {
                break;
            }
            out.push(unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string());
            i += 1;
        }
        unsafe { msgfilter_free_str_array(arr) };
        out
    }

    #[test]
    fn ban_check_unban() {
        unsafe {
            let handle = msgfilter_new(ptr::null(), ptr::null_mut());
            assert!(!handle.is_null());

            let word = c("bad");
            assert_eq!(msgfilter_ban_word(handle, word.as_ptr(), ptr::null_mut()), 0);
            assert_eq!(msgfilter_check_message(handle, c("so B-A-D").as_ptr()), 1);
            assert_eq!(msgfilter_check_message(handle, c("fine").as_ptr()), 0);

            assert_eq!(msgfilter_unban_word(handle, word.as_ptr(), ptr::null_mut()), 0);
            assert_eq!(msgfilter_check_message(handle, c("so bad").as_ptr()), 0);
            msgfilter_free(handle);
        }
    }

    #[test]
    fn invalid_word_sets_error() {
        unsafe {
            let handle = msgfilter_new(ptr::null(), ptr::null_mut());
            let mut err: *mut c_char = ptr::null_mut();
            assert_eq!(msgfilter_ban_word(handle, c("!!!").as_ptr(), &mut err), -1);
            assert!(!err.is_null());
            let msg = CStr::from_ptr(err).to_str().unwrap().to_string();
            assert!(msg.contains("!!!"));
            msgfilter_free_str(err);
            assert!(take_array(msgfilter_banned_words(handle)).is_empty());
            msgfilter_free(handle);
        }
    }

    #[test]
    fn null_arguments_are_errors() {
        unsafe {
            assert_eq!(msgfilter_check_message(ptr::null(), c("x").as_ptr()), -1);
            let handle = msgfilter_new(ptr::null(), ptr::null_mut());
            assert_eq!(msgfilter_check_message(handle, ptr::null()), -1);
            assert!(msgfilter_matched_words(handle, ptr::null()).is_null());
            msgfilter_free(handle);
            msgfilter_free(ptr::null_mut());
        }
    }

    #[test]
    fn policy_json() {
        unsafe {
            let mut err: *mut c_char = ptr::null_mut();
            let bad = msgfilter_new(c("{\"bogus\": 1}").as_ptr(), &mut err);
            assert!(bad.is_null());
            assert!(!err.is_null());
            msgfilter_free_str(err);

            let handle = msgfilter_new(c("{\"leetspeak\": true}").as_ptr(), ptr::null_mut());
            assert!(!handle.is_null());
            let canonical = msgfilter_normalize(handle, c("B4D").as_ptr());
            assert_eq!(CStr::from_ptr(canonical).to_str().unwrap(), "bad");
            msgfilter_free_str(canonical);
            msgfilter_free(handle);
        }
    }

    #[test]
    fn word_arrays() {
        unsafe {
            let handle = msgfilter_new(ptr::null(), ptr::null_mut());
            let words = [c("evil"), c("bad"), c("EVIL")];
            let mut ptrs: Vec<*const c_char> = words.iter().map(|w| w.as_ptr()).collect();
            ptrs.push(ptr::null());
            assert_eq!(msgfilter_ban_words(handle, ptrs.as_ptr(), ptr::null_mut()), 2);

            assert_eq!(take_array(msgfilter_banned_words(handle)), ["evil", "bad"]);
            assert_eq!(
                take_array(msgfilter_matched_words(handle, c("bad and evil").as_ptr())),
                ["evil", "bad"]
            );

            msgfilter_clear(handle);
            assert!(take_array(msgfilter_banned_words(handle)).is_empty());
            msgfilter_free(handle);
        }
    }

    #[test]
    fn version_is_static() {
        let v = unsafe { CStr::from_ptr(msgfilter_version()) };
        assert!(!v.to_str().unwrap().is_empty());
    }
}
