//! C-compatible FFI API so a front end in another language can generate
//! resumes.
//!
//! # ABI Contract
//!
//! All exported functions use `extern "C"` calling convention and `#[no_mangle]`
//! to ensure stable symbol names.
//!
//! ## Memory management
//! - Buffers returned by `resume_*` functions are allocated on the Rust heap.
//! - Callers **must** free them with `resume_free_buffer` / `resume_free_string`.
//! - Passing a null pointer to a free function is a no-op.
//!
//! ## Error handling
//! - Functions that can fail return a `c_int` (0 = success, non-zero = error).
//! - Error details can be retrieved via `resume_last_error`.
//!
//! ## Required fields
//! These functions do not check that name, email and phone are filled in;
//! that gate belongs to the calling front end.
//!
//! ## Thread safety
//! - `resume_last_error` uses a thread-local, so it is safe to call from
//!   multiple threads. Concurrent generations stage their photos in
//!   separately named files.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::slice;

use crate::photo::Photo;
use crate::pipeline::{
    compute_resume_layout, generate_resume_pdf, suggested_file_name, GeneratorConfig,
};
use crate::resume::Resume;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

// ---------------------------------------------------------------------------
// C-compatible input types
// ---------------------------------------------------------------------------

/// The seven resume fields as null-terminated UTF-8 strings.
///
/// A `NULL` field is treated as the empty string.
#[repr(C)]
pub struct ResumeFields {
    pub name: *const c_char,
    pub email: *const c_char,
    pub phone: *const c_char,
    pub summary: *const c_char,
    pub education: *const c_char,
    pub experience: *const c_char,
    /// Comma separated skills.
    pub skills: *const c_char,
}

/// Read an optional C string.
///
/// # Safety
/// `s`, if non-null, must point to a valid null-terminated string.
unsafe fn c_str<'a>(s: *const c_char, field: &str) -> Result<&'a str, String> {
    if s.is_null() {
        return Ok("");
    }
    CStr::from_ptr(s)
        .to_str()
        .map_err(|e| format!("Invalid UTF-8 in {field}: {e}"))
}

/// Convert [`ResumeFields`] (FFI) to a [`Resume`] (Rust).
///
/// # Safety
/// Every non-null field must point to a valid null-terminated string.
unsafe fn resume_from_c(fields: &ResumeFields) -> Result<Resume, String> {
    Ok(Resume::new(
        c_str(fields.name, "name")?,
        c_str(fields.email, "email")?,
        c_str(fields.phone, "phone")?,
        c_str(fields.summary, "summary")?,
        c_str(fields.education, "education")?,
        c_str(fields.experience, "experience")?,
        c_str(fields.skills, "skills")?,
    ))
}

/// Build an optional [`Photo`] from a byte pointer and extension hint.
///
/// # Safety
/// `photo_ptr`, if non-null, must point to `photo_len` valid bytes; `ext`, if
/// non-null, must be a valid null-terminated string.
unsafe fn photo_from_c(
    photo_ptr: *const u8,
    photo_len: u32,
    ext: *const c_char,
) -> Result<Option<Photo>, String> {
    if photo_ptr.is_null() || photo_len == 0 {
        return Ok(None);
    }
    let bytes = slice::from_raw_parts(photo_ptr, photo_len as usize).to_vec();
    let ext = c_str(ext, "photo extension")?;
    Ok(Some(Photo::new(bytes, (!ext.is_empty()).then_some(ext))))
}

// ---------------------------------------------------------------------------
// Core API
// ---------------------------------------------------------------------------

/// Generate a resume PDF.
///
/// # Parameters
/// - `fields`: the resume fields
/// - `photo_ptr`, `photo_len`: optional PNG/JPEG bytes (`NULL`/0 for none)
/// - `photo_ext`: optional extension hint such as `"png"` (may be `NULL`)
/// - `out_buf`: on success, receives a pointer to heap-allocated PDF bytes
/// - `out_len`: on success, receives the length of the PDF buffer
///
/// # Returns
/// `0` on success; `1` null argument, `2` invalid input, `3` generation
/// failed. On error, call `resume_last_error`.
///
/// # Safety
/// - `fields` must point to a valid [`ResumeFields`].
/// - `photo_ptr`, if non-null, must point to `photo_len` valid bytes.
/// - `out_buf` and `out_len` must be valid pointers.
/// - The caller must free `*out_buf` by calling `resume_free_buffer`.
#[no_mangle]
pub unsafe extern "C" fn resume_generate_pdf(
    fields: *const ResumeFields,
    photo_ptr: *const u8,
    photo_len: u32,
    photo_ext: *const c_char,
    out_buf: *mut *mut u8,
    out_len: *mut u32,
) -> c_int {
    if fields.is_null() || out_buf.is_null() || out_len.is_null() {
        set_last_error("Null pointer argument");
        return 1;
    }
    let resume = match resume_from_c(&*fields) {
        Ok(r) => r,
        Err(e) => {
            set_last_error(&e);
            return 2;
        }
    };
    let photo = match photo_from_c(photo_ptr, photo_len, photo_ext) {
        Ok(p) => p,
        Err(e) => {
            set_last_error(&e);
            return 2;
        }
    };
    match generate_resume_pdf(&resume, photo.as_ref(), &GeneratorConfig::default()) {
        Ok(download) => {
            let len = download.bytes.len() as u32;
            let buf = download.bytes.into_boxed_slice();
            *out_buf = Box::into_raw(buf) as *mut u8;
            *out_len = len;
            0
        }
        Err(e) => {
            set_last_error(&e.to_string());
            3
        }
    }
}

/// Compute only the resume layout (no PDF rendering). Returns JSON.
///
/// Takes no photo; the layout then shows the blank spacer.
///
/// # Returns
/// `0` on success; error codes as for `resume_generate_pdf`.
///
/// # Safety
/// `fields` must point to a valid [`ResumeFields`]; `*out_json_ptr` must be
/// freed with `resume_free_string`.
#[no_mangle]
pub unsafe extern "C" fn resume_compute_layout(
    fields: *const ResumeFields,
    out_json_ptr: *mut *mut c_char,
) -> c_int {
    if fields.is_null() || out_json_ptr.is_null() {
        set_last_error("Null pointer argument");
        return 1;
    }
    let resume = match resume_from_c(&*fields) {
        Ok(r) => r,
        Err(e) => {
            set_last_error(&e);
            return 2;
        }
    };
    let layout = match compute_resume_layout(&resume, None, &GeneratorConfig::default()) {
        Ok(l) => l,
        Err(e) => {
            set_last_error(&e.to_string());
            return 3;
        }
    };
    match CString::new(layout.to_json()) {
        Ok(cs) => {
            *out_json_ptr = cs.into_raw();
            0
        }
        Err(_) => {
            set_last_error("JSON contained null byte");
            3
        }
    }
}

/// The suggested download file name for `name`, e.g. `"Jane_Doe_resume.pdf"`.
///
/// Returns null on invalid input. Free the result with `resume_free_string`.
///
/// # Safety
/// `name` must be a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resume_suggested_file_name(name: *const c_char) -> *mut c_char {
    if name.is_null() {
        set_last_error("Null pointer argument");
        return ptr::null_mut();
    }
    let name = match c_str(name, "name") {
        Ok(n) => n,
        Err(e) => {
            set_last_error(&e);
            return ptr::null_mut();
        }
    };
    match CString::new(suggested_file_name(name)) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// Memory management
// ---------------------------------------------------------------------------

/// Free a PDF buffer returned by `resume_generate_pdf`.
///
/// # Safety
/// `buf` must have been returned by a previous `resume_generate_pdf` call, and
/// `len` must be the corresponding length.
#[no_mangle]
pub unsafe extern "C" fn resume_free_buffer(buf: *mut u8, len: u32) {
    if !buf.is_null() {
        let _ = Box::from_raw(slice::from_raw_parts_mut(buf, len as usize));
    }
}

/// Free a string returned by `resume_compute_layout` or
/// `resume_suggested_file_name`.
///
/// # Safety
/// `s` must have been returned by Rust's `CString::into_raw`.
#[no_mangle]
pub unsafe extern "C" fn resume_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

/// Retrieve the last error message. Returns a null-terminated string.
///
/// The returned pointer is valid until the next `resume_*` call on the same
/// thread. The caller should **not** free this pointer – it is managed
/// internally.
///
/// Returns null if no error has occurred.
#[no_mangle]
pub extern "C" fn resume_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        let borrow = e.borrow();
        match borrow.as_ref() {
            Some(cs) => cs.as_ptr(),
            None => ptr::null(),
        }
    })
}

/// Return the library version as a null-terminated string.
/// The caller must **not** free this pointer.
#[no_mangle]
pub extern "C" fn resume_version() -> *const c_char {
    // Safe: the string is static
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
