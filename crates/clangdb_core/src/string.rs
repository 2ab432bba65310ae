//! Marshaling of libclang-owned strings.

use crate::clang::Clang;
use clangdb_sys::CXString;
use std::ffi::CStr;

/// A native string buffer produced by a libclang call.
///
/// The conversion call and the dispose call are a matched pair owned
/// entirely by this type: [`ForeignString::into_string`] consumes the
/// wrapper, and `Drop` releases buffers that were never converted, so the
/// native dispose runs exactly once on every exit path. Reading twice does
/// not compile.
pub(crate) struct ForeignString {
    clang: &'static Clang,
    raw: CXString,
}

impl ForeignString {
    pub(crate) fn new(clang: &'static Clang, raw: CXString) -> Self {
        Self { clang, raw }
    }

    /// Copies the native bytes into an owned `String` and releases the
    /// native buffer.
    ///
    /// libclang produces UTF-8; any invalid byte is replaced rather than
    /// surfaced as an error. A null buffer marshals to the empty string.
    pub(crate) fn into_string(self) -> String {
        unsafe {
            let ptr = (self.clang.functions().clang_getCString)(self.raw);
            if ptr.is_null() {
                String::new()
            } else {
                CStr::from_ptr(ptr).to_string_lossy().into_owned()
            }
        }
        // dropping `self` disposes the native buffer
    }
}

impl Drop for ForeignString {
    fn drop(&mut self) {
        unsafe { (self.clang.functions().clang_disposeString)(self.raw) }
    }
}
