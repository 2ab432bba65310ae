//! Raw libclang types exchanged by the compilation-database entry points.
//!
//! Handles are opaque pointers meaningful only to libclang. Never
//! dereference them; pass them back to the entry points that accept them.

use std::ffi::{c_uint, c_void};

/// Opaque handle to a loaded compilation database.
pub type CXCompilationDatabase = *mut c_void;

/// Opaque handle to an ordered collection of compile commands.
pub type CXCompileCommands = *mut c_void;

/// Opaque handle to a single compile command.
///
/// Owned by the `CXCompileCommands` it came from; libclang invalidates it
/// when the collection is disposed.
pub type CXCompileCommand = *mut c_void;

/// Error code written by `clang_CompilationDatabase_fromDirectory`.
pub type CXCompilationDatabase_Error = c_uint;

/// The database was loaded without error.
pub const CXCompilationDatabase_NoError: CXCompilationDatabase_Error = 0;

/// No database could be loaded from the requested directory.
pub const CXCompilationDatabase_CanNotLoadDatabase: CXCompilationDatabase_Error = 1;

/// A libclang-owned string buffer.
///
/// Returned by value. The text is read with `clang_getCString` and the
/// buffer must be released with `clang_disposeString`, exactly once.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXString {
    /// Pointer to the libclang-managed buffer. May be null.
    pub data: *const c_void,
    /// Flags private to libclang. Do not interpret.
    pub private_flags: c_uint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(CXCompilationDatabase_NoError, 0);
        assert_eq!(CXCompilationDatabase_CanNotLoadDatabase, 1);
    }
}
