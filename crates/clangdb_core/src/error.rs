//! Error types for the safe binding layer.

use clangdb_sys::SysError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for compilation-database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading libclang or reading a compilation
/// database.
///
/// The first two variants are startup failures: the embedding application
/// should disable clang-backed features, not crash. The rest are per-call
/// failures that propagate to the immediate caller. Nothing is retried
/// automatically; every native call is deterministic given the same inputs
/// and handle state.
#[derive(Debug, Error)]
pub enum Error {
    /// No candidate path yielded a loadable libclang.
    #[error("libclang is not available: {0}")]
    LibraryNotFound(#[source] SysError),

    /// The loaded libclang lacks a required entry point (version mismatch).
    #[error("libclang is incompatible: {0}")]
    MissingSymbol(#[source] SysError),

    /// No compilation database could be loaded from the given directory.
    ///
    /// Recoverable: the caller may retry with a different path or skip the
    /// feature for that directory.
    #[error("can not load a compilation database from `{path}` (error code {code})")]
    CanNotLoadDatabase {
        /// The directory that was searched.
        path: PathBuf,
        /// The native error code, when one was reported.
        code: u32,
    },

    /// An index was outside the bounds of its collection.
    ///
    /// Always a caller bug; never retried.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: u32,
        /// The collection length at the time of the call.
        len: u32,
    },

    /// An operation was attempted on an already-released handle.
    ///
    /// Always a caller lifetime bug; never retried.
    #[error("{resource} used after dispose")]
    Disposed {
        /// The wrapper type whose handle was already released.
        resource: &'static str,
    },

    /// A path argument contained an interior NUL byte and cannot be passed
    /// to native code.
    #[error("path `{path}` contains an interior NUL byte")]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
    },
}

impl From<SysError> for Error {
    fn from(err: SysError) -> Self {
        match err {
            SysError::LibraryNotFound { .. } => Error::LibraryNotFound(err),
            SysError::MissingSymbol { .. } => Error::MissingSymbol(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 5 out of range for collection of length 2"
        );
    }

    #[test]
    fn disposed_names_the_resource() {
        let err = Error::Disposed {
            resource: "CompilationDatabase",
        };
        assert_eq!(err.to_string(), "CompilationDatabase used after dispose");
    }

    #[test]
    fn can_not_load_database_display() {
        let err = Error::CanNotLoadDatabase {
            path: PathBuf::from("/no/build"),
            code: 1,
        };
        assert!(err.to_string().contains("/no/build"));
        assert!(err.to_string().contains("error code 1"));
    }
}
