//! Error types for the raw binding layer.

use thiserror::Error;

/// Result type for library loading and symbol binding.
pub type SysResult<T> = Result<T, SysError>;

/// Errors raised while locating libclang or binding its entry points.
///
/// Both variants are fatal at startup: the embedding application should
/// disable clang-backed features rather than crash.
#[derive(Debug, Error)]
pub enum SysError {
    /// No candidate path yielded a loadable libclang.
    #[error("could not load `{name}` from the default search path or any fallback directory")]
    LibraryNotFound {
        /// The platform library file name that was searched for.
        name: &'static str,
        /// The loader error from the bare-name attempt.
        #[source]
        source: libloading::Error,
    },

    /// A required entry point is absent from the loaded library.
    ///
    /// Usually a version mismatch between the installed libclang and the
    /// surface this crate binds.
    #[error("loaded libclang has no symbol `{name}`")]
    MissingSymbol {
        /// The symbol that failed to resolve.
        name: &'static str,
        /// The loader error for the failed lookup.
        #[source]
        source: libloading::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_symbol() {
        let source = match unsafe { libloading::Library::new("definitely-not-a-library") } {
            Err(e) => e,
            Ok(_) => return,
        };
        let err = SysError::MissingSymbol {
            name: "clang_getCString",
            source,
        };
        assert!(err.to_string().contains("clang_getCString"));
    }
}
