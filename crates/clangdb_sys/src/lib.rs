//! # clangdb_sys
//!
//! Raw dynamic bindings to libclang's compilation-database API.
//!
//! This crate provides:
//! - Runtime discovery and loading of the libclang shared library
//! - A statically typed table of the bound native entry points
//! - The raw handle and string types those entry points exchange
//!
//! **Most users should NOT use this crate directly.** Use the safe
//! `clangdb_core` wrapper crate instead, which adds RAII ownership, typed
//! errors, and string marshaling on top of these raw symbols.
//!
//! ## Safety
//!
//! Every function pointer in [`Functions`] is `unsafe` to call. Callers must
//! uphold libclang's invariants: handles must be live, indices must be in
//! range (libclang performs no bounds checks), and concurrent calls on a
//! single handle must be serialized.

// Native symbol and type names are kept verbatim.
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

mod error;
mod functions;
mod loader;
mod types;

pub use error::{SysError, SysResult};
pub use functions::Functions;
pub use loader::{Libclang, FALLBACK_DIRECTORIES, LIBRARY_NAME};
pub use types::{
    CXCompilationDatabase, CXCompilationDatabase_CanNotLoadDatabase,
    CXCompilationDatabase_Error, CXCompilationDatabase_NoError, CXCompileCommand,
    CXCompileCommands, CXString,
};
