//! # clangdb_core
//!
//! Safe bindings to libclang's compilation-database API, loaded at runtime.
//!
//! This crate provides:
//! - Process-wide discovery and loading of libclang, with the Xcode
//!   fallback search paths on macOS
//! - RAII wrappers for the compilation-database resource family
//! - String marshaling that releases every native buffer exactly once
//! - A typed error for every native sentinel (null handle, error code)
//!
//! ## Example
//!
//! ```rust,ignore
//! use clangdb_core::CompilationDatabase;
//!
//! let db = CompilationDatabase::from_directory("build")?;
//! for command in db.compile_commands()?.iter()? {
//!     println!("{}", command.arguments().collect::<Vec<_>>().join(" "));
//! }
//! ```
//!
//! ## Thread safety
//!
//! The loaded library is immutable after load and shared freely. Each
//! wrapper owns its handle exclusively: wrappers are `Send` but not `Sync`,
//! so a handle can move between threads but its calls are always
//! serialized. Distinct handles need no coordination.

#![warn(missing_docs)]

mod clang;
mod database;
mod error;
mod string;

pub use clang::Clang;
pub use database::{CompilationDatabase, CompileCommand, CompileCommands};
pub use error::{Error, Result};
