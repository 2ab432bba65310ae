//! The statically typed table of bound entry points.

use crate::error::{SysError, SysResult};
use crate::types::{
    CXCompilationDatabase, CXCompilationDatabase_Error, CXCompileCommand, CXCompileCommands,
    CXString,
};
use libloading::Library;
use std::ffi::{c_char, c_uint};
use tracing::trace;

/// The libclang entry points this crate binds, one typed pointer per symbol.
///
/// The table is built once by [`Functions::bind`] during library load.
/// Afterwards every call site goes through a field with a fully declared
/// `unsafe extern "C"` signature, so argument and return types are checked
/// by the compiler rather than at the FFI boundary.
///
/// Field names are the native symbol names, verbatim.
#[allow(missing_docs)]
pub struct Functions {
    pub clang_CompilationDatabase_fromDirectory: unsafe extern "C" fn(
        *const c_char,
        *mut CXCompilationDatabase_Error,
    ) -> CXCompilationDatabase,
    pub clang_CompilationDatabase_dispose: unsafe extern "C" fn(CXCompilationDatabase),
    pub clang_CompilationDatabase_getAllCompileCommands:
        unsafe extern "C" fn(CXCompilationDatabase) -> CXCompileCommands,
    pub clang_CompilationDatabase_getCompileCommands:
        unsafe extern "C" fn(CXCompilationDatabase, *const c_char) -> CXCompileCommands,
    pub clang_CompileCommands_dispose: unsafe extern "C" fn(CXCompileCommands),
    pub clang_CompileCommands_getSize: unsafe extern "C" fn(CXCompileCommands) -> c_uint,
    pub clang_CompileCommands_getCommand:
        unsafe extern "C" fn(CXCompileCommands, c_uint) -> CXCompileCommand,
    pub clang_CompileCommand_getDirectory: unsafe extern "C" fn(CXCompileCommand) -> CXString,
    pub clang_CompileCommand_getNumArgs: unsafe extern "C" fn(CXCompileCommand) -> c_uint,
    pub clang_CompileCommand_getArg:
        unsafe extern "C" fn(CXCompileCommand, c_uint) -> CXString,
    pub clang_getCString: unsafe extern "C" fn(CXString) -> *const c_char,
    pub clang_disposeString: unsafe extern "C" fn(CXString),
    pub clang_getClangVersion: unsafe extern "C" fn() -> CXString,
}

impl Functions {
    /// Resolves every entry point from `library`.
    ///
    /// # Errors
    ///
    /// Returns [`SysError::MissingSymbol`] on the first symbol the library
    /// does not export.
    pub fn bind(library: &Library) -> SysResult<Self> {
        Ok(Self {
            clang_CompilationDatabase_fromDirectory: symbol(
                library,
                "clang_CompilationDatabase_fromDirectory\0",
            )?,
            clang_CompilationDatabase_dispose: symbol(
                library,
                "clang_CompilationDatabase_dispose\0",
            )?,
            clang_CompilationDatabase_getAllCompileCommands: symbol(
                library,
                "clang_CompilationDatabase_getAllCompileCommands\0",
            )?,
            clang_CompilationDatabase_getCompileCommands: symbol(
                library,
                "clang_CompilationDatabase_getCompileCommands\0",
            )?,
            clang_CompileCommands_dispose: symbol(library, "clang_CompileCommands_dispose\0")?,
            clang_CompileCommands_getSize: symbol(library, "clang_CompileCommands_getSize\0")?,
            clang_CompileCommands_getCommand: symbol(
                library,
                "clang_CompileCommands_getCommand\0",
            )?,
            clang_CompileCommand_getDirectory: symbol(
                library,
                "clang_CompileCommand_getDirectory\0",
            )?,
            clang_CompileCommand_getNumArgs: symbol(library, "clang_CompileCommand_getNumArgs\0")?,
            clang_CompileCommand_getArg: symbol(library, "clang_CompileCommand_getArg\0")?,
            clang_getCString: symbol(library, "clang_getCString\0")?,
            clang_disposeString: symbol(library, "clang_disposeString\0")?,
            clang_getClangVersion: symbol(library, "clang_getClangVersion\0")?,
        })
    }
}

/// Resolves one symbol and copies its address out of the loader.
///
/// `name` carries its NUL terminator so libloading does not need to
/// allocate. The returned pointer is only valid while the library stays
/// mapped; [`crate::Libclang`] keeps the `Library` alive alongside the
/// table for that reason.
fn symbol<T: Copy>(library: &Library, name: &'static str) -> SysResult<T> {
    let sym = unsafe { library.get::<T>(name.as_bytes()) }.map_err(|source| {
        SysError::MissingSymbol {
            name: name.trim_end_matches('\0'),
            source,
        }
    })?;
    trace!("resolved {}", name.trim_end_matches('\0'));
    Ok(*sym)
}
