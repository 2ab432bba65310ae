//! Safe wrappers for the compilation-database resource family.
//!
//! Ownership rules:
//! - [`CompilationDatabase`] and [`CompileCommands`] each own one native
//!   handle. They are move-only (no `Clone`) and release the handle when
//!   dropped, on every exit path.
//! - [`CompileCommand`] borrows its parent [`CompileCommands`]; the native
//!   memory behind it belongs to the collection, so the borrow checker
//!   rules out use after the parent is disposed.
//! - Explicit `dispose()` is idempotent. Operations after it fail with
//!   [`Error::Disposed`].

use crate::clang::Clang;
use crate::error::{Error, Result};
use crate::string::ForeignString;
use clangdb_sys as sys;
use std::ffi::CString;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr;
use tracing::debug;

/// Encodes a path argument to the NUL-terminated bytes libclang expects.
fn to_c_path(path: &Path) -> Result<CString> {
    CString::new(path.to_string_lossy().into_owned()).map_err(|_| Error::InvalidPath {
        path: path.to_path_buf(),
    })
}

/// A loaded compile-commands store.
///
/// Created from a directory containing a store such as the
/// `compile_commands.json` emitted by CMake. The native handle is released
/// when this value drops or [`CompilationDatabase::dispose`] is called,
/// whichever comes first.
///
/// # Example
///
/// ```rust,ignore
/// use clangdb_core::CompilationDatabase;
///
/// let db = CompilationDatabase::from_directory("build")?;
/// let commands = db.compile_commands()?;
/// println!("{} translation units", commands.len()?);
/// ```
pub struct CompilationDatabase {
    clang: &'static Clang,
    /// Null once disposed.
    raw: sys::CXCompilationDatabase,
}

impl fmt::Debug for CompilationDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationDatabase")
            .field("raw", &self.raw)
            .finish()
    }
}

// A handle may move between threads, but libclang's thread-safety for
// concurrent use of one handle is unspecified, so it is never shared
// (`Send`, not `Sync`).
unsafe impl Send for CompilationDatabase {}

impl CompilationDatabase {
    /// Loads the compilation database found in `directory`.
    ///
    /// # Errors
    ///
    /// - [`Error::LibraryNotFound`] / [`Error::MissingSymbol`] when libclang
    ///   itself is unavailable.
    /// - [`Error::CanNotLoadDatabase`] when the directory holds no loadable
    ///   store. A null native handle is sufficient failure evidence on its
    ///   own, even alongside a zero error code.
    /// - [`Error::InvalidPath`] when the path contains an interior NUL.
    pub fn from_directory(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        let c_directory = to_c_path(directory)?;
        let clang = Clang::get()?;

        let mut code: sys::CXCompilationDatabase_Error = sys::CXCompilationDatabase_NoError;
        let raw = unsafe {
            (clang.functions().clang_CompilationDatabase_fromDirectory)(
                c_directory.as_ptr(),
                &mut code,
            )
        };

        if raw.is_null() || code != sys::CXCompilationDatabase_NoError {
            // A non-null handle next to an error code must still be released.
            if !raw.is_null() {
                unsafe { (clang.functions().clang_CompilationDatabase_dispose)(raw) };
            }
            return Err(Error::CanNotLoadDatabase {
                path: directory.to_path_buf(),
                code,
            });
        }

        debug!("loaded compilation database from `{}`", directory.display());
        Ok(Self { clang, raw })
    }

    fn live(&self) -> Result<sys::CXCompilationDatabase> {
        if self.raw.is_null() {
            return Err(Error::Disposed {
                resource: "CompilationDatabase",
            });
        }
        Ok(self.raw)
    }

    /// All compile commands in the database.
    ///
    /// The returned collection is an independent native handle: it stays
    /// valid after this database is disposed and is released on its own.
    ///
    /// # Errors
    ///
    /// [`Error::Disposed`] when this database was already disposed.
    pub fn compile_commands(&self) -> Result<CompileCommands> {
        let raw = self.live()?;
        let commands = unsafe {
            (self
                .clang
                .functions()
                .clang_CompilationDatabase_getAllCompileCommands)(raw)
        };
        Ok(CompileCommands::wrap(self.clang, commands))
    }

    /// The compile commands recorded for one source file.
    ///
    /// A file with no entry yields an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// [`Error::Disposed`] when this database was already disposed;
    /// [`Error::InvalidPath`] when the path contains an interior NUL.
    pub fn compile_commands_for_file(&self, file: impl AsRef<Path>) -> Result<CompileCommands> {
        let raw = self.live()?;
        let c_file = to_c_path(file.as_ref())?;
        let commands = unsafe {
            (self
                .clang
                .functions()
                .clang_CompilationDatabase_getCompileCommands)(raw, c_file.as_ptr())
        };
        Ok(CompileCommands::wrap(self.clang, commands))
    }

    /// Releases the native handle.
    ///
    /// Idempotent: calling it again is a no-op. Subsequent operations fail
    /// with [`Error::Disposed`]. `Drop` routes through here, so the handle
    /// is released exactly once no matter how the owning scope exits.
    pub fn dispose(&mut self) {
        if self.raw.is_null() {
            return;
        }
        unsafe { (self.clang.functions().clang_CompilationDatabase_dispose)(self.raw) };
        self.raw = ptr::null_mut();
    }
}

impl Drop for CompilationDatabase {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// An ordered collection of compile commands.
///
/// Independent of the database it came from. Its length is queried from
/// native code on every call rather than cached.
pub struct CompileCommands {
    clang: &'static Clang,
    /// Null once disposed.
    raw: sys::CXCompileCommands,
}

// Same reasoning as `CompilationDatabase`: movable, never shared.
unsafe impl Send for CompileCommands {}

impl CompileCommands {
    fn wrap(clang: &'static Clang, raw: sys::CXCompileCommands) -> Self {
        // libclang reports "no matches" as an empty collection, not null
        debug_assert!(!raw.is_null());
        Self { clang, raw }
    }

    fn live(&self) -> Result<sys::CXCompileCommands> {
        if self.raw.is_null() {
            return Err(Error::Disposed {
                resource: "CompileCommands",
            });
        }
        Ok(self.raw)
    }

    /// The number of commands, queried from the native store each time.
    ///
    /// # Errors
    ///
    /// [`Error::Disposed`] when this collection was already disposed.
    pub fn len(&self) -> Result<u32> {
        let raw = self.live()?;
        Ok(unsafe { (self.clang.functions().clang_CompileCommands_getSize)(raw) })
    }

    /// True when the collection holds no commands.
    ///
    /// # Errors
    ///
    /// [`Error::Disposed`] when this collection was already disposed.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// The command at `index`.
    ///
    /// libclang performs no bounds check of its own, so the index is
    /// compared against a fresh size query before the native call.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`;
    /// [`Error::Disposed`] when this collection was already disposed.
    pub fn get(&self, index: u32) -> Result<CompileCommand<'_>> {
        let raw = self.live()?;
        let len = unsafe { (self.clang.functions().clang_CompileCommands_getSize)(raw) };
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let command =
            unsafe { (self.clang.functions().clang_CompileCommands_getCommand)(raw, index) };
        debug_assert!(!command.is_null());
        Ok(CompileCommand {
            clang: self.clang,
            raw: command,
            _parent: PhantomData,
        })
    }

    /// Iterates the commands in native-reported order.
    ///
    /// # Errors
    ///
    /// [`Error::Disposed`] when this collection was already disposed.
    pub fn iter(&self) -> Result<impl Iterator<Item = CompileCommand<'_>>> {
        let len = self.len()?;
        // `get` cannot fail inside the loop: the borrow keeps the
        // collection live and `i` stays in range.
        Ok((0..len).filter_map(move |i| self.get(i).ok()))
    }

    /// Releases the native handle. Idempotent, as on
    /// [`CompilationDatabase::dispose`].
    pub fn dispose(&mut self) {
        if self.raw.is_null() {
            return;
        }
        unsafe { (self.clang.functions().clang_CompileCommands_dispose)(self.raw) };
        self.raw = ptr::null_mut();
    }
}

impl Drop for CompileCommands {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// One compile command: a working directory plus the argument vector the
/// build system recorded.
///
/// Borrows its parent [`CompileCommands`] and carries no disposal
/// responsibility of its own. The borrow makes use after the parent is
/// released unrepresentable:
///
/// ```compile_fail
/// # use clangdb_core::CompilationDatabase;
/// let db = CompilationDatabase::from_directory("build").unwrap();
/// let commands = db.compile_commands().unwrap();
/// let command = commands.get(0).unwrap();
/// drop(commands);
/// command.directory(); // error: `commands` is still borrowed
/// ```
pub struct CompileCommand<'cmds> {
    clang: &'static Clang,
    raw: sys::CXCompileCommand,
    _parent: PhantomData<&'cmds CompileCommands>,
}

impl fmt::Debug for CompileCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompileCommand")
            .field("raw", &self.raw)
            .finish()
    }
}

impl CompileCommand<'_> {
    /// The working directory the command runs in, marshaled fresh on each
    /// call.
    pub fn directory(&self) -> String {
        let raw = unsafe { (self.clang.functions().clang_CompileCommand_getDirectory)(self.raw) };
        ForeignString::new(self.clang, raw).into_string()
    }

    /// The number of arguments, including the compiler executable itself.
    pub fn argument_count(&self) -> u32 {
        unsafe { (self.clang.functions().clang_CompileCommand_getNumArgs)(self.raw) }
    }

    /// The argument at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= argument_count()`.
    pub fn argument(&self, index: u32) -> Result<String> {
        let count = self.argument_count();
        if index >= count {
            return Err(Error::IndexOutOfRange { index, len: count });
        }
        let raw =
            unsafe { (self.clang.functions().clang_CompileCommand_getArg)(self.raw, index) };
        Ok(ForeignString::new(self.clang, raw).into_string())
    }

    /// The arguments in the build system's original order, never reordered
    /// or deduplicated.
    ///
    /// The iterator re-derives from the native handle each time it is
    /// created, so invoking this twice yields the same sequence twice.
    pub fn arguments(&self) -> impl Iterator<Item = String> + '_ {
        // `argument` cannot fail in range; see `CompileCommands::iter`
        (0..self.argument_count()).filter_map(move |i| self.argument(i).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_nul_paths_are_rejected_before_any_native_call() {
        let err = CompilationDatabase::from_directory("bad\0dir").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn to_c_path_round_trips_plain_paths() {
        let c = to_c_path(Path::new("/build")).unwrap();
        assert_eq!(c.to_bytes(), b"/build");
    }
}
