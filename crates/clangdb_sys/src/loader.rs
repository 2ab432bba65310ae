//! Platform-specific discovery and loading of libclang.

use crate::error::{SysError, SysResult};
use crate::functions::Functions;
use libloading::Library;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the libclang shared library on this platform.
#[cfg(target_os = "macos")]
pub const LIBRARY_NAME: &str = "libclang.dylib";
/// File name of the libclang shared library on this platform.
#[cfg(windows)]
pub const LIBRARY_NAME: &str = "libclang.dll";
/// File name of the libclang shared library on this platform.
#[cfg(all(unix, not(target_os = "macos")))]
pub const LIBRARY_NAME: &str = "libclang.so";

/// Directories tried, in order, when the dynamic loader's default search
/// path has no libclang.
///
/// Only macOS installs the toolchain outside the default path. The first
/// match wins: the current Xcode toolchain layout is listed before the
/// legacy CommandLineTools one.
#[cfg(target_os = "macos")]
pub const FALLBACK_DIRECTORIES: &[&str] = &[
    // Xcode >= 5
    "/Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/lib",
    // Xcode < 5
    "/Library/Developer/CommandLineTools/usr/lib",
];
/// Directories tried, in order, when the dynamic loader's default search
/// path has no libclang.
#[cfg(not(target_os = "macos"))]
pub const FALLBACK_DIRECTORIES: &[&str] = &[];

/// A loaded libclang together with its bound entry points.
///
/// The function pointers in [`Libclang::functions`] are only valid while
/// the library stays mapped, so the `Library` is stored alongside them and
/// never released for the life of this value.
pub struct Libclang {
    /// Keeps the shared library mapped.
    _library: Library,
    /// The bound entry points.
    pub functions: Functions,
    /// The fallback path the library was loaded from, if any. `None` when
    /// the dynamic loader found it on its default search path.
    pub path: Option<PathBuf>,
}

impl Libclang {
    /// Locates libclang, loads it, and binds the entry point table.
    ///
    /// # Errors
    ///
    /// - [`SysError::LibraryNotFound`] when no candidate path yields a
    ///   loadable library.
    /// - [`SysError::MissingSymbol`] when the loaded library does not
    ///   export a required entry point.
    pub fn load() -> SysResult<Self> {
        let (library, path) = locate()?;
        let functions = Functions::bind(&library)?;
        match &path {
            Some(p) => info!("loaded {} from {}", LIBRARY_NAME, p.display()),
            None => info!("loaded {} from the default search path", LIBRARY_NAME),
        }
        Ok(Self {
            _library: library,
            functions,
            path,
        })
    }
}

/// Tries the bare name first, then each fallback directory in order.
///
/// When every candidate fails, the error from the bare-name attempt is the
/// one propagated.
fn locate() -> SysResult<(Library, Option<PathBuf>)> {
    debug!("loading `{}` via the default search path", LIBRARY_NAME);
    let original = match unsafe { Library::new(LIBRARY_NAME) } {
        Ok(library) => return Ok((library, None)),
        Err(source) => source,
    };

    for directory in FALLBACK_DIRECTORIES {
        let candidate = Path::new(directory).join(LIBRARY_NAME);
        debug!("trying fallback `{}`", candidate.display());
        if let Ok(library) = unsafe { Library::new(&candidate) } {
            return Ok((library, Some(candidate)));
        }
    }

    Err(SysError::LibraryNotFound {
        name: LIBRARY_NAME,
        source: original,
    })
}
