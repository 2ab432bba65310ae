//! The process-wide libclang instance.

use crate::error::Result;
use crate::string::ForeignString;
use clangdb_sys::{Functions, Libclang};
use std::sync::OnceLock;
use tracing::info;

static INSTANCE: OnceLock<Clang> = OnceLock::new();

/// The loaded libclang, bound once per process.
///
/// The library handle is immutable after load and shared read-only; all
/// mutable state lives in the per-resource wrappers.
pub struct Clang {
    inner: Libclang,
}

impl Clang {
    /// Returns the process-wide instance, loading and binding libclang on
    /// the first call.
    ///
    /// A failed load leaves the slot empty, so a later call retries — e.g.
    /// after the user installs a toolchain mid-session.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::LibraryNotFound`] when no candidate path yields a
    ///   loadable library.
    /// - [`crate::Error::MissingSymbol`] when the library is too old or too
    ///   new to export the bound surface.
    pub fn get() -> Result<&'static Clang> {
        if let Some(clang) = INSTANCE.get() {
            return Ok(clang);
        }
        let loaded = Libclang::load()?;
        let clang = INSTANCE.get_or_init(|| Clang { inner: loaded });
        info!("libclang ready ({})", clang.version());
        Ok(clang)
    }

    /// True when libclang can be loaded on this host.
    ///
    /// Embedders use this to degrade gracefully (feature disabled, not a
    /// crash) instead of surfacing a load error to the user.
    pub fn is_available() -> bool {
        Self::get().is_ok()
    }

    /// The clang version string, e.g. `"clang version 17.0.6"`.
    pub fn version(&'static self) -> String {
        let raw = unsafe { (self.functions().clang_getClangVersion)() };
        ForeignString::new(self, raw).into_string()
    }

    /// The bound entry point table.
    pub(crate) fn functions(&self) -> &Functions {
        &self.inner.functions
    }
}
