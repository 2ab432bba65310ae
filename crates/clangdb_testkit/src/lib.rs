//! # clangdb_testkit
//!
//! Test utilities for the clangdb crates.
//!
//! This crate provides:
//! - On-disk `compile_commands.json` fixtures in temporary directories
//! - A libclang availability guard for tests that need a real toolchain

#![warn(missing_docs)]

pub mod fixtures;

pub use fixtures::{CommandEntry, FixtureDatabase};

/// True when libclang can be loaded on this host.
///
/// Integration tests that drive a real libclang call this first and return
/// early when it is missing, so the suite passes on hosts without a clang
/// toolchain.
pub fn libclang_available() -> bool {
    if clangdb_core::Clang::is_available() {
        true
    } else {
        eprintln!("skipping: libclang not found on this host");
        false
    }
}
