//! Compilation-database fixtures.
//!
//! Writes syntactically valid `compile_commands.json` stores into
//! temporary directories, in the shape CMake emits.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// One entry of a `compile_commands.json` store.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEntry {
    /// Working directory for the compilation.
    pub directory: String,
    /// Argument vector, compiler executable first.
    pub arguments: Vec<String>,
    /// The source file the entry compiles.
    pub file: String,
}

impl CommandEntry {
    /// Builds an entry from string slices.
    pub fn new(directory: &str, arguments: &[&str], file: &str) -> Self {
        Self {
            directory: directory.to_owned(),
            arguments: arguments.iter().map(|a| (*a).to_owned()).collect(),
            file: file.to_owned(),
        }
    }
}

/// A temporary directory holding a `compile_commands.json` store.
///
/// The directory is deleted when this value drops.
pub struct FixtureDatabase {
    temp_dir: TempDir,
}

impl FixtureDatabase {
    /// Writes `entries` as a compile-commands store in a fresh temporary
    /// directory.
    pub fn new(entries: &[CommandEntry]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let json = serde_json::to_string_pretty(entries).expect("Failed to serialize entries");
        fs::write(temp_dir.path().join("compile_commands.json"), json)
            .expect("Failed to write compile_commands.json");
        Self { temp_dir }
    }

    /// A temporary directory with no store in it at all.
    pub fn empty_directory() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// The directory containing the store.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
