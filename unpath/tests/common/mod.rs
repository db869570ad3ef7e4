//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for search-path directories
//! populated with fake executables.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unpath::{Config, ConfigBuilder};

/// A scratch area holding fake `bin` directories and a private temp root
/// for shadow directories.
///
/// Everything, shadows included, is removed when the fixture is dropped.
pub struct BinFixture {
    root: TempDir,
    shadows: PathBuf,
}

#[allow(dead_code)]
impl BinFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let shadows = root.path().join("shadows");
        fs::create_dir(&shadows).expect("Failed to create shadow root");
        Self { root, shadows }
    }

    /// Creates a directory `name` containing an executable script per entry.
    pub fn bin_dir(&self, name: &str, entries: &[&str]) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create bin dir");
        for entry in entries {
            write_executable(&dir.join(entry), &format!("echo {entry}"));
        }
        dir
    }

    /// A path under the fixture that does not exist.
    pub fn missing_dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Directory the fixture's shadows are created in.
    pub fn shadow_root(&self) -> &Path {
        &self.shadows
    }

    /// Config that places shadows inside the fixture.
    pub fn config(&self) -> Config {
        ConfigBuilder::new().with_temp_root(&self.shadows).build()
    }
}

/// Writes a `/bin/sh` script with mode 0755.
pub fn write_executable(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

/// Sorted entry names of `dir`, as strings.
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
