//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Fake `bin` directories populated with shell scripts
//! - Command builder helpers that pin the shadow directory location

use assert_cmd::Command;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated scratch and shadow directories.
///
/// Shadow directories created by the binary under test land in
/// `shadow_dir`, so they are removed together with the environment.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Where the binary is told to create shadow directories
    pub shadow_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let shadow_dir = temp_path.join("shadows");
        fs::create_dir(&shadow_dir).expect("Failed to create shadow dir");

        Self {
            temp_dir,
            temp_path,
            shadow_dir,
        }
    }

    /// Get a bare command builder for the unpath binary.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("unpath").expect("Failed to find unpath binary");
        cmd.env_remove("UNPATH_LOG_MODE")
            .env_remove("UNPATH_INHERIT_STDIN");
        cmd
    }

    /// Get a command builder with shadows pinned inside this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("UNPATH_TMPDIR", &self.shadow_dir);
        cmd
    }

    /// Create a directory holding one executable script per `(name, body)`.
    pub fn bin_dir(&self, dir: &str, scripts: &[(&str, &str)]) -> PathBuf {
        let path = self.temp_path.join(dir);
        fs::create_dir_all(&path).expect("Failed to create bin dir");
        for (name, body) in scripts {
            write_script(&path.join(name), body);
        }
        path
    }

    /// Create a single executable script outside of any bin directory.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let dir = self.temp_path.join("scripts");
        fs::create_dir_all(&dir).expect("Failed to create scripts dir");
        let path = dir.join(name);
        write_script(&path, body);
        path
    }

    /// Create a plain data file.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Number of shadow directories created so far.
    pub fn shadow_count(&self) -> usize {
        fs::read_dir(&self.shadow_dir)
            .expect("Failed to read shadow dir")
            .count()
    }
}

/// The test process's own PATH.
#[allow(dead_code)]
pub fn system_path() -> OsString {
    std::env::var_os("PATH").unwrap_or_default()
}

/// `dirs` followed by the test process's own PATH.
#[allow(dead_code)]
pub fn path_with(dirs: &[&Path]) -> OsString {
    let mut all: Vec<PathBuf> = dirs.iter().map(|d| d.to_path_buf()).collect();
    all.extend(std::env::split_paths(&system_path()));
    std::env::join_paths(all).expect("Failed to join PATH")
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}
