//! Error types for the unpath library.
//!
//! Only conditions that abort a rewrite (or the launch that follows it) are
//! represented here. An unreadable search-path directory is not an error: the
//! prober treats it as a directory that does not contain the hidden command.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an unpath error.
///
/// # Examples
///
/// ```
/// use unpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the unpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A shadow directory could not be created for a search-path directory.
    #[error("cannot create shadow directory for {}: {source}", source_dir.display())]
    ShadowDirectory {
        /// The search-path directory being shadowed.
        source_dir: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A symlink inside a shadow directory could not be created.
    #[error("cannot link {} -> {}: {source}", link.display(), target.display())]
    Symlink {
        /// The link that was being created.
        link: PathBuf,
        /// The path the link should have pointed at.
        target: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The rewritten directories could not be joined into a search path.
    #[error("cannot build search path: {reason}")]
    JoinPaths {
        /// Why joining failed.
        reason: String,
    },

    /// The working directory was needed to absolutize a relative directory.
    #[error("cannot resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The command could not be started.
    #[error("{}: {source}", program.to_string_lossy())]
    Spawn {
        /// The program that failed to start.
        program: OsString,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::env::JoinPathsError> for Error {
    fn from(err: std::env::JoinPathsError) -> Self {
        Self::JoinPaths {
            reason: err.to_string(),
        }
    }
}

impl Error {
    /// Check if the error came from building a shadow directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use unpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ShadowDirectory {
    ///     source_dir: PathBuf::from("/usr/bin"),
    ///     source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_shadow_failure());
    /// ```
    #[must_use]
    pub fn is_shadow_failure(&self) -> bool {
        matches!(self, Self::ShadowDirectory { .. } | Self::Symlink { .. })
    }

    /// Check if the error came from starting the subprocess.
    #[must_use]
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. })
    }
}
