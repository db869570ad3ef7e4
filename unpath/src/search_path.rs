//! The search-path model: an ordered list of directory strings.
//!
//! Parsing and joining use the platform's own PATH-list rules, so empty
//! segments survive a round trip and no element is ever reordered, merged or
//! deduplicated.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the environment variable holding the search path.
pub const PATH_VAR: &str = "PATH";

/// An ordered sequence of search-path directories.
///
/// # Examples
///
/// ```
/// use unpath::SearchPath;
///
/// let path = SearchPath::parse("/usr/local/bin::/usr/bin");
/// assert_eq!(path.len(), 3);
/// assert!(path.dirs()[1].as_os_str().is_empty());
/// assert_eq!(path.join().unwrap(), "/usr/local/bin::/usr/bin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Split a PATH-style string into its directories.
    ///
    /// An empty string yields a single empty directory.
    pub fn parse(raw: impl AsRef<OsStr>) -> Self {
        Self {
            dirs: env::split_paths(raw.as_ref()).collect(),
        }
    }

    /// Read the current process's `PATH`. An unset variable counts as empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(env::var_os(PATH_VAR).unwrap_or_default())
    }

    /// Build a search path from already-split directories.
    #[must_use]
    pub fn from_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// The directories, in precedence order.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Number of elements, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// True only for a search path built from an empty directory list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Iterate over the directories in order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Join the directories back into one PATH-style string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JoinPaths`](crate::Error::JoinPaths) if an element
    /// contains the list separator.
    pub fn join(&self) -> Result<OsString> {
        Ok(env::join_paths(&self.dirs)?)
    }
}

impl From<Vec<PathBuf>> for SearchPath {
    fn from(dirs: Vec<PathBuf>) -> Self {
        Self::from_dirs(dirs)
    }
}
