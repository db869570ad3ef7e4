//! Search-path rewriting: hide one command name from every directory.
//!
//! Each directory is probed (and shadowed, if needed) on its own scoped
//! thread. Every thread owns exactly one slot of a pre-sized result vector,
//! so the outcome lines up with the input position no matter which thread
//! finishes first, and no locking is needed.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::thread;

use crate::config::Config;
use crate::error::Result;
use crate::probe::{probe, Probe};
use crate::search_path::SearchPath;
use crate::shadow::build_shadow;

/// What became of one search-path directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewritten {
    /// The directory did not contain the hidden name, or could not be read.
    Unchanged(PathBuf),
    /// The directory was replaced by a shadow directory.
    Shadowed {
        /// The directory from the original search path.
        original: PathBuf,
        /// The shadow directory standing in for it.
        shadow: PathBuf,
    },
}

impl Rewritten {
    /// The directory that goes into the rewritten search path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        match self {
            Self::Unchanged(dir) => dir,
            Self::Shadowed { shadow, .. } => shadow,
        }
    }

    /// The directory this entry came from.
    #[must_use]
    pub fn original(&self) -> &Path {
        match self {
            Self::Unchanged(dir) => dir,
            Self::Shadowed { original, .. } => original,
        }
    }

    /// True if a shadow directory replaced the original.
    #[must_use]
    pub fn is_shadowed(&self) -> bool {
        matches!(self, Self::Shadowed { .. })
    }
}

/// A search path with the hidden command removed, aligned position for
/// position with the search path it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenPath {
    entries: Vec<Rewritten>,
}

impl RewrittenPath {
    /// Per-position outcomes, in the original order.
    #[must_use]
    pub fn entries(&self) -> &[Rewritten] {
        &self.entries
    }

    /// Number of directories that were replaced by shadows.
    #[must_use]
    pub fn shadow_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_shadowed()).count()
    }

    /// The rewritten directories as a [`SearchPath`].
    #[must_use]
    pub fn to_search_path(&self) -> SearchPath {
        SearchPath::from_dirs(self.entries.iter().map(|e| e.dir().to_path_buf()).collect())
    }

    /// Join the rewritten directories into a PATH-style string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JoinPaths`](crate::Error::JoinPaths) if a shadow
    /// directory's path contains the list separator.
    pub fn join(&self) -> Result<OsString> {
        self.to_search_path().join()
    }
}

fn rewrite_dir(dir: &Path, hidden: &OsStr, temp_root: &Path) -> Result<Rewritten> {
    match probe(dir, hidden) {
        Probe::Found { listing, index } => Ok(Rewritten::Shadowed {
            original: dir.to_path_buf(),
            shadow: build_shadow(&listing, index, temp_root)?,
        }),
        Probe::Absent => Ok(Rewritten::Unchanged(dir.to_path_buf())),
    }
}

/// Rewrite `search_path` so that `hidden` cannot be resolved through it.
///
/// All directories are processed concurrently and every worker is joined
/// before any result is inspected. If several directories fail, the error
/// reported is the one from the earliest position in the search path.
///
/// # Errors
///
/// Returns the first shadow-building error by search-path position.
///
/// # Examples
///
/// ```
/// use unpath::{rewrite, Config, SearchPath};
/// use std::ffi::OsStr;
///
/// let path = SearchPath::parse("/no/such/dir:");
/// let rewritten = rewrite(&path, OsStr::new("cat"), &Config::default()).unwrap();
/// assert_eq!(rewritten.shadow_count(), 0);
/// assert_eq!(rewritten.join().unwrap(), "/no/such/dir:");
/// ```
pub fn rewrite(
    search_path: &SearchPath,
    hidden: &OsStr,
    config: &Config,
) -> Result<RewrittenPath> {
    let temp_root = config.temp_root();

    let mut slots: Vec<Result<Rewritten>> = search_path
        .iter()
        .map(|dir| Ok(Rewritten::Unchanged(dir.to_path_buf())))
        .collect();

    thread::scope(|scope| {
        for (slot, dir) in slots.iter_mut().zip(search_path.iter()) {
            let temp_root = temp_root.as_path();
            scope.spawn(move || {
                *slot = rewrite_dir(dir, hidden, temp_root);
            });
        }
    });

    let entries = slots.into_iter().collect::<Result<Vec<_>>>()?;
    let rewritten = RewrittenPath { entries };
    log::debug!(
        "rewrote {} search-path entries, {} shadowed",
        rewritten.entries.len(),
        rewritten.shadow_count()
    );
    Ok(rewritten)
}

/// Rewrite the current process's `PATH` to hide `hidden`.
///
/// This is the one-call entry point used by the CLI: it reads `PATH`
/// (unset counts as empty), rewrites it, and returns the joined result.
///
/// # Errors
///
/// Propagates errors from [`rewrite`] and from joining the result.
pub fn unpath_env(hidden: &OsStr, config: &Config) -> Result<OsString> {
    let joined = rewrite(&SearchPath::from_env(), hidden, config)?.join()?;
    log::info!("rewritten PATH: {}", joined.to_string_lossy());
    Ok(joined)
}
