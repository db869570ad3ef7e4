//! Directory probing: does a search-path directory contain the hidden name?

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// The entries of one search-path directory, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    dir: PathBuf,
    names: Vec<OsString>,
}

impl Listing {
    /// Build a listing from names in any order.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, mut names: Vec<OsString>) -> Self {
        names.sort_unstable();
        Self {
            dir: dir.into(),
            names,
        }
    }

    /// The directory that was listed.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Entry names, sorted.
    #[must_use]
    pub fn names(&self) -> &[OsString] {
        &self.names
    }

    /// Full path of the entry at `index`, joined onto the listed directory.
    #[must_use]
    pub fn entry_path(&self, index: usize) -> Option<PathBuf> {
        self.names.get(index).map(|name| self.dir.join(name))
    }

    /// Position of `name` in the sorted listing.
    #[must_use]
    pub fn position(&self, name: &OsStr) -> Option<usize> {
        self.names
            .binary_search_by(|entry| entry.as_os_str().cmp(name))
            .ok()
    }
}

/// Outcome of probing one directory for the hidden command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// The directory is unreadable or has no entry with that name.
    Absent,
    /// The name is present at `index` in `listing`.
    Found {
        /// The whole directory listing, reused when shadowing.
        listing: Listing,
        /// Index of the hidden entry within `listing`.
        index: usize,
    },
}

impl Probe {
    /// True if the hidden name was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// List `dir` and look for an entry called `name`.
///
/// A directory that cannot be read (missing, not a directory, no permission,
/// or the empty string) is reported as [`Probe::Absent`], never as an error:
/// stale search-path entries are common and must not abort a rewrite.
///
/// # Examples
///
/// ```
/// use unpath::probe::{probe, Probe};
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// assert_eq!(probe(Path::new("/definitely/not/here"), OsStr::new("cat")), Probe::Absent);
/// ```
pub fn probe(dir: &Path, name: &OsStr) -> Probe {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping unreadable directory {:?}: {err}", dir);
            return Probe::Absent;
        }
    };

    let names = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.file_name()))
        .collect();
    let listing = Listing::new(dir, names);

    match listing.position(name) {
        Some(index) => {
            log::debug!("found {:?} in {}", name, dir.display());
            Probe::Found { listing, index }
        }
        None => Probe::Absent,
    }
}
