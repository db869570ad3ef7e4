//! Shadow directories: a symlink mirror of a directory minus one entry.
//!
//! A shadow directory is created once per matching search-path directory and
//! is never removed by this crate. It lives until something else (usually the
//! OS temp reaper) cleans it up.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::{Error, Result};
use crate::probe::Listing;

const FALLBACK_PREFIX: &str = "unpath";

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "shadow directories require symlink support",
    ))
}

/// Name hint for the temporary directory: the source's final component.
fn prefix_for(dir: &Path) -> &OsStr {
    dir.file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| OsStr::new(FALLBACK_PREFIX))
}

/// Create a shadow of `listing` that omits the entry at `exclude`.
///
/// Every other entry becomes a symlink of the same name pointing at the
/// entry's absolute path in the original directory. Relative source
/// directories are resolved against the current working directory first.
///
/// # Errors
///
/// Returns [`Error::ShadowDirectory`] if the temporary directory cannot be
/// created, [`Error::Symlink`] if any link fails, and [`Error::CurrentDir`]
/// if a relative source directory cannot be made absolute.
pub fn build_shadow(listing: &Listing, exclude: usize, temp_root: &Path) -> Result<PathBuf> {
    let source_dir = std::path::absolute(listing.dir()).map_err(Error::CurrentDir)?;

    let shadow = Builder::new()
        .prefix(prefix_for(&source_dir))
        .tempdir_in(temp_root)
        .map_err(|source| Error::ShadowDirectory {
            source_dir: source_dir.clone(),
            source,
        })?
        .keep();

    for (index, name) in listing.names().iter().enumerate() {
        if index == exclude {
            continue;
        }
        let target = source_dir.join(name);
        let link = shadow.join(name);
        symlink(&target, &link).map_err(|source| Error::Symlink {
            link: link.clone(),
            target: target.clone(),
            source,
        })?;
    }

    log::info!(
        "shadowed {} as {} ({} links)",
        source_dir.display(),
        shadow.display(),
        listing.names().len().saturating_sub(1)
    );
    Ok(shadow)
}
