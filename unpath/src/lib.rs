#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # unpath
//!
//! A library for hiding one command from a search path.
//!
//! For every directory in `PATH` that contains the hidden command, a shadow
//! directory is created holding symlinks to everything else in that
//! directory. The shadow replaces the original at the same position, so the
//! rest of the search path resolves exactly as before.
//!
//! ## Core Types
//!
//! - [`SearchPath`]: an ordered list of search-path directories
//! - [`probe()`] and [`Probe`]: looking for the hidden name in one directory
//! - [`build_shadow`]: the symlink mirror of a directory minus one entry
//! - [`rewrite()`] and [`RewrittenPath`]: the concurrent rewrite of a whole path
//! - [`launch`]: running a command under the rewritten path
//! - [`Config`] and [`ConfigBuilder`]: per-invocation settings
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use unpath::{rewrite, Config, SearchPath};
//! use std::ffi::OsStr;
//!
//! let path = SearchPath::parse("/does/not/exist::/also/missing");
//! let rewritten = rewrite(&path, OsStr::new("cat"), &Config::default()).unwrap();
//! assert_eq!(rewritten.entries().len(), 3);
//! assert_eq!(rewritten.join().unwrap(), "/does/not/exist::/also/missing");
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod probe;
pub mod rewrite;
pub mod search_path;
pub mod shadow;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, StdinMode};
pub use error::{Error, Result};
pub use exec::launch;
pub use logging::{init_logger, LogLevel, Logger};
pub use probe::{probe, Listing, Probe};
pub use rewrite::{rewrite, unpath_env, Rewritten, RewrittenPath};
pub use search_path::SearchPath;
pub use shadow::build_shadow;
