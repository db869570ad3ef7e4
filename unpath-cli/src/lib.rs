//! Library exports for unpath-cli.
//!
//! The binary is a thin wrapper over these modules; exporting them lets the
//! tests drive argument parsing directly.

pub mod app;
pub mod cli;
pub mod error;

pub use cli::Cli;
