//! Runtime configuration for a single unpath invocation.
//!
//! There is no configuration file. Everything here comes from CLI flags or
//! their environment-variable fallbacks, assembled with [`ConfigBuilder`].

use std::path::{Path, PathBuf};

/// How the launched command's standard input is connected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdinMode {
    /// The child reads from the null device.
    #[default]
    Null,
    /// The child shares this process's standard input.
    Inherit,
}

/// Settings for rewriting the search path and launching the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Parent directory for shadow directories. `None` uses the OS temp dir.
    pub temp_root: Option<PathBuf>,
    /// Standard input wiring for the launched command.
    pub stdin: StdinMode,
}

impl Config {
    /// Directory under which shadow directories are created.
    #[must_use]
    pub fn temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Builder for [`Config`].
///
/// # Examples
///
/// ```
/// use unpath::{ConfigBuilder, StdinMode};
///
/// let config = ConfigBuilder::new()
///     .with_temp_root("/var/tmp")
///     .with_stdin(StdinMode::Inherit)
///     .build();
/// assert_eq!(config.temp_root(), std::path::PathBuf::from("/var/tmp"));
/// assert_eq!(config.stdin, StdinMode::Inherit);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create shadow directories under `root` instead of the OS temp dir.
    #[must_use]
    pub fn with_temp_root(mut self, root: impl AsRef<Path>) -> Self {
        self.config.temp_root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Like [`with_temp_root`](Self::with_temp_root), but a `None` keeps the default.
    #[must_use]
    pub fn with_optional_temp_root(mut self, root: Option<PathBuf>) -> Self {
        if root.is_some() {
            self.config.temp_root = root;
        }
        self
    }

    /// Choose how the command's standard input is wired.
    #[must_use]
    pub fn with_stdin(mut self, stdin: StdinMode) -> Self {
        self.config.stdin = stdin;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
