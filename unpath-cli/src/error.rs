//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors together with the two failures only
//! the CLI knows about: bad arguments and a command that ran but failed.

use crate::cli::usage_text;
use std::fmt;
use std::process::ExitStatus;
use unpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped): shadow creation or launch failure.
    Library(LibError),

    /// Missing or unrecognized arguments.
    Usage {
        /// Name the program was invoked as.
        program: String,
        /// Parser message for anything other than missing arguments.
        detail: Option<String>,
    },

    /// The command started but did not exit successfully.
    Subprocess(ExitStatus),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure exits with 1. A failing command's own exit code is not
    /// forwarded.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(_) | CliError::Usage { .. } | CliError::Subprocess(_) => 1,
        }
    }

    /// Write this error to stderr the way the user should see it.
    ///
    /// A failed command has already written its own diagnostics, so nothing
    /// extra is printed for it.
    pub fn report(&self) {
        match self {
            CliError::Subprocess(status) => log::debug!("command exited with {status}"),
            CliError::Usage { .. } => eprintln!("{self}"),
            CliError::Library(_) => eprintln!("Error: {self}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Usage { program, detail } => {
                if let Some(detail) = detail {
                    writeln!(f, "{detail}\n")?;
                }
                write!(f, "{}", usage_text(program))
            }
            CliError::Subprocess(status) => write!(f, "command failed: {status}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
