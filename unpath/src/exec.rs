//! Launching the command under the rewritten search path.

use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus, Stdio};

use crate::config::{Config, StdinMode};
use crate::error::{Error, Result};
use crate::search_path::PATH_VAR;

/// Run `program` with `args`, its `PATH` replaced by `path`.
///
/// A bare `program` name is resolved against the new `PATH`, not the
/// caller's. All other environment variables are inherited, stdout and
/// stderr go straight to this process's streams, and stdin follows
/// [`Config::stdin`]. Blocks until the command exits.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the command cannot be started. A command that
/// starts and then fails is not an error: inspect the returned status.
pub fn launch(
    program: &OsStr,
    args: &[OsString],
    path: &OsStr,
    config: &Config,
) -> Result<ExitStatus> {
    let stdin = match config.stdin {
        StdinMode::Null => Stdio::null(),
        StdinMode::Inherit => Stdio::inherit(),
    };

    log::debug!("launching {:?} with {} argument(s)", program, args.len());
    Command::new(program)
        .args(args)
        .env(PATH_VAR, path)
        .stdin(stdin)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Spawn {
            program: program.to_os_string(),
            source,
        })
}
