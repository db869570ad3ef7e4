//! Top-level control flow: rewrite PATH, then run the command under it.

use crate::cli::Cli;
use crate::error::CliError;
use std::path::MAIN_SEPARATOR;

/// Hide `cli.uncmd` from `PATH` and run `cli.command` with the result.
///
/// Nothing is launched if building a shadow directory fails.
pub fn execute(cli: &Cli) -> Result<(), CliError> {
    let Some((program, args)) = cli.command.split_first() else {
        return Err(CliError::Usage {
            program: cli.program.clone(),
            detail: None,
        });
    };

    if cli.uncmd.to_string_lossy().contains(MAIN_SEPARATOR) {
        log::warn!(
            "{:?} contains a path separator and will not match any PATH entry",
            cli.uncmd
        );
    }

    let config = cli.config();
    let path = unpath::unpath_env(&cli.uncmd, &config)?;
    let status = unpath::launch(program, args, &path, &config)?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::Subprocess(status))
    }
}
