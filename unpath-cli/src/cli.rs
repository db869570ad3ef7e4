//! CLI structure and argument parsing.
//!
//! The command line is `unpath [OPTIONS] UNCMD CMD [ARGS...]`. Options are
//! only recognized before `UNCMD`; everything from `CMD` onward is passed to
//! the command untouched, including arguments that look like options.

use crate::error::CliError;
use clap::builder::FalseyValueParser;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use unpath::{Config, ConfigBuilder, StdinMode};

const ABOUT: &str = "unpath runs CMD with a modified PATH that does not contain UNCMD.";

const EXAMPLES: &str = "Examples:
  unpath cat ./script script-arg

  unpath cat CMD subcmd-arg

  unpath cat unpath env CMD";

/// Program name used when argv[0] is missing.
pub const DEFAULT_PROGRAM: &str = "unpath";

/// Long options that consume the following argument as their value.
const VALUE_OPTIONS: &[&str] = &["--tmpdir"];

/// End-of-options marker.
const ESCAPE: &str = "--";

/// Run a command with another command hidden from its PATH.
#[derive(Parser, Debug)]
#[command(name = "unpath")]
#[command(version, about = ABOUT, long_about = None)]
#[command(override_usage = "unpath [OPTIONS] UNCMD CMD [ARGS...]")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Create shadow directories under this directory
    #[arg(long, value_name = "PATH", env = "UNPATH_TMPDIR")]
    pub tmpdir: Option<PathBuf>,

    /// Connect the command's stdin to this process's stdin
    #[arg(long, env = "UNPATH_INHERIT_STDIN", value_parser = FalseyValueParser::new())]
    pub inherit_stdin: bool,

    /// The command to hide from PATH
    #[arg(value_name = "UNCMD")]
    pub uncmd: OsString,

    /// The command to run with the modified PATH, followed by its arguments
    #[arg(
        value_name = "CMD",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,

    /// Name this program was invoked as, for usage messages.
    #[arg(skip)]
    pub program: String,
}

impl Cli {
    /// Runtime configuration selected by the flags.
    #[must_use]
    pub fn config(&self) -> Config {
        let stdin = if self.inherit_stdin {
            StdinMode::Inherit
        } else {
            StdinMode::Null
        };
        ConfigBuilder::new()
            .with_optional_temp_root(self.tmpdir.clone())
            .with_stdin(stdin)
            .build()
    }
}

/// The usage text printed when arguments are missing.
///
/// `program` replaces the program name in the usage line.
#[must_use]
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} UNCMD CMD [ARGS...]

{ABOUT}

Arguments:
  UNCMD the command to hide from PATH
  CMD   the command to run with the modified PATH

{EXAMPLES}"
    )
}

/// Index of `UNCMD` in `args`, and whether `--` came before it.
///
/// Returns `None` when the options run to the end of `args`.
fn uncmd_position(args: &[OsString]) -> Option<(usize, bool)> {
    let mut index = 1;
    while let Some(arg) = args.get(index) {
        let text = arg.to_string_lossy();
        if text == ESCAPE {
            return args.get(index + 1).map(|_| (index + 1, true));
        }
        if text == "-" || !text.starts_with('-') {
            return Some((index, false));
        }
        index += if VALUE_OPTIONS.contains(&text.as_ref()) { 2 } else { 1 };
    }
    None
}

/// Argument vector for clap, with everything after `UNCMD` escaped.
fn escape_command(args: &[OsString]) -> Vec<OsString> {
    match uncmd_position(args) {
        Some((position, false)) => {
            let (head, command) = args.split_at(position + 1);
            let mut escaped = head.to_vec();
            escaped.push(OsString::from(ESCAPE));
            escaped.extend_from_slice(command);
            escaped
        }
        _ => args.to_vec(),
    }
}

/// Parse a full argument vector, argv[0] included.
///
/// Options are only read up to `UNCMD`. `--help` and `--version` print and
/// exit the process with status 0, as clap normally does. Every other parse
/// failure becomes [`CliError::Usage`].
pub fn parse_args(args: &[OsString]) -> Result<Cli, CliError> {
    let program = args
        .first()
        .map_or_else(|| DEFAULT_PROGRAM.to_string(), |arg| arg.to_string_lossy().into_owned());

    match Cli::try_parse_from(escape_command(args)) {
        Ok(mut cli) => {
            cli.program = program;
            Ok(cli)
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            ErrorKind::MissingRequiredArgument
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Err(CliError::Usage {
                program,
                detail: None,
            }),
            _ => Err(CliError::Usage {
                program,
                detail: err.to_string().lines().next().map(str::to_string),
            }),
        },
    }
}
