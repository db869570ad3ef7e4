//! Main entry point for the unpath CLI.
//!
//! `unpath UNCMD CMD [ARGS...]` runs CMD with a PATH from which UNCMD has
//! been hidden. Exit status is 0 if CMD succeeded and 1 otherwise.

use std::ffi::OsString;
use unpath_cli::{app, cli};

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    let result = cli::parse_args(&args).and_then(|cli| {
        if let Err(e) = unpath::init_logger(cli.verbose, cli.quiet).install() {
            eprintln!("Warning: logging disabled: {e}");
        }
        app::execute(&cli)
    });

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.report();
            std::process::exit(e.exit_code());
        }
    }
}
