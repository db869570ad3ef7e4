//! Build script for unpath-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::builder::FalseyValueParser;
use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("unpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a command with another command hidden from its PATH")
        .long_about(
            "unpath runs CMD with a modified PATH that does not contain UNCMD. Every PATH \
             directory containing UNCMD is replaced by a temporary directory of symlinks to \
             its other entries.",
        )
        .override_usage("unpath [OPTIONS] UNCMD CMD [ARGS...]")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tmpdir")
                .long("tmpdir")
                .help("Create shadow directories under this directory")
                .value_name("PATH")
                .env("UNPATH_TMPDIR"),
        )
        .arg(
            Arg::new("inherit-stdin")
                .long("inherit-stdin")
                .help("Connect the command's stdin to this process's stdin")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("UNPATH_INHERIT_STDIN"),
        )
        .arg(
            Arg::new("UNCMD")
                .help("The command to hide from PATH")
                .required(true),
        )
        .arg(
            Arg::new("CMD")
                .help("The command to run with the modified PATH, followed by its arguments")
                .required(true)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("unpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
