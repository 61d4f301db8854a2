//! # CLI Dispatch
//!
//! `run()` hands the raw tokens to the API and prints what comes back;
//! `report()` turns a failed run into the error message plus, for most
//! errors, the help text, and exits with code 1. Error messages go to
//! stderr, help and results go to stdout.
//!
//! Tokens come straight from `std::env::args_os()` rather than through clap:
//! a `--` or a non-UTF-8 token is an operand like any other and must reach
//! the scanner.

use super::render::{print_computation, print_error};
use super::setup::print_help;
use calculator::api;
use calculator::commands::CmdResult;
use calculator::error::{CalcError, Result};
use std::ffi::OsString;

pub fn run() -> Result<()> {
    let args = to_tokens(std::env::args_os().skip(1));

    match api::calculate(&args)? {
        CmdResult::Help => print_help(),
        CmdResult::Computed(computation) => print_computation(&computation),
    }

    Ok(())
}

pub fn report(error: &CalcError) -> ! {
    print_error(error);
    std::process::exit(1);
}

/// Non-UTF-8 bytes become U+FFFD, so such a token fails as a non-number.
fn to_tokens<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
