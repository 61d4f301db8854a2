//! # API Facade
//!
//! The single entry point for UI clients. [`calculate`] strings the command
//! stages together and returns a structured [`CmdResult`]; it never prints
//! and never exits.

use crate::commands::{self, CmdResult, Parsed};
use crate::error::Result;

/// Runs one calculation over raw arguments (program name excluded).
pub fn calculate<I, S>(args: I) -> Result<CmdResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let invocation = match commands::parse::run(args)? {
        Parsed::Help => return Ok(CmdResult::Help),
        Parsed::Invocation(invocation) => invocation,
    };

    let calculation = commands::validate::run(invocation)?;
    let computation = commands::evaluate::run(&calculation)?;
    Ok(CmdResult::Computed(computation))
}
