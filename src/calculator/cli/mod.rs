//! # CLI Behavior
//!
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. See the crate-level documentation in [`calculator`] for
//! the overall layering.
//!
//! - Running `calculator` with no arguments prints the help text.
//! - `-h`/`--help` prints the help text and ignores everything after it.
//! - Any failure prints one error line (and sometimes a hint) to stderr;
//!   most failures are followed by the help text on stdout.
//!
//! ## Module Structure
//!
//! - `commands`: Raw token intake, dispatch and error reporting (exit 1)
//! - `render`: Result lines, error hints, printing
//! - `setup`: clap command description and help text
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::{report, run};
