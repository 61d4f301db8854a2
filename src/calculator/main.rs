//! The binary only invokes `cli::run()`; `cli::report()` prints a failure and
//! exits with code 1. Everything else lives in the library (`lib.rs`) and the
//! `cli` module.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report(&e);
    }
}
