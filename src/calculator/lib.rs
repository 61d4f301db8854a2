//! # Calculator Architecture
//!
//! An additive command-line calculator: it takes an operation (`summa`/`add`
//! or `subtract`/`sub`) and three to five integers, and prints the reduced
//! result. Like any tool here it is a small library with a thin binary on
//! top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap entry point, help text, error and result output     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Raw tokens in, `Result<CmdResult>` out                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - parse → validate → evaluate, each a pure function        │
//! │  - Fail fast: the first error ends the run                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns
//! `Result<_, CalcError>`. It never writes to stdout/stderr and never calls
//! `std::process::exit`.
//!
//! ## Arithmetic
//!
//! Operands are `i32`. Sums and differences use checked arithmetic, so a
//! value leaving the `i32` range at any step is reported as
//! [`CalcError::Overflow`](error::CalcError::Overflow) instead of wrapping.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all calculations
//! - [`commands`]: Parser, validator and evaluator
//! - [`model`]: Core data types (`Operation`, `Invocation`, `Calculation`, `Computation`)
//! - [`error`]: Error types
//! - `cli`: Argument intake, help and output formatting for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
