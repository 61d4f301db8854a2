//! # Command Layer
//!
//! Each stage of a calculation is a pure function over domain types:
//!
//! 1. [`parse`]: raw tokens → [`Parsed`] (an [`Invocation`] or a help request)
//! 2. [`validate`]: [`Invocation`] → [`Calculation`]
//! 3. [`evaluate`]: [`Calculation`] → [`Computation`]
//!
//! Every stage fails fast with a [`CalcError`](crate::error::CalcError) and
//! none of them touch stdout, stderr or the process exit code.
//!
//! [`Invocation`]: crate::model::Invocation
//! [`Calculation`]: crate::model::Calculation
//! [`Computation`]: crate::model::Computation

use crate::model::{Computation, Invocation};

pub mod evaluate;
pub mod parse;
pub mod validate;

/// Outcome of the argument scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Help,
    Invocation(Invocation),
}

/// What the API hands back to a UI client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdResult {
    Help,
    Computed(Computation),
}

impl CmdResult {
    pub fn computation(&self) -> Option<&Computation> {
        match self {
            CmdResult::Computed(computation) => Some(computation),
            CmdResult::Help => None,
        }
    }
}
