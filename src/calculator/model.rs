use std::fmt;
use std::ops::RangeInclusive;

pub type Operand = i32;

pub const MIN_OPERANDS: usize = 3;
pub const MAX_OPERANDS: usize = 5;

pub const OPERAND_COUNT: RangeInclusive<usize> = MIN_OPERANDS..=MAX_OPERANDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Sum,
    Subtract,
    Unknown,
}

impl Operation {
    /// Resolves an operation token. Matching is exact and case-sensitive;
    /// anything unrecognised becomes `Unknown` so the error can be reported
    /// after the operand checks.
    pub fn from_token(token: &str) -> Self {
        match token {
            "summa" | "add" => Operation::Sum,
            "subtract" | "sub" => Operation::Subtract,
            _ => Operation::Unknown,
        }
    }

    /// Infix symbol used when rendering an expression.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Sum => "+",
            Operation::Subtract => "-",
            Operation::Unknown => "?",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Sum => "summa",
            Operation::Subtract => "subtract",
            Operation::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Arguments collected by a single left-to-right scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub operation: Option<String>,
    pub operands: Vec<Operand>,
}

/// An invocation that passed validation: the operation is known and the
/// operand count is within bounds. Only `commands::validate` builds one
/// outside of tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    operation: Operation,
    operands: Vec<Operand>,
}

impl Calculation {
    pub(crate) fn new(operation: Operation, operands: Vec<Operand>) -> Self {
        debug_assert!(OPERAND_COUNT.contains(&operands.len()));
        Self {
            operation,
            operands,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    pub operation: Operation,
    pub operands: Vec<Operand>,
    pub result: Operand,
}

impl Computation {
    /// The operands joined by the operation's symbol, e.g. `5 + 10 + 15`.
    pub fn expression(&self) -> String {
        let separator = format!(" {} ", self.operation.symbol());
        self.operands
            .iter()
            .map(|operand| operand.to_string())
            .collect::<Vec<_>>()
            .join(&separator)
    }
}
