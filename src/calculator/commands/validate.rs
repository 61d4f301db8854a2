use crate::error::{CalcError, Result};
use crate::model::{Calculation, Invocation, Operation, OPERAND_COUNT};

/// Checks, in order: an operation was given, the operand count is within
/// bounds, and the operation is one we know.
pub fn run(invocation: Invocation) -> Result<Calculation> {
    let Invocation {
        operation,
        operands,
    } = invocation;

    // `-o ""` counts as no operation at all.
    let token = operation
        .filter(|token| !token.is_empty())
        .ok_or(CalcError::MissingOperation)?;

    if !OPERAND_COUNT.contains(&operands.len()) {
        return Err(CalcError::InvalidOperandCount(operands.len()));
    }

    match Operation::from_token(&token) {
        Operation::Unknown => Err(CalcError::UnknownOperation(token)),
        operation => Ok(Calculation::new(operation, operands)),
    }
}
