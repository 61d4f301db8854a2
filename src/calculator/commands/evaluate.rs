use crate::error::{CalcError, Result};
use crate::model::{Calculation, Computation, Operand, Operation};

/// Reduces the operands in encounter order with checked arithmetic.
pub fn run(calculation: &Calculation) -> Result<Computation> {
    let operation = calculation.operation();
    let operands = calculation.operands();

    let result = match operation {
        Operation::Sum => sum(operands),
        Operation::Subtract => subtract(operands),
        Operation::Unknown => {
            return Err(CalcError::UnknownOperation(operation.to_string()));
        }
    }
    .ok_or(CalcError::Overflow(operation))?;

    Ok(Computation {
        operation,
        operands: operands.to_vec(),
        result,
    })
}

fn sum(operands: &[Operand]) -> Option<Operand> {
    operands
        .iter()
        .try_fold(0 as Operand, |acc, &operand| acc.checked_add(operand))
}

fn subtract(operands: &[Operand]) -> Option<Operand> {
    let (&first, rest) = operands.split_first()?;
    rest.iter()
        .try_fold(first, |acc, &operand| acc.checked_sub(operand))
}
