use super::setup::print_help;
use super::styles::{ERROR_STYLE, HINT_STYLE, RESULT_STYLE};
use calculator::commands::parse::OPERATION_FLAGS;
use calculator::error::CalcError;
use calculator::model::{Computation, Operation};

/// Names of the operations offered when an unknown one is given.
const AVAILABLE_OPERATIONS: [Operation; 2] = [Operation::Sum, Operation::Subtract];

pub(super) fn render_computation(computation: &Computation) -> String {
    let title = match computation.operation {
        Operation::Sum => "сложения",
        Operation::Subtract => "вычитания",
        Operation::Unknown => "операции",
    };
    format!(
        "Результат {}: {} = {}",
        title,
        computation.expression(),
        computation.result
    )
}

/// Second line printed under an error, if the error has one.
pub(super) fn error_hint(error: &CalcError) -> Option<String> {
    match error {
        CalcError::MissingOperation => Some(format!(
            "Используйте {} для указания операции",
            OPERATION_FLAGS.join(" или ")
        )),
        CalcError::InvalidOperandCount(count) => Some(format!("Получено: {count} операнд(ов)")),
        CalcError::UnknownOperation(_) => Some(format!(
            "Доступные операции: {}",
            AVAILABLE_OPERATIONS.map(|op| op.to_string()).join(", ")
        )),
        _ => None,
    }
}

/// Whether the help text follows the error message.
pub(super) fn shows_help(error: &CalcError) -> bool {
    !matches!(
        error,
        CalcError::MissingFlagValue(_) | CalcError::Overflow(_)
    )
}

pub(super) fn print_computation(computation: &Computation) {
    println!("{}", RESULT_STYLE.apply_to(render_computation(computation)));
}

pub(super) fn print_error(error: &CalcError) {
    eprintln!("{}", ERROR_STYLE.apply_to(error));
    if let Some(hint) = error_hint(error) {
        eprintln!("{}", HINT_STYLE.apply_to(hint));
    }
    if shows_help(error) {
        eprintln!();
        print_help();
    }
}
