use crate::commands::Parsed;
use crate::error::{CalcError, Result};
use crate::model::{Invocation, Operand};
use std::num::IntErrorKind;

pub const OPERATION_FLAGS: [&str; 2] = ["-o", "--operation"];
pub const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// Scans the arguments (program name excluded) once, left to right.
///
/// `-o`/`--operation` takes the next token verbatim, `-h`/`--help` stops the
/// scan, and every other token must be an integer. The first failure ends
/// the scan.
pub fn run<I, S>(args: I) -> Result<Parsed>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter().peekable();
    if args.peek().is_none() {
        return Ok(Parsed::Help);
    }

    let mut invocation = Invocation::default();

    while let Some(raw) = args.next() {
        let arg = raw.as_ref();

        if OPERATION_FLAGS.contains(&arg) {
            let value = args
                .next()
                .ok_or_else(|| CalcError::MissingFlagValue(arg.to_string()))?;
            invocation.operation = Some(value.as_ref().to_string());
        } else if HELP_FLAGS.contains(&arg) {
            return Ok(Parsed::Help);
        } else {
            invocation.operands.push(parse_operand(arg)?);
        }
    }

    Ok(Parsed::Invocation(invocation))
}

pub fn parse_operand(token: &str) -> Result<Operand> {
    token.parse::<Operand>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CalcError::OutOfRange(token.to_string())
        }
        _ => CalcError::NotANumber(token.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> Invocation {
        match run(args).unwrap() {
            Parsed::Invocation(invocation) => invocation,
            Parsed::Help => panic!("expected an invocation for {:?}", args),
        }
    }

    #[test]
    fn empty_arguments_request_help() {
        let args: [&str; 0] = [];
        assert_eq!(run(args).unwrap(), Parsed::Help);
    }

    #[test]
    fn collects_operation_and_operands_in_order() {
        let parsed = invocation(&["-o", "summa", "5", "10", "15"]);
        assert_eq!(parsed.operation.as_deref(), Some("summa"));
        assert_eq!(parsed.operands, vec![5, 10, 15]);
    }

    #[test]
    fn operation_flag_may_follow_operands() {
        let parsed = invocation(&["1", "2", "--operation", "sub", "3"]);
        assert_eq!(parsed.operation.as_deref(), Some("sub"));
        assert_eq!(parsed.operands, vec![1, 2, 3]);
    }

    #[test]
    fn later_operation_flag_wins() {
        let parsed = invocation(&["-o", "add", "-o", "sub", "1", "2", "3"]);
        assert_eq!(parsed.operation.as_deref(), Some("sub"));
    }

    #[test]
    fn operation_flag_takes_next_token_verbatim() {
        let parsed = invocation(&["-o", "-5", "1"]);
        assert_eq!(parsed.operation.as_deref(), Some("-5"));
        assert_eq!(parsed.operands, vec![1]);

        let parsed = invocation(&["-o", "--help"]);
        assert_eq!(parsed.operation.as_deref(), Some("--help"));
    }

    #[test]
    fn signed_operands_are_accepted() {
        let parsed = invocation(&["-7", "+8", "0"]);
        assert_eq!(parsed.operands, vec![-7, 8, 0]);
        assert_eq!(parsed.operation, None);
    }

    #[test]
    fn help_short_circuits_remaining_arguments() {
        assert_eq!(run(["-o", "summa", "-h", "abc"]).unwrap(), Parsed::Help);
        assert_eq!(run(["--help"]).unwrap(), Parsed::Help);
    }

    #[test]
    fn missing_flag_value_names_the_flag() {
        assert_eq!(
            run(["1", "2", "3", "-o"]),
            Err(CalcError::MissingFlagValue("-o".into()))
        );
        assert_eq!(
            run(["--operation"]),
            Err(CalcError::MissingFlagValue("--operation".into()))
        );
    }

    #[test]
    fn first_error_stops_the_scan() {
        assert_eq!(
            run(["-o", "summa", "1", "2", "abc", "-h"]),
            Err(CalcError::NotANumber("abc".into()))
        );
        assert_eq!(
            run(["x", "99999999999", "-o"]),
            Err(CalcError::NotANumber("x".into()))
        );
    }

    #[test]
    fn non_integer_tokens_are_not_numbers() {
        for token in ["abc", "12abc", "1.5", "", " 7", "--verbose", "-", "+"] {
            assert_eq!(
                parse_operand(token),
                Err(CalcError::NotANumber(token.into())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn integers_beyond_i32_are_out_of_range() {
        assert_eq!(parse_operand("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_operand("-2147483648"), Ok(i32::MIN));
        assert_eq!(
            parse_operand("2147483648"),
            Err(CalcError::OutOfRange("2147483648".into()))
        );
        assert_eq!(
            parse_operand("-2147483649"),
            Err(CalcError::OutOfRange("-2147483649".into()))
        );
    }
}
