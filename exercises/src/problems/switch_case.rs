//! A calculator that dispatches on an operator token.

use std::fmt;
use std::io::Write;

use anyhow::Result;

use crate::core::arith::{ArithError, Number, add, divide, multiply, subtract};
use crate::io::input::Input;

/// Why an operator could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    Arith(ArithError),
    UnsupportedOperator(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Arith(err) => write!(f, "{err}"),
            CalcError::UnsupportedOperator(op) => write!(f, "Unsupported operator '{op}'"),
        }
    }
}

/// Apply one of `+ - * /`. The divisor is checked before dividing.
pub fn calculate(lhs: i64, operator: &str, rhs: i64) -> Result<Number, CalcError> {
    match operator {
        "+" => Ok(add(lhs, rhs)),
        "-" => Ok(subtract(lhs, rhs)),
        "*" => Ok(multiply(lhs, rhs)),
        "/" => divide(lhs, rhs).map_err(CalcError::Arith),
        other => Err(CalcError::UnsupportedOperator(other.to_string())),
    }
}

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let lhs = input.next_int("first number")?;
    writeln!(out, "First number: {lhs}")?;
    let operator = input.next_text("operator")?;
    writeln!(out, "Operator: {operator}")?;
    let rhs = input.next_int("second number")?;
    writeln!(out, "Second number: {rhs}")?;

    match calculate(lhs, &operator, rhs) {
        Ok(result) => writeln!(out, "Result: {lhs} {operator} {rhs} = {result}")?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}
