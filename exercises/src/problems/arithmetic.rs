//! The six arithmetic operators applied to two integers.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::arith::{ArithError, Number, add, divide, modulo, multiply, power, subtract};
use crate::io::input::Input;

/// Operators in output order: label, symbol, operation.
const OPERATIONS: [(&str, &str, fn(i64, i64) -> Result<Number, ArithError>); 6] = [
    ("Addition", "+", |a, b| Ok(add(a, b))),
    ("Subtraction", "-", |a, b| Ok(subtract(a, b))),
    ("Multiplication", "*", |a, b| Ok(multiply(a, b))),
    ("Division", "/", divide),
    ("Modulus", "%", modulo),
    ("Exponentiation", "**", power),
];

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let a = input.next_int("a")?;
    let b = input.next_int("b")?;

    for (label, symbol, operation) in OPERATIONS {
        match operation(a, b) {
            Ok(value) => writeln!(out, "{label}: {a} {symbol} {b} = {value}")?,
            Err(err @ ArithError::DivisionByZero) => writeln!(out, "Error: {err}")?,
            Err(err) => return Err(err).with_context(|| label.to_lowercase()),
        }
    }
    Ok(())
}
