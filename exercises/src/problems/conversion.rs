//! Conversions between text, integers, floats and booleans.

use std::io::Write;

use anyhow::{Result, anyhow};

use crate::core::number_format::{bool_text, float_repr};
use crate::io::input::Input;

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let from_text = input.next_int("integer text")?;
    writeln!(out, "String to int: {from_text}")?;

    let from_text = input.next_float("float text")?;
    writeln!(out, "String to float: {}", float_repr(from_text))?;

    let from_text = input.next_bool("boolean text")?;
    writeln!(out, "String to bool: {}", bool_text(from_text))?;

    let int_value = input.next_int("integer")?;
    writeln!(out, "Int to string: {int_value}")?;
    writeln!(out, "Int to float: {}", float_repr(int_value as f64))?;
    writeln!(out, "Int to bool: {}", bool_text(int_value != 0))?;

    let float_value = input.next_float("float")?;
    writeln!(out, "Float to string: {}", float_repr(float_value))?;
    writeln!(out, "Float to int: {}", truncate(float_value)?)?;
    writeln!(out, "Float to bool: {}", bool_text(float_value != 0.0))?;

    Ok(())
}

/// Truncate toward zero. NaN and values beyond `i128` have no integer form.
pub fn truncate(value: f64) -> Result<i128> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i128::MIN as f64 || truncated >= i128::MAX as f64 {
        return Err(anyhow!("cannot convert {} to an integer", float_repr(value)));
    }
    Ok(truncated as i128)
}
