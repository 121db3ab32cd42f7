//! Variable declaration, reassignment and late initialization.

use std::io::Write;

use anyhow::Result;

use crate::core::number_format::{bool_text, float_repr};
use crate::io::input::Input;

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let mut integer = input.next_int("integer")?;
    writeln!(out, "Integer variable: {integer}")?;

    let string = input.next_text("string")?;
    writeln!(out, "String variable: {string}")?;

    let boolean = input.next_bool("boolean")?;
    writeln!(out, "Boolean variable: {}", bool_text(boolean))?;

    let float = input.next_float("float")?;
    writeln!(out, "Float variable: {}", float_repr(float))?;

    let character = input.next_text("character")?;
    writeln!(out, "Character variable: {character}")?;

    integer = input.next_int("new integer")?;
    writeln!(out, "Updated integer variable: {integer}")?;

    #[allow(clippy::needless_late_init)]
    let late: String;
    late = input.next_text("late value")?;
    writeln!(out, "Late-initialized variable: {late}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_support::run_exercise;

    #[test]
    fn echoes_each_declared_value() {
        let output = run_exercise(
            "01-variable-declaration",
            "42\nAlice\nTrue\n3.5\nx\n100\nlater\n",
        );
        assert_eq!(
            output,
            "Integer variable: 42\n\
             String variable: Alice\n\
             Boolean variable: true\n\
             Float variable: 3.5\n\
             Character variable: x\n\
             Updated integer variable: 100\n\
             Late-initialized variable: later\n"
        );
    }

    #[test]
    fn integral_float_keeps_fraction() {
        let output = run_exercise("01-variable-declaration", "0\ns\nfalse\n7\nc\n-1\nz\n");
        assert!(output.contains("Float variable: 7.0\n"));
        assert!(output.contains("Boolean variable: false\n"));
        assert!(output.contains("Updated integer variable: -1\n"));
    }
}
