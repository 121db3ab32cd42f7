//! Reading a small profile and echoing it with formatting.

use std::io::Write;

use anyhow::Result;

use crate::core::number_format::fixed;
use crate::io::input::Input;

/// Year the birth year is computed against.
pub const REFERENCE_YEAR: i64 = 2024;

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let name = input.next_text("name")?;
    writeln!(out, "Name (uppercase): {}", name.to_uppercase())?;

    let age = input.next_int("age")?;
    writeln!(out, "Age: {age} years")?;
    writeln!(out, "Birth Year: {}", i128::from(REFERENCE_YEAR) - i128::from(age))?;

    let height = input.next_float("height")?;
    let meters = fixed(height, 2);
    writeln!(out, "Height: {meters}m ({}cm)", fixed(height * 100.0, 1))?;

    let language = input.next_text("favorite language")?;
    writeln!(out, "Favorite Language: {language}")?;

    writeln!(
        out,
        "Profile: {name}, {age} years old, {meters}m tall, loves {language}"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_support::run_exercise;

    #[test]
    fn prints_profile() {
        let output = run_exercise("03-basic-input-output", "alice\n30\n1.75\nRust\n");
        assert_eq!(
            output,
            "Name (uppercase): ALICE\n\
             Age: 30 years\n\
             Birth Year: 1994\n\
             Height: 1.75m (175.0cm)\n\
             Favorite Language: Rust\n\
             Profile: alice, 30 years old, 1.75m tall, loves Rust\n"
        );
    }

    #[test]
    fn height_is_padded_to_fixed_precision() {
        let output = run_exercise("03-basic-input-output", "Bo\n7\n2\nGo\n");
        assert!(output.contains("Height: 2.00m (200.0cm)\n"));
        assert!(output.contains("Birth Year: 2017\n"));
        assert!(output.ends_with("Profile: Bo, 7 years old, 2.00m tall, loves Go\n"));
    }

    #[test]
    fn nan_height_is_spelled_nan() {
        let output = run_exercise("03-basic-input-output", "bo\n7\nnan\nGo\n");
        assert!(output.contains("Height: nanm (nancm)\n"));
        assert!(output.ends_with("Profile: bo, 7 years old, nanm tall, loves Go\n"));
    }
}
