//! Concatenation, length, case and slicing on two strings.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

/// Characters of `text` from `start` on; empty when `text` is shorter.
pub fn substring_from(text: &str, start: usize) -> String {
    text.chars().skip(start).collect()
}

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let first = input.next_text("first string")?;
    let second = input.next_text("second string")?;

    writeln!(out, "Concatenation: {first} + {second} = {first}{second}")?;
    writeln!(out, "Length of first string: {}", first.chars().count())?;
    writeln!(out, "Length of second string: {}", second.chars().count())?;
    writeln!(out, "Uppercase: {}", first.to_uppercase())?;
    writeln!(out, "Lowercase: {}", second.to_lowercase())?;
    for start in [2, 3, 1] {
        writeln!(
            out,
            "Substring from index {start}: {}",
            substring_from(&first, start)
        )?;
    }
    Ok(())
}
