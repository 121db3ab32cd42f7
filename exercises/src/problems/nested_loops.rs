//! A right triangle of stars from nested counted loops.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let rows = input.next_int("rows")?;
    for row in 1..=rows {
        for _ in 0..row {
            write!(out, "*")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
