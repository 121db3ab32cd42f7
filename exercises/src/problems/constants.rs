//! Circle measurements from a fixed PI constant.

use std::io::Write;

use anyhow::Result;

use crate::core::number_format::{fixed, float_repr};
use crate::io::input::Input;

#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let radius = input.next_float("radius")?;
    let circumference = 2.0 * PI * radius;
    let area = PI * radius * radius;

    writeln!(out, "Radius: {}", float_repr(radius))?;
    writeln!(out, "PI constant : {}", float_repr(PI))?;
    writeln!(out, "Circumference: {}", fixed(circumference, 5))?;
    writeln!(out, "Area: {}", float_repr(area))?;
    Ok(())
}
