//! One module per exercise.
//!
//! Every exercise exposes `run(input, out)`: it pulls its declared values from
//! `input` in a fixed order and writes label lines to `out`. Output is written
//! as soon as each value is read, so a conversion failure leaves the lines
//! produced so far in place.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

pub mod arithmetic;
pub mod basic_io;
pub mod conditionals;
pub mod constants;
pub mod conversion;
pub mod for_loops;
pub mod menu_loop;
pub mod nested_loops;
pub mod strings;
pub mod switch_case;
pub mod variables;
pub mod while_loops;

/// Entry routine shared by every exercise.
pub type RunFn = fn(&mut Input<'_>, &mut dyn Write) -> Result<()>;
