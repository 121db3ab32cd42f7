//! Deterministic, pure helpers shared by the exercises.
//!
//! Nothing here reads input or writes output.

pub mod arith;
pub mod number_format;
