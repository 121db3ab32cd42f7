//! Beginner programming exercises as read-compute-print units.
//!
//! Each exercise reads a fixed sequence of values from standard input,
//! performs a small fixed computation and prints labeled lines. The crate
//! keeps the same split throughout:
//!
//! - **[`core`]**: Pure number helpers (float rendering, checked arithmetic).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: The line-oriented input reader every exercise consumes.
//!
//! [`problems`] holds one module per exercise and [`catalog`] maps stable
//! exercise ids onto them for the CLI and the judge.

pub mod catalog;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod problems;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
