//! Stable exit codes for the `judge` CLI.

/// Every judged case was accepted.
pub const OK: i32 = 0;
/// The harness itself failed (bad case file, config, missing binary).
pub const INVALID: i32 = 1;
/// At least one case was not accepted.
pub const REJECTED: i32 = 3;
