//! Stable exit codes for the `exercises` CLI.

/// Exercise ran to completion.
pub const OK: i32 = 0;
/// Input could not be converted to its expected type, or I/O failed.
pub const INVALID_INPUT: i32 = 1;
/// No exercise matches the requested id.
pub const UNKNOWN_EXERCISE: i32 = 2;
