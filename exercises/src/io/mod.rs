//! I/O helpers for exercises.

pub mod input;
