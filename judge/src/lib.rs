//! Judge for the beginner exercises.
//!
//! Runs exercises against TOML case files of input/expected-output pairs and
//! classifies each case with a [`verdict::Verdict`]. Exercises are executed
//! through an [`backend::ExerciseBackend`]: either in-process through the
//! exercise catalog, or as a child process with a time limit.

pub mod backend;
pub mod case;
pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod process;
pub mod report;
pub mod run;
pub mod verdict;
