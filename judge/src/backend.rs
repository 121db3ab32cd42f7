//! Backends that execute an exercise on one input.
//!
//! The [`ExerciseBackend`] trait decouples judging from how an exercise is
//! run. [`InProcessBackend`] calls the catalog directly; [`ProcessBackend`]
//! spawns the `exercises` binary and enforces the time limit by killing it.

use std::io::Cursor;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

use crate::config::JudgeConfig;
use crate::process::run_command_with_timeout;

/// What one execution produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub timed_out: bool,
    pub elapsed: Duration,
}

impl Execution {
    pub fn succeeded(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Abstraction over exercise execution.
pub trait ExerciseBackend {
    /// Run `exercise_id` with `input` on stdin.
    ///
    /// A failing exercise is a successful execution with a non-zero exit code;
    /// `Err` is reserved for harness failures.
    fn execute(&self, exercise_id: &str, input: &str) -> Result<Execution>;
}

/// Runs exercises through the catalog inside the judge process.
///
/// The time limit cannot be enforced here; elapsed time is still reported and
/// judged afterwards.
pub struct InProcessBackend;

impl ExerciseBackend for InProcessBackend {
    #[instrument(skip_all, fields(exercise_id = %exercise_id))]
    fn execute(&self, exercise_id: &str, input: &str) -> Result<Execution> {
        let exercise = exercises::catalog::find(exercise_id)
            .ok_or_else(|| anyhow!("unknown exercise {exercise_id:?}"))?;
        let mut reader = Cursor::new(input.as_bytes());
        let mut stdout = Vec::new();

        let started = Instant::now();
        let result = exercise.run(&mut reader, &mut stdout);
        let elapsed = started.elapsed();

        let (exit_code, stderr) = match result {
            Ok(()) => (exercises::exit_codes::OK, String::new()),
            Err(err) => (exercises::exit_codes::INVALID_INPUT, format!("{err:#}")),
        };
        debug!(exit_code, elapsed_ms = elapsed.as_millis() as u64, "in-process run finished");
        Ok(Execution {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr,
            exit_code: Some(exit_code),
            timed_out: false,
            elapsed,
        })
    }
}

/// Spawns `<program> [args..] run <exercise>` per test.
pub struct ProcessBackend {
    pub program: PathBuf,
    /// Arguments placed before `run <exercise>`.
    pub args: Vec<String>,
    pub timeout: Duration,
    pub output_limit_bytes: usize,
}

impl ProcessBackend {
    pub fn new(program: PathBuf, config: &JudgeConfig) -> Self {
        Self {
            program,
            args: Vec::new(),
            timeout: config.time_limit(),
            output_limit_bytes: config.output_limit_bytes,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl ExerciseBackend for ProcessBackend {
    #[instrument(skip_all, fields(exercise_id = %exercise_id, program = %self.program.display()))]
    fn execute(&self, exercise_id: &str, input: &str) -> Result<Execution> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg("run").arg(exercise_id);

        let output = run_command_with_timeout(
            cmd,
            input.as_bytes(),
            self.timeout,
            self.output_limit_bytes,
        )
        .with_context(|| format!("run {} for {}", self.program.display(), exercise_id))?;

        Ok(Execution {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
            timed_out: output.timed_out,
            elapsed: output.elapsed,
        })
    }
}

/// The `exercises` binary built next to the running judge binary.
pub fn sibling_exercises_binary() -> Result<PathBuf> {
    let current = std::env::current_exe().context("locate judge binary")?;
    let binary = format!("exercises{}", std::env::consts::EXE_SUFFIX);
    Ok(current.with_file_name(binary))
}
