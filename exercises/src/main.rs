//! Beginner exercise runner.
//!
//! `exercises run <id>` reads the exercise's declared values from stdin and
//! prints its label lines to stdout. Diagnostics go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use exercises::catalog::{self, CATALOG, Exercise};
use exercises::exit_codes;
use exercises::logging;

#[derive(Parser)]
#[command(
    name = "exercises",
    version,
    about = "Beginner programming exercises over stdin/stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every exercise id and title.
    List {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the inputs an exercise reads, in order.
    Describe {
        /// Exercise id, number (`4`) or slug (`arithmetic-operators`).
        id: String,
    },
    /// Run an exercise on stdin.
    Run {
        /// Exercise id, number (`4`) or slug (`arithmetic-operators`).
        id: String,
    },
}

/// Lookup failure reported with its own exit code.
#[derive(Debug)]
struct UnknownExercise(String);

impl std::fmt::Display for UnknownExercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown exercise {:?} (see `exercises list`)", self.0)
    }
}

impl std::error::Error for UnknownExercise {}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::List { json } => cmd_list(json),
        Command::Describe { id } => cmd_describe(&id),
        Command::Run { id } => cmd_run(&id),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<UnknownExercise>().is_some() {
        exit_codes::UNKNOWN_EXERCISE
    } else {
        exit_codes::INVALID_INPUT
    }
}

fn lookup(id: &str) -> Result<&'static Exercise> {
    catalog::find(id).ok_or_else(|| UnknownExercise(id.to_string()).into())
}

fn cmd_list(json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let payload = serde_json::to_string_pretty(CATALOG).context("serialize catalog")?;
        writeln!(stdout, "{payload}")?;
        return Ok(());
    }
    for exercise in CATALOG {
        writeln!(stdout, "{}\t{}", exercise.id, exercise.title)?;
    }
    Ok(())
}

fn cmd_describe(id: &str) -> Result<()> {
    let exercise = lookup(id)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}: {}", exercise.id, exercise.title)?;
    writeln!(stdout, "inputs (one per line):")?;
    for (index, name) in exercise.inputs.iter().enumerate() {
        writeln!(stdout, "  {}. {}", index + 1, name)?;
    }
    Ok(())
}

fn cmd_run(id: &str) -> Result<()> {
    let exercise = lookup(id)?;
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    exercise
        .run(&mut stdin, &mut stdout)
        .with_context(|| format!("run {}", exercise.id))
}
