use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use judge::cli::{self, DEFAULT_CASES_DIR, DEFAULT_CONFIG, RunOptions};
use judge::exit_codes;

#[derive(Parser)]
#[command(name = "judge", version, about = "Judge the exercises against case files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List case ids, their exercise and test count.
    List {
        #[arg(long, default_value = DEFAULT_CASES_DIR)]
        cases: PathBuf,
    },
    /// Judge cases and print a report.
    Run {
        /// Case ids or exercise ids; all cases when omitted.
        ids: Vec<String>,
        #[arg(long, default_value = DEFAULT_CASES_DIR)]
        cases: PathBuf,
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Run exercises inside the judge instead of spawning them.
        #[arg(long, conflicts_with = "bin")]
        in_process: bool,
        /// Path to the `exercises` binary.
        #[arg(long)]
        bin: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    exercises::logging::init();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(exit_codes::REJECTED),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    match cli.command {
        Command::List { cases } => cli::list_cases(&cases).map(|()| true),
        Command::Run {
            ids,
            cases,
            config,
            in_process,
            bin,
            json,
        } => cli::run_cases(&RunOptions {
            ids,
            cases_dir: cases,
            config_path: config,
            in_process,
            binary: bin,
            json,
        }),
    }
}
