//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::backend::{ExerciseBackend, InProcessBackend, ProcessBackend, sibling_exercises_binary};
use crate::case::{discover_cases, select_cases};
use crate::config::{JudgeConfig, load_config};
use crate::report::{JudgeRun, render_case, render_summary, summarize};
use crate::run::judge_case;

pub const DEFAULT_CASES_DIR: &str = "judge/cases";
pub const DEFAULT_CONFIG: &str = "judge.toml";

/// Options for `judge run`.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Case ids or exercise ids to judge; empty means every case.
    pub ids: Vec<String>,
    pub cases_dir: PathBuf,
    pub config_path: PathBuf,
    pub in_process: bool,
    /// Exercises binary for the process backend.
    pub binary: Option<PathBuf>,
    pub json: bool,
}

/// List all available cases.
pub fn list_cases(cases_dir: &Path) -> Result<()> {
    ensure_cases_dir(cases_dir)?;
    let cases = discover_cases(cases_dir)?;
    for case in cases {
        println!(
            "{}\t{}\t{}",
            case.case.id,
            case.case.exercise_id(),
            case.tests.len()
        );
    }
    Ok(())
}

/// Judge the selected cases and print the report.
///
/// Returns whether every case was accepted.
pub fn run_cases(options: &RunOptions) -> Result<bool> {
    let config = load_config(&options.config_path)?;
    ensure_cases_dir(&options.cases_dir)?;
    let cases = discover_cases(&options.cases_dir)?;
    let cases = select_cases(cases, &options.ids)?;
    if cases.is_empty() {
        bail!("no cases found in {}", options.cases_dir.display());
    }
    debug!(cases = cases.len(), dir = %options.cases_dir.display(), "cases loaded");

    let backend = build_backend(options, &config)?;
    let mut reports = Vec::with_capacity(cases.len());
    for case in &cases {
        let report = judge_case(case, backend.as_ref(), &config)
            .with_context(|| format!("judge case {}", case.case.id))?;
        reports.push(report);
    }

    let summary = summarize(&reports);
    info!(cases = summary.cases, accepted = summary.accepted, "judging finished");
    if options.json {
        let run = JudgeRun::new(&config, &reports);
        println!(
            "{}",
            serde_json::to_string_pretty(&run).context("serialize judge run")?
        );
    } else {
        for report in &reports {
            for line in render_case(report) {
                println!("{line}");
            }
        }
        println!("{}", render_summary(&summary));
    }
    Ok(summary.all_accepted())
}

fn ensure_cases_dir(cases_dir: &Path) -> Result<()> {
    if !cases_dir.is_dir() {
        bail!("cases dir {} not found", cases_dir.display());
    }
    Ok(())
}

fn build_backend(options: &RunOptions, config: &JudgeConfig) -> Result<Box<dyn ExerciseBackend>> {
    if options.in_process {
        debug!("using in-process backend");
        return Ok(Box::new(InProcessBackend));
    }
    let program = match &options.binary {
        Some(binary) => binary.clone(),
        None => sibling_exercises_binary()?,
    };
    debug!(program = %program.display(), "using process backend");
    Ok(Box::new(ProcessBackend::new(program, config)))
}
