//! Case execution: run every test of a case and classify the case.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::backend::{Execution, ExerciseBackend};
use crate::case::{CaseFile, TestCase};
use crate::config::JudgeConfig;
use crate::verdict::{TestCaseResult, Verdict, determine_verdict, outputs_match};

/// Result of judging a single case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub case_id: String,
    pub exercise: String,
    pub verdict: Verdict,
    /// Sum of the tests' execution times.
    pub execution_time_ms: u64,
    pub passed: usize,
    pub total: usize,
    pub tests: Vec<TestCaseResult>,
}

/// Run every test of `case` through `backend`.
#[instrument(skip_all, fields(case_id = %case.case.id))]
pub fn judge_case(
    case: &CaseFile,
    backend: &dyn ExerciseBackend,
    config: &JudgeConfig,
) -> Result<CaseReport> {
    let exercise = case.case.exercise_id();
    info!(exercise, tests = case.tests.len(), "judging case");

    let mut tests = Vec::with_capacity(case.tests.len());
    for test in &case.tests {
        let execution = backend
            .execute(exercise, &test.input)
            .with_context(|| format!("test {}", test.name))?;
        let result = judge_test(test, &execution);
        if result.passed {
            debug!(test = %test.name, elapsed_ms = result.execution_time_ms, "test passed");
        } else {
            warn!(test = %test.name, timed_out = result.timed_out, error = ?result.error, "test failed");
        }
        tests.push(result);
    }

    let verdict = determine_verdict(&tests, config.time_limit_ms);
    let report = CaseReport {
        case_id: case.case.id.clone(),
        exercise: exercise.to_string(),
        verdict,
        execution_time_ms: tests.iter().map(|t| t.execution_time_ms).sum(),
        passed: tests.iter().filter(|t| t.passed).count(),
        total: tests.len(),
        tests,
    };
    info!(verdict = %report.verdict, passed = report.passed, total = report.total, "case judged");
    Ok(report)
}

fn judge_test(test: &TestCase, execution: &Execution) -> TestCaseResult {
    let error = if execution.timed_out {
        None
    } else {
        match execution.exit_code {
            Some(0) => None,
            code => Some(describe_failure(code, &execution.stderr)),
        }
    };
    let passed = execution.succeeded() && outputs_match(&test.expected, &execution.stdout);

    TestCaseResult {
        name: test.name.clone(),
        passed,
        expected_output: test.expected.clone(),
        actual_output: execution.stdout.clone(),
        execution_time_ms: u64::try_from(execution.elapsed.as_millis()).unwrap_or(u64::MAX),
        timed_out: execution.timed_out,
        error,
    }
}

fn describe_failure(code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{status}: {stderr}")
    }
}
