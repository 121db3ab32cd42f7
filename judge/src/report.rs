//! Rendering judged cases as text or JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::JudgeConfig;
use crate::run::CaseReport;
use crate::verdict::Verdict;

/// Verdict counts over a set of cases.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub cases: usize,
    pub accepted: usize,
    pub wrong_answer: usize,
    pub time_limit_exceeded: usize,
    pub runtime_error: usize,
}

impl ReportSummary {
    /// False when nothing was judged.
    pub fn all_accepted(&self) -> bool {
        self.cases > 0 && self.accepted == self.cases
    }
}

pub fn summarize(reports: &[CaseReport]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for report in reports {
        summary.cases += 1;
        match report.verdict {
            Verdict::Accepted => summary.accepted += 1,
            Verdict::WrongAnswer => summary.wrong_answer += 1,
            Verdict::TimeLimitExceeded => summary.time_limit_exceeded += 1,
            Verdict::RuntimeError => summary.runtime_error += 1,
        }
    }
    summary
}

/// Everything `judge run --json` prints.
#[derive(Debug, Serialize)]
pub struct JudgeRun<'a> {
    pub judged_at: DateTime<Utc>,
    pub config: &'a JudgeConfig,
    pub summary: ReportSummary,
    pub cases: &'a [CaseReport],
}

impl<'a> JudgeRun<'a> {
    pub fn new(config: &'a JudgeConfig, cases: &'a [CaseReport]) -> Self {
        Self {
            judged_at: Utc::now(),
            config,
            summary: summarize(cases),
            cases,
        }
    }
}

/// Text lines for one case: a header, then details for every failing test.
pub fn render_case(report: &CaseReport) -> Vec<String> {
    let mut lines = vec![format!(
        "case: id={} exercise={} verdict={} passed={}/{} time_ms={}",
        report.case_id,
        report.exercise,
        report.verdict,
        report.passed,
        report.total,
        report.execution_time_ms
    )];
    for test in report.tests.iter().filter(|test| !test.passed) {
        lines.push(format!("  fail: test={}", test.name));
        if test.timed_out {
            lines.push("    timed out".to_string());
        }
        if let Some(error) = &test.error {
            lines.push(format!("    error: {error}"));
        }
        lines.push("    expected:".to_string());
        lines.extend(quote(&test.expected_output));
        lines.push("    actual:".to_string());
        lines.extend(quote(&test.actual_output));
    }
    lines
}

pub fn render_summary(summary: &ReportSummary) -> String {
    format!(
        "summary: cases={} accepted={} wrong_answer={} time_limit_exceeded={} runtime_error={}",
        summary.cases,
        summary.accepted,
        summary.wrong_answer,
        summary.time_limit_exceeded,
        summary.runtime_error
    )
}

fn quote(text: &str) -> impl Iterator<Item = String> + '_ {
    text.trim_end_matches('\n')
        .lines()
        .map(|line| format!("    | {line}"))
}
