//! Output comparison and verdict classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a judged case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    RuntimeError,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Accepted => "Accepted",
            Verdict::WrongAnswer => "Wrong Answer",
            Verdict::TimeLimitExceeded => "Time Limit Exceeded",
            Verdict::RuntimeError => "Runtime Error",
        };
        f.write_str(label)
    }
}

/// Outcome of one test within a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCaseResult {
    pub name: String,
    pub passed: bool,
    pub expected_output: String,
    pub actual_output: String,
    pub execution_time_ms: u64,
    pub timed_out: bool,
    /// Set when the exercise failed instead of completing.
    pub error: Option<String>,
}

/// Compare outputs after normalizing line endings and surrounding whitespace.
pub fn outputs_match(expected: &str, actual: &str) -> bool {
    normalize(expected) == normalize(actual)
}

fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}

/// Overall verdict for a case.
///
/// Errors outrank timeouts, which outrank wrong answers.
pub fn determine_verdict(results: &[TestCaseResult], time_limit_ms: u64) -> Verdict {
    if results.iter().any(|r| r.error.is_some()) {
        return Verdict::RuntimeError;
    }
    if results
        .iter()
        .any(|r| r.timed_out || r.execution_time_ms > time_limit_ms)
    {
        return Verdict::TimeLimitExceeded;
    }
    if results.iter().all(|r| r.passed) {
        Verdict::Accepted
    } else {
        Verdict::WrongAnswer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(passed: bool) -> TestCaseResult {
        TestCaseResult {
            name: "t".to_string(),
            passed,
            expected_output: String::new(),
            actual_output: String::new(),
            execution_time_ms: 1,
            timed_out: false,
            error: None,
        }
    }

    #[test]
    fn match_ignores_surrounding_whitespace_and_crlf() {
        assert!(outputs_match("15", "15\n"));
        assert!(outputs_match("a\nb", "a\r\nb\r\n"));
        assert!(outputs_match("\n\nx", "x"));
        assert!(!outputs_match("a\nb", "a \nb"));
        assert!(!outputs_match("Grade: B", "grade: B"));
    }

    #[test]
    fn all_passed_is_accepted() {
        assert_eq!(
            determine_verdict(&[result(true), result(true)], 100),
            Verdict::Accepted
        );
    }

    #[test]
    fn any_failure_is_wrong_answer() {
        assert_eq!(
            determine_verdict(&[result(true), result(false)], 100),
            Verdict::WrongAnswer
        );
    }

    #[test]
    fn slow_test_is_time_limit_exceeded() {
        let mut slow = result(true);
        slow.execution_time_ms = 101;
        assert_eq!(
            determine_verdict(&[result(false), slow], 100),
            Verdict::TimeLimitExceeded
        );
        let mut killed = result(false);
        killed.timed_out = true;
        assert_eq!(determine_verdict(&[killed], 100), Verdict::TimeLimitExceeded);
    }

    #[test]
    fn error_outranks_everything() {
        let mut failed = result(false);
        failed.error = Some("exit code 1".to_string());
        let mut killed = result(false);
        killed.timed_out = true;
        assert_eq!(
            determine_verdict(&[killed, failed], 100),
            Verdict::RuntimeError
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(Verdict::WrongAnswer.to_string(), "Wrong Answer");
        assert_eq!(Verdict::TimeLimitExceeded.to_string(), "Time Limit Exceeded");
        assert_eq!(
            serde_json::to_string(&Verdict::RuntimeError).expect("json"),
            "\"runtime_error\""
        );
    }
}
