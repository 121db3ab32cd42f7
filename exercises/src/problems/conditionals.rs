//! Grade, performance and pass/fail status from a numeric score.

use std::io::Write;

use anyhow::Result;

use crate::io::input::Input;

/// Classification of one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub grade: &'static str,
    pub performance: &'static str,
    pub status: &'static str,
}

/// Thresholds are inclusive lower bounds, checked from the top down.
pub fn assess(score: i64) -> Assessment {
    if score >= 90 {
        Assessment {
            grade: "A",
            performance: "Excellent",
            status: "Pass",
        }
    } else if score >= 80 {
        Assessment {
            grade: "B",
            performance: "Good",
            status: "Pass",
        }
    } else if score >= 60 {
        Assessment {
            grade: "C",
            performance: "Average",
            status: "Pass",
        }
    } else {
        Assessment {
            grade: "F",
            performance: "Poor",
            status: "Fail",
        }
    }
}

pub fn run(input: &mut Input<'_>, out: &mut dyn Write) -> Result<()> {
    let score = input.next_int("score")?;
    writeln!(out, "Score: {score}")?;

    let assessment = assess(score);
    writeln!(out, "Grade: {}", assessment.grade)?;
    writeln!(out, "Performance: {}", assessment.performance)?;
    writeln!(out, "Status: {}", assessment.status)?;
    Ok(())
}
