//! Case file parsing and validation.
//!
//! A case is a TOML file of input/expected-output pairs for one exercise.
//! See `judge/cases/` for the shipped set.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

/// A parsed case file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    pub case: CaseMeta,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// Case metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    /// Exercise to run; defaults to `id`.
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl CaseMeta {
    pub fn exercise_id(&self) -> &str {
        self.exercise.as_deref().unwrap_or(&self.id)
    }
}

/// One stdin/stdout pair.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expected: String,
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load case {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let case: CaseFile = toml::from_str(contents).context("parse case")?;
        case.validate()?;
        Ok(case)
    }

    fn validate(&self) -> Result<()> {
        validate_case_id(&self.case.id)?;
        let exercise = self.case.exercise_id();
        if exercises::catalog::find(exercise).is_none() {
            bail!("case.exercise {exercise:?} is not a known exercise");
        }
        if self.tests.is_empty() {
            bail!("tests must be a non-empty array");
        }
        let mut names = BTreeSet::new();
        for (index, test) in self.tests.iter().enumerate() {
            if test.name.trim().is_empty() {
                bail!("tests[{}].name must be non-empty", index);
            }
            if !names.insert(test.name.as_str()) {
                bail!("duplicate test name {}", test.name);
            }
        }
        Ok(())
    }
}

/// Discover and load all case files from a directory.
///
/// Returns cases sorted by id. Errors if duplicate ids are found.
pub fn discover_cases(dir: &Path) -> Result<Vec<CaseFile>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        cases.push(CaseFile::load(&path)?);
    }
    cases.sort_by(|left, right| left.case.id.cmp(&right.case.id));
    for pair in cases.windows(2) {
        if pair[0].case.id == pair[1].case.id {
            return Err(anyhow!("duplicate case.id {}", pair[0].case.id));
        }
    }
    Ok(cases)
}

/// Keep only the requested cases, matched by case id or by exercise.
///
/// An empty request keeps every case. A request matching nothing is an error.
pub fn select_cases(cases: Vec<CaseFile>, requested: &[String]) -> Result<Vec<CaseFile>> {
    if requested.is_empty() {
        return Ok(cases);
    }
    for wanted in requested {
        if !cases.iter().any(|case| case_matches(case, wanted)) {
            bail!("no case matches {wanted:?}");
        }
    }
    Ok(cases
        .into_iter()
        .filter(|case| requested.iter().any(|wanted| case_matches(case, wanted)))
        .collect())
}

fn case_matches(case: &CaseFile, wanted: &str) -> bool {
    if case.case.id == wanted {
        return true;
    }
    match exercises::catalog::find(wanted) {
        Some(exercise) => exercises::catalog::find(case.case.exercise_id())
            .is_some_and(|own| own.id == exercise.id),
        None => false,
    }
}

fn validate_case_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("case.id must be non-empty");
    }
    if id.contains('/') || id.contains('\\') {
        bail!("case.id must not contain path separators");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("case.id must use [a-z0-9_-] only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[case]
id = "arithmetic-basics"
exercise = "04"
title = "Arithmetic on two integers"

[[tests]]
name = "ten-and-three"
input = "10\n3\n"
expected = "Addition: 10 + 3 = 13"
"#;

    #[test]
    fn parses_valid_case() {
        let case = CaseFile::parse_str(VALID).expect("case parses");
        assert_eq!(case.case.id, "arithmetic-basics");
        assert_eq!(case.case.exercise_id(), "04");
        assert_eq!(case.tests.len(), 1);
        assert_eq!(case.tests[0].input, "10\n3\n");
    }

    #[test]
    fn exercise_defaults_to_case_id() {
        let input = r#"
[case]
id = "15-nested-loops"

[[tests]]
name = "one"
input = "1"
expected = "*"
"#;
        let case = CaseFile::parse_str(input).expect("case parses");
        assert_eq!(case.case.exercise_id(), "15-nested-loops");
    }

    #[test]
    fn rejects_invalid_id() {
        let input = VALID.replace("arithmetic-basics", "Bad/Id");
        let err = CaseFile::parse_str(&input).expect_err("invalid id");
        assert!(err.to_string().contains("case.id"));
    }

    #[test]
    fn rejects_unknown_exercise() {
        let input = VALID.replace("exercise = \"04\"", "exercise = \"05\"");
        let err = CaseFile::parse_str(&input).expect_err("unknown exercise");
        assert!(err.to_string().contains("not a known exercise"));
    }

    #[test]
    fn rejects_missing_and_duplicate_tests() {
        let input = r#"
[case]
id = "04-arithmetic-operators"
"#;
        let err = CaseFile::parse_str(input).expect_err("no tests");
        assert!(err.to_string().contains("non-empty"));

        let duplicated = format!(
            "{VALID}\n[[tests]]\nname = \"ten-and-three\"\ninput = \"1\\n1\\n\"\nexpected = \"\"\n"
        );
        let err = CaseFile::parse_str(&duplicated).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate test name"));
    }

    #[test]
    fn discover_sorts_and_rejects_duplicates() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("b.toml"), VALID).expect("write");
        fs::write(temp.path().join("notes.txt"), "ignored").expect("write");
        let other = VALID.replace("arithmetic-basics", "aaa-first");
        fs::write(temp.path().join("a.toml"), &other).expect("write");

        let cases = discover_cases(temp.path()).expect("discover");
        let ids: Vec<&str> = cases.iter().map(|case| case.case.id.as_str()).collect();
        assert_eq!(ids, vec!["aaa-first", "arithmetic-basics"]);

        fs::write(temp.path().join("c.toml"), VALID).expect("write");
        let err = discover_cases(temp.path()).expect_err("duplicate ids");
        assert!(err.to_string().contains("duplicate case.id"));
    }

    #[test]
    fn select_by_case_id_or_exercise() {
        let first = CaseFile::parse_str(VALID).expect("case");
        let second =
            CaseFile::parse_str(&VALID.replace("arithmetic-basics", "other").replace("\"04\"", "\"10\""))
                .expect("case");
        let cases = vec![first, second];

        let by_id = select_cases(cases.clone(), &["other".to_string()]).expect("select");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].case.id, "other");

        let by_exercise =
            select_cases(cases.clone(), &["arithmetic-operators".to_string()]).expect("select");
        assert_eq!(by_exercise.len(), 1);
        assert_eq!(by_exercise[0].case.id, "arithmetic-basics");

        assert_eq!(select_cases(cases.clone(), &[]).expect("all").len(), 2);
        assert!(select_cases(cases, &["missing".to_string()]).is_err());
    }
}
