//! Judge configuration stored in `judge.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Judge limits (TOML).
///
/// Missing fields default to values generous enough for every shipped case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JudgeConfig {
    /// Wall-clock budget per test in milliseconds.
    pub time_limit_ms: u64,

    /// Keep at most this many bytes of exercise stdout/stderr per test.
    pub output_limit_bytes: usize,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 2_000,
            output_limit_bytes: 64_000,
        }
    }
}

impl JudgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_ms == 0 {
            return Err(anyhow!("time_limit_ms must be > 0"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `JudgeConfig::default()`.
pub fn load_config(path: &Path) -> Result<JudgeConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no judge config, using defaults");
        let cfg = JudgeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: JudgeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, JudgeConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("judge.toml");
        fs::write(&path, "time_limit_ms = 250\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.time_limit(), Duration::from_millis(250));
        assert_eq!(cfg.output_limit_bytes, JudgeConfig::default().output_limit_bytes);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("judge.toml");
        fs::write(&path, "output_limit_bytes = 0\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("output_limit_bytes"));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("judge.toml");
        fs::write(&path, "time_limit_ms = \"soon\"\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().contains("judge.toml"));
    }
}
