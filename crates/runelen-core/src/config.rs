//! Counting configuration.
//!
//! Loaded from YAML by the CLI. Every field is optional:
//!
//! ```yaml
//! invalid: per_byte   # strict | lossy | per_byte
//! format: json        # text | json
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::policy::InvalidPolicy;

/// How counts are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `<runes>\t<bytes>\t<label>` per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountConfig {
    /// Policy for byte sequences that are not valid UTF-8.
    #[serde(default)]
    pub invalid: InvalidPolicy,

    #[serde(default)]
    pub format: OutputFormat,
}

impl CountConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let cfg = Self::from_yaml(&content)
            .with_context(|| format!("invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), invalid = %cfg.invalid, "loaded config");
        Ok(cfg)
    }

    /// Parse configuration from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("failed to parse config YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let cfg = CountConfig::from_yaml("invalid: per_byte\nformat: json\n").unwrap();
        assert_eq!(cfg.invalid, InvalidPolicy::PerByte);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn test_hyphenated_policy_matches_cli_spelling() {
        let cfg = CountConfig::from_yaml("invalid: per-byte\n").unwrap();
        assert_eq!(cfg.invalid, InvalidPolicy::PerByte);
    }

    #[test]
    fn test_missing_fields_default() {
        let cfg = CountConfig::from_yaml("invalid: strict\n").unwrap();
        assert_eq!(cfg.invalid, InvalidPolicy::Strict);
        assert_eq!(cfg.format, OutputFormat::Text);

        assert_eq!(CountConfig::from_yaml("").unwrap(), CountConfig::default());
    }

    #[test]
    fn test_rejects_unknown_fields_and_values() {
        assert!(CountConfig::from_yaml("invalid: ignore\n").is_err());
        assert!(CountConfig::from_yaml("graphemes: true\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runelen.yaml");
        fs::write(&path, "format: json\n").unwrap();

        let cfg = CountConfig::from_file(&path).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.invalid, InvalidPolicy::Lossy);
    }

    #[test]
    fn test_from_file_missing_has_context() {
        let err = CountConfig::from_file(Path::new("/nonexistent/runelen.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
