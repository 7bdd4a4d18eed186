//! Per-run configuration parsed from `config.txt`
//!
//! Each line is either `key: value` or a bare line the trainer wrote for
//! humans. Values that parse as floats are stored as floats, everything else
//! is kept as text. Bare and blank lines are echoed but not stored.

use anyhow::{Context, Result, anyhow};
use std::collections::BTreeMap;

/// A single configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Float(f64),
    Text(String),
}

impl ConfigValue {
    fn parse(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(value) => Self::Float(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Numeric value, if this entry parsed as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

/// Configuration of one training run
///
/// # Example
///
/// ```rust
/// use snake_runs::runs::{ConfigValue, RunConfig};
///
/// let config = RunConfig::parse("nTrials: 10\nname: test");
/// assert_eq!(config.get("nTrials"), Some(&ConfigValue::Float(10.0)));
/// assert_eq!(config.get("name"), Some(&ConfigValue::Text("test".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    values: BTreeMap<String, ConfigValue>,

    /// Lines of the trimmed file as written, kept for the console echo
    lines: Vec<String>,
}

impl RunConfig {
    /// Parse the contents of a `config.txt`
    pub fn parse(contents: &str) -> Self {
        let mut config = Self::default();

        for raw in contents.trim().lines() {
            config.lines.push(raw.to_string());

            if let Some((key, value)) = raw.trim().split_once(':') {
                let key = key.trim();
                if !key.is_empty() {
                    config
                        .values
                        .insert(key.to_string(), ConfigValue::parse(value.trim()));
                }
            }
        }

        config
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Look up a key that must hold a float
    pub fn float(&self, key: &str) -> Result<f64> {
        self.get(key)
            .with_context(|| format!("missing config key {key:?}"))?
            .as_float()
            .ok_or_else(|| anyhow!("config key {key:?} is not a number"))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_value() {
        let config = RunConfig::parse("nTrials: 10");
        assert_eq!(config.get("nTrials"), Some(&ConfigValue::Float(10.0)));
        assert_eq!(config.float("nTrials").unwrap(), 10.0);
    }

    #[test]
    fn test_text_value() {
        let config = RunConfig::parse("name: test");
        assert_eq!(
            config.get("name"),
            Some(&ConfigValue::Text("test".to_string()))
        );
        assert!(config.float("name").is_err());
    }

    #[test]
    fn test_scientific_notation() {
        let config = RunConfig::parse("sigma: 1e-2\nlearningRate: 0.001");
        assert_eq!(config.float("sigma").unwrap(), 0.01);
        assert_eq!(config.float("learningRate").unwrap(), 0.001);
    }

    #[test]
    fn test_value_with_colon() {
        let config = RunConfig::parse("started: 12:30:00");
        assert_eq!(
            config.get("started"),
            Some(&ConfigValue::Text("12:30:00".to_string()))
        );
    }

    #[test]
    fn test_bare_lines_echoed_not_stored() {
        let config = RunConfig::parse("Snake ES run\n\nnTrials: 1000\n");
        assert_eq!(config.len(), 1);
        assert_eq!(config.lines(), ["Snake ES run", "", "nTrials: 1000"]);
    }

    #[test]
    fn test_echo_keeps_indentation() {
        let config = RunConfig::parse("\nmodel:\n    hiddenSize: 16\n\nsigma: 0.01\n");
        assert_eq!(config.lines(), ["model:", "    hiddenSize: 16", "", "sigma: 0.01"]);
        assert_eq!(config.float("hiddenSize").unwrap(), 16.0);
        assert_eq!(config.get("model"), Some(&ConfigValue::Text(String::new())));
    }

    #[test]
    fn test_missing_key() {
        let config = RunConfig::parse("");
        assert!(config.is_empty());
        let err = config.float("itersPerTrial").unwrap_err();
        assert!(err.to_string().contains("itersPerTrial"));
    }
}
