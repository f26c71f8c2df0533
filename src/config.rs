//! Rules file parser
//!
//! Parses an optional `fizzbuzz.toml` into an ordered list of rules and an
//! optional element count.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rules::Rule;

/// A single `[[rule]]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Replace every `period`-th element (must be positive)
    pub period: i64,
    /// Text substituted at those positions
    pub word: String,
}

/// Top-level configuration parsed from a rules file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FizzBuzzConfig {
    /// How many elements to print; the command line overrides this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Rule definitions, in application order
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

impl FizzBuzzConfig {
    /// Parse a rules file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse rules file content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse rules file")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert the `[[rule]]` tables into validated rules, in file order
    pub fn rules(&self) -> Result<Vec<Rule>> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Rule::try_from_signed(r.period, r.word.as_str())
                    .with_context(|| format!("in rule #{} ('{}')", i + 1, r.word))
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        self.rules().map(|_| ())
    }
}
