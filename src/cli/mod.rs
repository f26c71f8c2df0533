//! Command-line glue
//!
//! Resolves command-line pairs and the optional rules file into the
//! settings for one run, and formats the sequence for the terminal.

pub mod display;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::FizzBuzzConfig;
use crate::rules::Rule;

pub use display::render_rules;
pub use display::write_sequence;

/// Number of elements printed when neither `-n` nor the rules file says otherwise
pub const DEFAULT_COUNT: u64 = 100;

/// How each element is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One element per line
    #[default]
    Plain,
    /// One `{"position": .., "value": ..}` object per line
    Jsonl,
}

/// Everything needed to produce output for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Number of elements to materialize
    pub count: u64,
    /// Input rules: rules file first, then `--fb` pairs
    pub rules: Vec<Rule>,
}

impl RunSettings {
    /// Merge the rules file (if any) with command-line values.
    ///
    /// `count` from the command line wins over the file's `count`.
    pub fn resolve(
        config: Option<&FizzBuzzConfig>,
        count: Option<u64>,
        fb_pairs: &[String],
    ) -> Result<Self> {
        let mut rules = match config {
            Some(config) => config.rules()?,
            None => Vec::new(),
        };
        rules.extend(parse_rule_pairs(fb_pairs)?);

        let count = count
            .or_else(|| config.and_then(|c| c.count))
            .unwrap_or(DEFAULT_COUNT);

        Ok(Self { count, rules })
    }
}

/// Turn flattened `--fb N WORD` values into rules.
///
/// Values arrive as `[n1, word1, n2, word2, ...]`; clap guarantees pairs.
pub fn parse_rule_pairs(values: &[String]) -> Result<Vec<Rule>> {
    values
        .chunks_exact(2)
        .map(|pair| {
            let (n, word) = (&pair[0], &pair[1]);
            Rule::parse(n, word.as_str())
                .with_context(|| format!("Invalid --fb rule '{n} {word}'"))
        })
        .collect()
}
