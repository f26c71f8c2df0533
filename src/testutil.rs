//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::rules::Rule;

/// Build a rule that is known to be valid.
#[must_use]
pub fn rule(period: u64, label: &str) -> Rule {
    Rule::new(period, label).expect("test rule period must be positive")
}

/// Materialize the first `n` elements of a sequence.
pub fn take<I: Iterator<Item = String>>(seq: I, n: usize) -> Vec<String> {
    seq.take(n).collect()
}
