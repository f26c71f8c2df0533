//! FizzBuzz - lazy, generalized FizzBuzz sequences
//!
//! Given ordered `(period, label)` rules, every position divisible by a
//! rule's period is replaced by its label, and positions divisible by
//! several periods get the labels concatenated in rule order. The work is
//! done once up front: every subset of the rules is folded into a derived
//! rule, and each derived rule becomes one lazy replace layer over the
//! integers. From then on the sequence is a plain infinite iterator.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod rules;
pub mod sequence;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use cli::{OutputFormat, RunSettings};
pub use config::FizzBuzzConfig;
pub use rules::{combine, Rule, RuleError};
pub use sequence::{compose, fizzbuzz, FizzBuzz, Naturals, ReplaceEvery, ReplaceEveryExt};
