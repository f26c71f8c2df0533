//! Rule combiner
//!
//! Turns an ordered set of `(period, label)` rules into the derived rules
//! that the sequence composer layers over the integers: one derived rule per
//! non-empty subset, with the subset's periods folded by least common
//! multiple and its labels concatenated in input order.

use thiserror::Error;

/// Errors raised while building rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The period is zero or negative
    #[error("invalid period {0}: periods must be positive integers")]
    InvalidPeriod(i64),

    /// The period is not an integer at all
    #[error("invalid period '{0}': expected a positive integer")]
    InvalidPeriodText(String),
}

/// Replace every `period`-th element with `label`.
///
/// The period is always at least 1; the only way to obtain a `Rule` is
/// through the validating constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    period: u64,
    label: String,
}

impl Rule {
    /// Create a rule, rejecting a zero period
    pub fn new(period: u64, label: impl Into<String>) -> Result<Self, RuleError> {
        if period == 0 {
            return Err(RuleError::InvalidPeriod(0));
        }
        Ok(Self {
            period,
            label: label.into(),
        })
    }

    /// Create a rule from a signed period, rejecting zero and negatives
    pub fn try_from_signed(period: i64, label: impl Into<String>) -> Result<Self, RuleError> {
        let period = u64::try_from(period).map_err(|_| RuleError::InvalidPeriod(period))?;
        Self::new(period, label)
    }

    /// Create a rule from textual input such as a command-line argument.
    ///
    /// Negative numbers are reported as [`RuleError::InvalidPeriod`] rather
    /// than as unparseable text.
    pub fn parse(period: &str, label: impl Into<String>) -> Result<Self, RuleError> {
        let text = period.trim();
        if let Ok(period) = text.parse::<u64>() {
            return Self::new(period, label);
        }
        match text.parse::<i64>() {
            Ok(period) => Err(RuleError::InvalidPeriod(period)),
            Err(_) => Err(RuleError::InvalidPeriodText(text.to_string())),
        }
    }

    /// The fold identity: period 1, empty label
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            period: 1,
            label: String::new(),
        }
    }

    /// Every how many elements the label is substituted
    #[must_use]
    pub const fn period(&self) -> u64 {
        self.period
    }

    /// The substituted text
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Combine two rules into the rule that fires where both fire.
    ///
    /// `(3, "Fizz")` intersected with `(5, "Buzz")` is `(15, "FizzBuzz")`.
    /// The label order follows the operand order. A combined period that
    /// does not fit in `u64` saturates to `u64::MAX`, a position the base
    /// sequence never reaches, so such a rule never fires.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            period: lcm(self.period, other.period),
            label: format!("{}{}", self.label, other.label),
        }
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple of two positive integers, saturating at `u64::MAX`
const fn lcm(a: u64, b: u64) -> u64 {
    (a / gcd(a, b)).saturating_mul(b)
}

/// Index tuples of every `size`-element subset of `0..n`, in lexicographic
/// order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    /// Start enumerating `size`-subsets of `0..n`
    #[must_use]
    pub fn new(n: usize, size: usize) -> Self {
        Self {
            n,
            indices: (0..size).collect(),
            started: false,
            exhausted: size > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // Rightmost index that can still move right
        let size = self.indices.len();
        let Some(i) = (0..size)
            .rev()
            .find(|&i| self.indices[i] != i + self.n - size)
        else {
            self.exhausted = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..size {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Every non-empty subset of `0..n`, grouped by ascending size.
///
/// Singletons come before pairs, pairs before triples, and so on. The
/// composer depends on this: a subset's derived rule must be layered after
/// the rules of all its proper subsets so that its label wins.
pub fn subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..=n).flat_map(move |size| Combinations::new(n, size))
}

/// Derive one rule per non-empty subset of `rules`.
///
/// The result has `2^k - 1` entries for `k` input rules, ordered as
/// [`subsets`] enumerates them. Each subset is folded left to right from
/// [`Rule::identity`], so a single-rule subset yields that rule unchanged.
#[must_use]
pub fn combine(rules: &[Rule]) -> Vec<Rule> {
    subsets(rules.len())
        .map(|subset| {
            subset
                .iter()
                .fold(Rule::identity(), |acc, &i| acc.intersect(&rules[i]))
        })
        .collect()
}
