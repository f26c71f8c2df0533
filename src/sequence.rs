//! Sequence composer
//!
//! Builds the infinite FizzBuzz sequence by layering one periodic-replace
//! transform per derived rule over the stringified positive integers.
//!
//! Every transform pulls exactly one element from its upstream for each
//! element it emits, so the n-th element seen by any layer is always the
//! n-th integer position. A layer added later therefore overwrites whatever
//! earlier layers put at the positions it matches, which is how
//! `"FizzBuzz"` takes precedence over `"Fizz"` and `"Buzz"`.

use log::debug;

use crate::rules::{combine, Rule};

type Strings = Box<dyn Iterator<Item = String>>;

/// The base sequence: `"1"`, `"2"`, `"3"`, ...
///
/// Stops after `u64::MAX - 1`. Position `u64::MAX` is never emitted, so a
/// rule whose combined period saturated to `u64::MAX` never fires.
#[derive(Debug, Clone)]
pub struct Naturals {
    next: u64,
}

impl Naturals {
    /// Start counting from 1
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for Naturals {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Naturals {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next;
        self.next = current.checked_add(1)?;
        Some(current.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = u64::MAX - self.next;
        usize::try_from(remaining).map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}

/// Replaces every `period`-th element of its upstream with a fixed label.
///
/// Positions are 1-indexed over this transform's own input: elements
/// `period`, `2 * period`, ... are replaced, everything else passes through
/// in order.
#[derive(Debug, Clone)]
pub struct ReplaceEvery<I> {
    upstream: I,
    rule: Rule,
    since_last: u64,
}

impl<I> ReplaceEvery<I>
where
    I: Iterator<Item = String>,
{
    /// Wrap `upstream`, substituting `rule`'s label every `rule.period()` elements
    #[must_use]
    pub const fn new(upstream: I, rule: Rule) -> Self {
        Self {
            upstream,
            rule,
            since_last: 0,
        }
    }

    /// The rule this layer applies
    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }
}

impl<I> Iterator for ReplaceEvery<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // Always advance upstream, even when the element is discarded
        let item = self.upstream.next()?;
        self.since_last += 1;
        if self.since_last == self.rule.period() {
            self.since_last = 0;
            Some(self.rule.label().to_string())
        } else {
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

/// Adapter method for layering rules onto any string iterator
pub trait ReplaceEveryExt: Iterator<Item = String> + Sized {
    /// Replace every `rule.period()`-th element with `rule.label()`
    fn replace_every(self, rule: Rule) -> ReplaceEvery<Self> {
        ReplaceEvery::new(self, rule)
    }
}

impl<I: Iterator<Item = String>> ReplaceEveryExt for I {}

/// The composed, infinite FizzBuzz sequence.
///
/// Pulling an element advances every layer by exactly one step. The
/// sequence cannot be rewound; build a new one to start again from 1.
pub struct FizzBuzz {
    inner: Strings,
    layers: usize,
}

impl FizzBuzz {
    /// Number of replace transforms layered over the base sequence
    #[must_use]
    pub const fn layers(&self) -> usize {
        self.layers
    }
}

impl std::fmt::Debug for FizzBuzz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FizzBuzz")
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

impl Iterator for FizzBuzz {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Layer one replace transform per rule, in the given order, over [`Naturals`].
///
/// Later rules win where periods overlap, so `derived` should come from
/// [`combine`]. An empty list yields the base sequence unchanged.
#[must_use]
pub fn compose(derived: Vec<Rule>) -> FizzBuzz {
    let layers = derived.len();
    let inner = derived.into_iter().fold(
        Box::new(Naturals::new()) as Strings,
        |seq, rule| {
            debug!("layering every {} -> {:?}", rule.period(), rule.label());
            Box::new(seq.replace_every(rule)) as Strings
        },
    );
    FizzBuzz { inner, layers }
}

/// Build the lazy FizzBuzz sequence for an ordered rule set.
///
/// ```
/// use fizzbuzz::{fizzbuzz, Rule};
///
/// let rules = [Rule::new(3, "Fizz").unwrap(), Rule::new(5, "Buzz").unwrap()];
/// let fifteenth = fizzbuzz(&rules).nth(14).unwrap();
/// assert_eq!(fifteenth, "FizzBuzz");
/// ```
#[must_use]
pub fn fizzbuzz(rules: &[Rule]) -> FizzBuzz {
    compose(combine(rules))
}
