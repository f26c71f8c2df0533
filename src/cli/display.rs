//! Terminal output
//!
//! The sequence goes to stdout so it can be piped; the derived-rule table
//! printed by `--explain` goes to stderr.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use super::OutputFormat;
use crate::rules::Rule;

/// One line of `jsonl` output
#[derive(Debug, Serialize)]
struct Element<'a> {
    position: u64,
    value: &'a str,
}

/// Whether any rule fires at a 1-indexed position.
///
/// A derived rule fires only where all of its source rules fire, so checking
/// the input rules is enough.
fn is_replaced(position: u64, rules: &[Rule]) -> bool {
    rules.iter().any(|r| position % r.period() == 0)
}

/// Write the first `count` elements of `seq` to `out`, one per line.
///
/// In `plain` output, elements at positions where one of `highlight` fires
/// are coloured. Pass an empty slice to disable colouring.
pub fn write_sequence<W, I>(
    out: &mut W,
    seq: I,
    count: u64,
    format: OutputFormat,
    highlight: &[Rule],
) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = String>,
{
    for (position, value) in (1..=count).zip(seq) {
        match format {
            OutputFormat::Plain if is_replaced(position, highlight) => {
                writeln!(out, "{}", value.yellow().bold())?;
            }
            OutputFormat::Plain => writeln!(out, "{value}")?,
            OutputFormat::Jsonl => {
                let line = serde_json::to_string(&Element {
                    position,
                    value: &value,
                })?;
                writeln!(out, "{line}")?;
            }
        }
    }
    out.flush()
}

/// Format one row of the derived-rule table
fn format_rule_line(index: usize, rule: &Rule) -> String {
    format!(
        "  {:>3}. every {:<6} {}",
        index + 1,
        rule.period(),
        format!("{:?}", rule.label()).bold()
    )
}

/// Print derived rules to stderr in the order they are layered
pub fn render_rules(rules: &[Rule]) {
    eprintln!(
        "\n{} {}",
        "===".bold().cyan(),
        format!("Derived rules ({}, applied in order)", rules.len())
            .bold()
            .cyan()
    );
    eprintln!("{}", "─".repeat(50).dimmed());
    if rules.is_empty() {
        eprintln!("  {}", "(none: plain integers)".dimmed());
    }
    for (i, rule) in rules.iter().enumerate() {
        eprintln!("{}", format_rule_line(i, rule));
    }
    eprintln!();
}
