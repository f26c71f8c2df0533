//! FizzBuzz - lazy, generalized FizzBuzz sequences
//!
//! CLI entry point: prints the first N elements for the given rules.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::debug;

use fizzbuzz::cli::{render_rules, write_sequence, OutputFormat, RunSettings};
use fizzbuzz::config::FizzBuzzConfig;
use fizzbuzz::rules::{combine, Rule};
use fizzbuzz::sequence::compose;

/// Generalized FizzBuzz
///
/// For some set of words and integers, replace a number with that word if
/// the index it appears at is a multiple of that integer. Numbers that are
/// multiples of several integers get all the matching words, in the order
/// the rules were given.
#[derive(Parser, Debug)]
#[command(name = "fizzbuzz", version, about)]
struct Cli {
    /// Number of things to print [default: 100]
    #[arg(short = 'n', long = "count")]
    count: Option<u64>,

    /// Integer followed by word, e.g. `--fb 3 Fizz --fb 5 Buzz`
    #[arg(
        long = "fb",
        num_args = 2,
        value_names = ["N", "WORD"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    fb: Vec<String>,

    /// TOML file with `[[rule]]` tables (applied before --fb rules)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Colour replaced elements in plain output
    #[arg(long)]
    highlight: bool,

    /// Print the derived rules to stderr before the sequence
    #[arg(long)]
    explain: bool,
}

/// Load the rules file if one was given.
fn load_config(path: Option<&PathBuf>) -> Result<Option<FizzBuzzConfig>> {
    path.map(|path| {
        FizzBuzzConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))
    })
    .transpose()
}

/// Treat a closed stdout (e.g. `fizzbuzz | head`) as a normal end of output.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let settings = RunSettings::resolve(config.as_ref(), cli.count, &cli.fb)?;
    debug!(
        "{} input rule(s), printing {} element(s)",
        settings.rules.len(),
        settings.count
    );

    let derived = combine(&settings.rules);
    if cli.explain {
        render_rules(&derived);
    }

    let highlight: &[Rule] = if cli.highlight {
        &settings.rules
    } else {
        &[]
    };
    let sequence = compose(derived);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    ignore_broken_pipe(write_sequence(
        &mut out,
        sequence,
        settings.count,
        cli.format,
        highlight,
    ))
    .context("Failed to write output")?;

    Ok(())
}
