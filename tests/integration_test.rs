#![allow(missing_docs)]

use std::process::Command;
use tempfile::TempDir;

use fizzbuzz::{combine, fizzbuzz, Rule, RuleError};

fn rule(period: u64, label: &str) -> Rule {
    Rule::new(period, label).unwrap()
}

fn first(rules: &[Rule], n: usize) -> Vec<String> {
    fizzbuzz(rules).take(n).collect()
}

/// Run the built binary and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_fizzbuzz"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
        output.status.code(),
    )
}

#[test]
fn test_combine_yields_every_non_empty_subset() {
    let rules = [rule(2, "A"), rule(3, "B"), rule(5, "C"), rule(7, "D")];
    let derived = combine(&rules);
    assert_eq!(derived.len(), 15);

    // Singletons first, in input order, untouched
    assert_eq!(&derived[..4], &rules[..]);
    // The full set comes last
    assert_eq!(derived.last(), Some(&rule(210, "ABCD")));
}

#[test]
fn test_single_rule_positions() {
    for n in 1..=6_u64 {
        let seq = first(&[rule(n, "w")], 60);
        for (i, value) in (1..=60_u64).zip(&seq) {
            if i % n == 0 {
                assert_eq!(value, "w", "n = {n}, i = {i}");
            } else {
                assert_eq!(value, &i.to_string(), "n = {n}, i = {i}");
            }
        }
    }
}

#[test]
fn test_classic_fizzbuzz() {
    assert_eq!(
        first(&[rule(3, "Fizz"), rule(5, "Buzz")], 15),
        vec![
            "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
            "14", "FizzBuzz",
        ]
    );
}

#[test]
fn test_independent_constructions_agree() {
    let rules = [rule(3, "Fizz"), rule(5, "Buzz"), rule(7, "Bazz")];
    let mut a = fizzbuzz(&rules);
    let b: Vec<String> = fizzbuzz(&rules).take(200).collect();

    // Advancing one instance does not affect the other
    let a_first: Vec<String> = a.by_ref().take(200).collect();
    assert_eq!(a_first, b);
    assert_eq!(a.next().as_deref(), Some("201"));
}

#[test]
fn test_label_order_follows_rule_order() {
    let seq = first(&[rule(3, "Fizz"), rule(5, "Buzz")], 15);
    assert_eq!(seq[14], "FizzBuzz");
    assert_ne!(seq[14], "BuzzFizz");
}

#[test]
fn test_empty_rule_set_is_plain_integers() {
    assert_eq!(first(&[], 5), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_three_rules_combine_at_lcm() {
    let seq = first(&[rule(2, "A"), rule(3, "B"), rule(5, "C")], 30);
    assert_eq!(seq[5], "AB");
    assert_eq!(seq[9], "AC");
    assert_eq!(seq[14], "BC");
    assert_eq!(seq[29], "ABC");
}

#[test]
fn test_non_coprime_periods_use_lcm() {
    let seq = first(&[rule(4, "Four"), rule(6, "Six")], 24);
    assert_eq!(seq[3], "Four");
    assert_eq!(seq[5], "Six");
    assert_eq!(seq[7], "Four");
    assert_eq!(seq[11], "FourSix");
    assert_eq!(seq[23], "FourSix");
}

#[test]
fn test_pulling_continues_where_it_stopped() {
    let mut seq = fizzbuzz(&[rule(3, "Fizz"), rule(5, "Buzz")]);
    let first_five: Vec<String> = seq.by_ref().take(5).collect();
    let next_five: Vec<String> = seq.by_ref().take(5).collect();
    assert_eq!(first_five, vec!["1", "2", "Fizz", "4", "Buzz"]);
    assert_eq!(next_five, vec!["Fizz", "7", "8", "Fizz", "Buzz"]);
}

#[test]
fn test_same_period_rules_concatenate() {
    let seq = first(&[rule(3, "a"), rule(3, "b")], 3);
    assert_eq!(seq[2], "ab");
}

#[test]
fn test_first_sixteen_primes_combine_without_error() {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];
    let rules: Vec<Rule> = primes.iter().map(|&p| rule(p, "x")).collect();
    let derived = combine(&rules);
    assert_eq!(derived.len(), 65535);
    assert_eq!(derived.last().map(Rule::period), Some(u64::MAX));
}

#[test]
fn test_huge_combined_period_never_fires() {
    let seq = first(&[rule(4_294_967_311, "A"), rule(4_294_967_357, "B")], 3);
    assert_eq!(seq, vec!["1", "2", "3"]);
}

#[test]
fn test_cli_huge_primes_succeed() {
    let (stdout, _stderr, code) =
        run_cli(&["-n", "2", "--fb", "4294967311", "A", "--fb", "4294967357", "B"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "1\n2\n");
}

#[test]
fn test_invalid_periods_rejected_at_the_boundary() {
    assert_eq!(Rule::new(0, "x"), Err(RuleError::InvalidPeriod(0)));
    assert_eq!(
        Rule::try_from_signed(-1, "x"),
        Err(RuleError::InvalidPeriod(-1))
    );
}

#[test]
fn test_cli_default_rules_print_plain_integers() {
    let (stdout, _stderr, code) = run_cli(&["-n", "3"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "1\n2\n3\n");
}

#[test]
fn test_cli_default_count_is_one_hundred() {
    let (stdout, _stderr, code) = run_cli(&[]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.lines().count(), 100);
    assert_eq!(stdout.lines().last(), Some("100"));
}

#[test]
fn test_cli_fizzbuzz_rules() {
    let (stdout, _stderr, code) = run_cli(&["-n", "15", "--fb", "3", "Fizz", "--fb", "5", "Buzz"]);
    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[2], "Fizz");
    assert_eq!(lines[4], "Buzz");
    assert_eq!(lines[14], "FizzBuzz");
}

#[test]
fn test_cli_jsonl_format() {
    let (stdout, _stderr, code) = run_cli(&["-n", "3", "--fb", "3", "Fizz", "--format", "jsonl"]);
    assert_eq!(code, Some(0));
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["position"], 3);
    assert_eq!(last["value"], "Fizz");
}

#[test]
fn test_cli_rejects_zero_period() {
    let (stdout, stderr, code) = run_cli(&["-n", "3", "--fb", "0", "Zero"]);
    assert_ne!(code, Some(0));
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid period 0"), "stderr: {stderr}");
}

#[test]
fn test_cli_rejects_negative_period() {
    let (_stdout, stderr, code) = run_cli(&["--fb", "-3", "Fizz"]);
    assert_ne!(code, Some(0));
    assert!(stderr.contains("invalid period -3"), "stderr: {stderr}");
}

#[test]
fn test_cli_config_file_rules_and_count() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fizzbuzz.toml");
    std::fs::write(
        &path,
        r#"
count = 6

[[rule]]
period = 2
word = "A"
"#,
    )
    .unwrap();

    let (stdout, _stderr, code) = run_cli(&["--config", path.to_str().unwrap(), "--fb", "3", "B"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "1\nA\nB\nA\n5\nAB\n");
}

#[test]
fn test_cli_explain_writes_to_stderr_only() {
    let (stdout, stderr, code) = run_cli(&["-n", "1", "--explain", "--fb", "3", "Fizz", "--fb", "5", "Buzz"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout, "1\n");
    assert!(stderr.contains("Derived rules (3"), "stderr: {stderr}");
    assert!(stderr.contains("FizzBuzz"), "stderr: {stderr}");
}
