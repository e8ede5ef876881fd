//! CLI Integration Tests for main.rs
//!
//! Runs the compiled binary and checks:
//! - the exact three-line stdout format of the reference run
//! - argument overrides for operands, rounds and strategy
//! - the N/A sentinel for zero rounds
//! - non-zero exit and stderr diagnostics for invalid arguments

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::{parse_report, REPORT_PATTERN};

fn eval_bench() -> Command {
    let mut cmd = Command::cargo_bin("eval-bench").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// **What is tested:** Reference run without any arguments
/// **Why it is tested:** The binary must reproduce the reference output format exactly
/// **Test conditions:** No arguments
/// **Expectations:** Exit 0, three lines matching the format, result 38, nothing on stderr
#[test]
fn test_reference_run_output_format() {
    eval_bench()
        .assert()
        .success()
        .stdout(predicate::str::is_match(REPORT_PATTERN).unwrap())
        .stdout(predicate::str::starts_with("Result: 38\n"))
        .stderr(predicate::str::is_empty());
}

/// **What is tested:** Parsed timing values of the reference run
/// **Why it is tested:** The average must be finite and non-negative and consistent with the total
/// **Test conditions:** No arguments (100000 rounds)
/// **Expectations:** total >= 0, average >= 0, average ~= total / rounds
#[test]
fn test_reference_run_values() {
    let output = eval_bench().output().unwrap();
    assert!(output.status.success());

    let report = parse_report(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(report.result, 38);
    assert!(report.total_ms >= 0.0);

    let avg = report.average_ns.expect("average should be numeric");
    assert!(avg.is_finite());
    assert!(avg >= 0.0);

    // Both printed values are rounded, so allow for that on top of the division.
    let expected = report.total_ms * 1e6 / 100_000.0;
    assert!((avg - expected).abs() <= 0.01 + 0.00005 * 1e6 / 100_000.0);
}

/// **What is tested:** Result line stability across repeated runs
/// **Why it is tested:** The function is deterministic; only timing lines may differ
/// **Test conditions:** Two runs with identical arguments
/// **Expectations:** Identical first lines
#[test]
fn test_result_line_idempotent() {
    let first = eval_bench().args(["-r", "1000"]).output().unwrap();
    let second = eval_bench().args(["-r", "1000"]).output().unwrap();

    let first = String::from_utf8_lossy(&first.stdout).lines().next().map(str::to_owned);
    let second = String::from_utf8_lossy(&second.stdout).lines().next().map(str::to_owned);
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("Result: 38"));
}

/// **What is tested:** Operand overrides at the branch boundary
/// **Why it is tested:** a + b == 10 must take the decrement branch
/// **Test conditions:** -a 4 -b 6
/// **Expectations:** Result: 9
#[test]
fn test_operand_boundary() {
    eval_bench()
        .args(["-a", "4", "-b", "6", "--rounds", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Result: 9\n"));
}

/// **What is tested:** Negative operands
/// **Why it is tested:** Negative values must parse as values, not flags
/// **Test conditions:** --a -7 --b 2
/// **Expectations:** Result: -6
#[test]
fn test_negative_operands() {
    eval_bench()
        .args(["--a", "-7", "--b", "2", "-r", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Result: -6\n"));
}

/// **What is tested:** Zero rounds
/// **Why it is tested:** The per-iteration average would divide by zero
/// **Test conditions:** --rounds 0
/// **Expectations:** Exit 0, Result: 0, average reported as N/A
#[test]
fn test_zero_rounds_sentinel() {
    let assert = eval_bench().args(["--rounds", "0"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.starts_with("Result: 0\n"));
    assert!(stdout.ends_with("Average per iteration: N/A\n"));
    assert_eq!(parse_report(&stdout).average_ns, None);
}

/// **What is tested:** Single round
/// **Why it is tested:** With one call the average equals the total
/// **Test conditions:** --rounds 1
/// **Expectations:** average ns within rounding of total ms * 1e6
#[test]
fn test_single_round() {
    let output = eval_bench().args(["--rounds", "1"]).output().unwrap();
    let report = parse_report(&String::from_utf8_lossy(&output.stdout));

    let avg = report.average_ns.unwrap();
    // total_ms is printed to 4 decimals, i.e. 100 ns resolution.
    assert!((avg - report.total_ms * 1e6).abs() <= 50.0 + 0.01);
}

/// **What is tested:** Every strategy through the binary
/// **Why it is tested:** Interpreted strategies must agree with the direct call
/// **Test conditions:** --strategy direct|tree|vm with the reference operands
/// **Expectations:** Result: 38 for each
#[test]
fn test_all_strategies() {
    for strategy in ["direct", "tree", "vm"] {
        eval_bench()
            .args(["--strategy", strategy, "--rounds", "1_000"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(REPORT_PATTERN).unwrap())
            .stdout(predicate::str::starts_with("Result: 38\n"));
    }
}

/// **What is tested:** Unknown strategy
/// **Why it is tested:** Invalid configuration must fail fast with a diagnostic
/// **Test conditions:** --strategy jit
/// **Expectations:** Exit 1, stderr names the flag and the accepted values, stdout empty
#[test]
fn test_invalid_strategy() {
    eval_bench()
        .args(["--strategy", "jit"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--strategy='jit'"))
        .stderr(predicate::str::contains("direct, tree, vm"));
}

/// **What is tested:** Malformed round counts
/// **Why it is tested:** Negative and non-numeric counts must be rejected, not defaulted
/// **Test conditions:** --rounds -5, --rounds many, --rounds 1__0
/// **Expectations:** Exit 1 with an --rounds diagnostic
#[test]
fn test_invalid_rounds() {
    for raw in ["-5", "many", "1__0"] {
        eval_bench()
            .arg(format!("--rounds={raw}"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("--rounds"));
    }
}

/// **What is tested:** Non-numeric and out-of-range operands
/// **Why it is tested:** Operand errors must exit like every other config error
/// **Test conditions:** -a nine; -b 99999999999
/// **Expectations:** Exit code 1, message naming the flag and raw value, empty stdout
#[test]
fn test_invalid_operand() {
    eval_bench()
        .args(["-a", "nine"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--a='nine'"));

    eval_bench()
        .args(["-b", "99999999999"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--b='99999999999'"));
}

/// **What is tested:** Verbose logging destination
/// **Why it is tested:** Logs must never pollute the three-line stdout report
/// **Test conditions:** --verbose with a small round count
/// **Expectations:** stdout still matches the report format, stderr carries debug lines
#[test]
fn test_verbose_logs_to_stderr() {
    eval_bench()
        .args(["--verbose", "--rounds", "100"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(REPORT_PATTERN).unwrap())
        .stderr(predicate::str::contains("rounds=100"));
}

/// **What is tested:** --version and --help
/// **Why it is tested:** Standard clap surface
/// **Test conditions:** Each flag on its own
/// **Expectations:** Exit 0 with the crate name and option list
#[test]
fn test_version_and_help() {
    eval_bench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval-bench"));

    eval_bench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--rounds"))
        .stdout(predicate::str::contains("--strategy"));
}
