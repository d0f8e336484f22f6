//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const SIMPLE: &str = "The cat sat. The dog ran. Birds fly high.";

const DENSE: &str = "Notwithstanding considerable organizational complications, \
    institutional administrators systematically implemented comprehensive \
    methodological transformations throughout multidimensional infrastructures.";

/// Write `content` to a temp file with the given suffix.
fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let tmp = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    std::fs::write(tmp.path(), content).unwrap();
    tmp
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("output should be valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn long_help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("READSCORE_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["min_content_chars"].as_u64().is_some());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_file_prints_score_and_labels() {
    let tmp = temp_file(".txt", SIMPLE);
    cmd()
        .args(["score", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Level"))
        .stdout(predicate::str::contains("Audience"))
        .stdout(predicate::str::contains("Badge"));
}

#[test]
fn score_reads_stdin() {
    let output = cmd()
        .args(["score", "-", "--json"])
        .write_stdin(SIMPLE)
        .output()
        .unwrap();
    let json = json_stdout(&output);

    let score = json["score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    assert_eq!(json["metrics"]["sentence_count"], 3);
    assert_eq!(json["metrics"]["word_count"], 9);
}

#[test]
fn score_json_has_report_fields() {
    let tmp = temp_file(".txt", SIMPLE);
    let output = cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    for field in ["score", "level", "audience", "badge", "letter_grade", "stats"] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    assert!(json["breakdown"]["paragraph_count"].as_u64().is_some());
    assert_eq!(json["below_min"], false);
}

#[test]
fn score_blank_input_is_zero() {
    cmd()
        .args(["score", "-"])
        .write_stdin("   \n\n  ")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0\n"))
        .stdout(predicate::str::contains("Very Difficult"))
        .stdout(predicate::str::contains("Graduate level"));
}

#[test]
fn score_empty_file_with_byte_order_mark_is_zero() {
    let tmp = temp_file(".txt", "\u{feff}\r\n");
    let output = cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["score"].as_f64(), Some(0.0));
    assert_eq!(json["level"], "Very Difficult");
    assert!(json.get("metrics").is_none());
}

#[test]
fn score_below_minimum_fails() {
    let tmp = temp_file(".txt", DENSE);
    cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--min-score", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min: 90"));
}

#[test]
fn score_below_minimum_in_json_mode_reports_without_failing() {
    let tmp = temp_file(".txt", DENSE);
    let output = cmd()
        .args([
            "score",
            tmp.path().to_str().unwrap(),
            "--min-score",
            "90",
            "--json",
        ])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["min_score"].as_f64(), Some(90.0));
    assert_eq!(json["below_min"], true);
}

#[test]
fn score_breakdown_shows_sub_scores() {
    let tmp = temp_file(".txt", SIMPLE);
    cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch base"))
        .stdout(predicate::str::contains("Paragraph bonus"));
}

#[test]
fn score_strips_markdown_files() {
    let tmp = temp_file(
        ".md",
        "# Notes\n\nThe cat sat.\n\n```rust\nfn main() { println!(\"x\"); }\n```\n",
    );
    let output = cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    // "Notes" and "The cat sat."; the code block is dropped
    assert_eq!(json["metrics"]["word_count"], 4);
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/draft.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Classify Command
// =============================================================================

#[test]
fn classify_band_boundary() {
    cmd()
        .args(["classify", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Very Easy"))
        .stdout(predicate::str::contains("5th grade"));

    cmd()
        .args(["classify", "89.999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Very Easy").not())
        .stdout(predicate::str::contains("Easy"))
        .stdout(predicate::str::contains("6th grade"));
}

#[test]
fn classify_json_output() {
    let output = cmd()
        .args(["classify", "45", "--json"])
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["level"], "Difficult");
    assert_eq!(json["audience"], "College level");
    assert_eq!(json["badge"], "Average");
    assert_eq!(json["letter_grade"], "C");
}

#[test]
fn classify_rejects_non_numeric_score() {
    cmd().args(["classify", "high"]).assert().failure();
}

// =============================================================================
// Validate Command
// =============================================================================

#[test]
fn validate_accepts_long_content() {
    let tmp = temp_file(
        ".txt",
        "This draft has more than enough characters to pass the publish check.",
    );
    cmd()
        .args(["validate", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn validate_rejects_short_content() {
    let tmp = temp_file(".txt", "Too short.");
    cmd()
        .args(["validate", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("content too short"));
}

#[test]
fn validate_rejects_empty_stdin() {
    cmd()
        .args(["validate", "-"])
        .write_stdin("  \n ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("content is empty"));
}

#[test]
fn validate_rejects_byte_order_mark_only_file() {
    let tmp = temp_file(".txt", "\u{feff}");
    cmd()
        .args(["validate", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("content is empty"));
}

#[test]
fn validate_json_reports_stats() {
    let output = cmd()
        .args(["validate", "-", "--min-chars", "5", "--json"])
        .write_stdin("Too short.")
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["valid"], true);
    assert_eq!(json["min_chars"], 5);
    assert_eq!(json["stats"]["characters"], 10);
    assert_eq!(json["stats"]["words"], 2);
}
