use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rusty-resample"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binary")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is valid UTF-8")
}

fn write_input(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("in.csv");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn resamples_to_requested_frequency() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,0\n1,10\n2,20\n");
    let output = dir.path().join("out.csv");

    let out = run(&["2", path_str(&input), path_str(&output)]);

    assert_eq!(Some(0), out.status.code());
    assert_eq!(
        "0,0,\n0.5,5,\n1,10,\n1.5,15,\n2,20,\n",
        fs::read_to_string(&output).unwrap()
    );
}

#[test]
fn output_can_be_resampled_again() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,0,4\n0.3,3,1\n1,0,0\n");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    assert_eq!(
        Some(0),
        run(&["4", path_str(&input), path_str(&first)]).status.code()
    );
    assert_eq!(
        Some(0),
        run(&["4", path_str(&first), path_str(&second)]).status.code()
    );
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn wrong_argument_count_prints_usage_to_stdout() {
    let out = run(&["10", "only_input.csv"]);

    assert_eq!(Some(1), out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("OUTPUT_FREQUENCY_HZ"));
}

#[test]
fn no_arguments_prints_usage() {
    let out = run(&[]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn non_numeric_frequency_is_reported_on_stderr() {
    let out = run(&["ten", "in.csv", "out.csv"]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("Failed to convert 'ten' to output frequency"));
}

#[test]
fn zero_frequency_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,0\n1,1\n");
    let output = dir.path().join("out.csv");

    let out = run(&["0", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Output frequency"));
    assert!(!output.exists());
}

#[test]
fn missing_input_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does_not_exist.csv");
    let output = dir.path().join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to open"));
    assert!(stderr.contains("does_not_exist.csv"));
}

#[test]
fn inconsistent_columns_cite_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,1,2\n1,2,3\n2,3\n");
    let output = dir.path().join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("On line 3, found 2 columns, expected 3"));
}

#[test]
fn bad_token_cites_token_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,1\n1,x1\n");
    let output = dir.path().join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr)
        .contains("Failed to convert 'x1' to a number on line 2"));
}

#[test]
fn decreasing_time_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,1\n2,2\n1,3\n");
    let output = dir.path().join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr).contains("strictly increasing"));
}

#[test]
fn huge_time_span_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,0\n1e300,1\n");
    let output = dir.path().join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Output would have"));
    assert!(!output.exists());
}

#[test]
fn infinite_time_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,0\ninf,1\n");
    let output = dir.path().join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Time must be finite"));
}

#[test]
fn unwritable_output_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "0,0\n1,1\n");
    let output = dir.path().join("missing_dir").join("out.csv");

    let out = run(&["1", path_str(&input), path_str(&output)]);

    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("for output"));
    assert!(stderr.contains("out.csv"));
}
