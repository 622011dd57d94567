// End-to-end tests for `triad convert`

use predicates::prelude::*;
use std::fs;
mod test_env;
use test_env::{setup_test_env, triad_cmd, write_input};

#[test]
fn test_convert_basic() {
    let temp_dir = setup_test_env();
    let input = write_input(temp_dir.path(), "numbers.txt", "10\n-1\n0\n");

    triad_cmd(temp_dir.path())
        .args(["convert", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("NUMBER BASE CONVERTER"))
        .stdout(predicate::str::contains("Processing 3 items from 'numbers.txt'..."))
        .stdout(predicate::str::contains("FFFFFFFF"))
        .stdout(predicate::str::contains("Total items processed: 3"))
        .stdout(predicate::str::contains("Total errors: 0"))
        .stdout(predicate::str::contains("Results saved to 'ConvertionResults.txt'"));

    let saved = fs::read_to_string(temp_dir.path().join("ConvertionResults.txt")).unwrap();
    assert!(saved.contains("NUMBER BASE CONVERSION RESULTS"));
    assert!(saved.contains(&format!("Binary: {:>20}", "1010")));
    assert!(!saved.contains("ERRORS ENCOUNTERED"));
}

#[test]
fn test_convert_reports_invalid_lines() {
    let temp_dir = setup_test_env();
    let input = write_input(temp_dir.path(), "numbers.txt", "5\n3.14\n\nabc\n");

    triad_cmd(temp_dir.path())
        .args(["convert", &input])
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR - Line 2: Invalid number format: '3.14'"))
        .stderr(predicate::str::contains("ERROR - Line 4: Invalid number format: 'abc'"))
        .stdout(predicate::str::contains("Total errors: 2"));

    let saved = fs::read_to_string(temp_dir.path().join("ConvertionResults.txt")).unwrap();
    assert!(saved.contains("ERRORS ENCOUNTERED:"));
    assert!(saved.contains("Line 4: Invalid number format: 'abc'"));
}

#[test]
fn test_convert_elides_long_display_but_not_file() {
    let temp_dir = setup_test_env();
    let content: String = (1..=30).map(|n| format!("{}\n", n)).collect();
    let input = write_input(temp_dir.path(), "numbers.txt", &content);

    triad_cmd(temp_dir.path())
        .args(["convert", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("... (10 more results) ..."));

    let saved = fs::read_to_string(temp_dir.path().join("ConvertionResults.txt")).unwrap();
    assert_eq!(saved.matches("Decimal:").count(), 30);
}

#[test]
fn test_convert_missing_file() {
    let temp_dir = setup_test_env();

    triad_cmd(temp_dir.path())
        .args(["convert", "absent.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: File 'absent.txt' not found."));
}

#[test]
fn test_convert_json() {
    let temp_dir = setup_test_env();
    let input = write_input(temp_dir.path(), "numbers.txt", "255\nnope\n");

    let output = triad_cmd(temp_dir.path())
        .args(["convert", &input, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["conversions"][0]["hexadecimal"], "FF");
    assert_eq!(value["conversions"][0]["binary"], "11111111");
    assert_eq!(value["total_errors"], 1);
    assert_eq!(value["errors"][0]["line"], 2);
}

#[test]
fn test_convert_accepts_values_beyond_signed_64_bit() {
    let temp_dir = setup_test_env();
    let input = write_input(temp_dir.path(), "numbers.txt", "18446744073709551615\n");

    triad_cmd(temp_dir.path())
        .args(["convert", &input])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid number format").not())
        .stdout(predicate::str::contains("Total items processed: 1"))
        .stdout(predicate::str::contains("Total errors: 0"))
        .stdout(predicate::str::contains("FFFFFFFFFFFFFFFF"));

    let saved = fs::read_to_string(temp_dir.path().join("ConvertionResults.txt")).unwrap();
    assert!(saved.contains(&"1".repeat(64)));
}
