//! Integration tests for the invtab binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn batch_on_empty_folder_reports_no_files() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    Command::cargo_bin("invtab")
        .unwrap()
        .arg("batch")
        .arg(input.path())
        .arg("--output-dir")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No PDF files found"));
}

#[test]
fn process_missing_file_fails() {
    let output = tempfile::tempdir().unwrap();

    Command::cargo_bin("invtab")
        .unwrap()
        .arg("process")
        .arg("does_not_exist.pdf")
        .arg("--output-dir")
        .arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn process_json_format_reports_parse_errors() {
    let input = tempfile::tempdir().unwrap();
    let pdf = input.path().join("garbage.pdf");
    std::fs::write(&pdf, b"not a pdf").unwrap();

    Command::cargo_bin("invtab")
        .unwrap()
        .arg("process")
        .arg(&pdf)
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse PDF"));
}

#[test]
fn batch_skips_unparseable_pdfs() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("garbage.pdf"), b"not a pdf").unwrap();

    Command::cargo_bin("invtab")
        .unwrap()
        .arg("batch")
        .arg(input.path())
        .arg("--output-dir")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("invtab")
        .unwrap()
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("stream_edge_tolerance"));
}
