use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn read_raw_files_cmd() -> Command {
    Command::cargo_bin("read-raw-files").unwrap()
}

#[test]
fn test_prints_file_section() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt"), [0x48, 0x65, 0x6c, 0x6c, 0x6f]).unwrap();

    read_raw_files_cmd()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("\n=== a.txt ===\nHello\n");
}

#[test]
fn test_invalid_utf8_uses_replacement_marker() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("mixed.bin"), b"abc\xffdef").unwrap();
    fs::write(tmp.path().join("plain.txt"), "plain").unwrap();

    read_raw_files_cmd()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== mixed.bin ===\nabc\u{FFFD}def\n"))
        .stdout(predicate::str::contains("=== plain.txt ===\nplain\n"));
}

#[test]
fn test_missing_directory_reports_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    read_raw_files_cmd()
        .arg(&missing)
        .assert()
        .success()
        .stdout(format!("Error: '{}' is not a valid directory.\n", missing.display()));
}

#[test]
fn test_file_argument_reports_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("file.txt");
    fs::write(&file, "x").unwrap();

    read_raw_files_cmd()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("is not a valid directory."))
        .stdout(predicate::str::contains("===").not());
}

#[test]
fn test_no_arguments_prints_usage() {
    read_raw_files_cmd()
        .assert()
        .success()
        .stdout("Usage: read-raw-files <directory_path>\n");
}

#[test]
fn test_extra_arguments_print_usage() {
    read_raw_files_cmd()
        .args(["one", "two"])
        .assert()
        .success()
        .stdout("Usage: read-raw-files <directory_path>\n");
}

#[test]
fn test_log_output_stays_off_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("only.txt"), "body").unwrap();

    read_raw_files_cmd()
        .arg("-vv")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("\n=== only.txt ===\nbody\n")
        .stderr(predicate::str::contains("Dumped 1 files"));
}
