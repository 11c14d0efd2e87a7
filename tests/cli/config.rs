use std::fs;

use crate::cli::support::{oralgrade, write_config, write_protocol};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_custom_metadata_keys() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        "[metadata]\nscore_key = \"points\"\ngrade_key = \"grade\"\n",
    );
    let path = write_protocol(dir.path(), "exam.md", "- +\n");

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("points:"));
    assert!(written.contains("grade: 1"));
    assert!(!written.contains("punkte"));
    assert!(!written.contains("vorgeschlageneNote"));
}

#[test]
fn test_custom_extensions_when_walking() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "extensions = [\"txt\"]\n");
    write_protocol(dir.path(), "protocols/a.md", "- +\n");
    write_protocol(dir.path(), "protocols/b.txt", "- +\n");

    oralgrade(dir.path())
        .args(["calculate", "--dry-run", "protocols"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("a.md").not());
}

#[test]
fn test_invalid_config_is_data_error() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[metadata]\nscore_key = \"same\"\ngrade_key = \"same\"\n");
    write_protocol(dir.path(), "exam.md", "- +\n");

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_config_is_not_needed_for_grade() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "not toml at all [");

    oralgrade(dir.path()).args(["grade", "0.9"]).assert().success();
}
