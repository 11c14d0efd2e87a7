use std::fs;

use crate::cli::support::{oralgrade, write_protocol, SAMPLE_PROTOCOL};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_calculate_writes_points_and_grade() {
    let dir = tempdir().unwrap();
    let path = write_protocol(dir.path(), "exam.md", SAMPLE_PROTOCOL);

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exam.md: 2.50/4 (62.5%) grade 4.0"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("---\nstudent: Ada Lovelace\n"));
    assert!(written.contains("punkte:"));
    assert!(written.contains("2.50/4"));
    assert!(written.contains("vorgeschlageneNote: 4.0\n"));
    assert!(written.ends_with("---\n\n# Fragen\n\n- Definition ++\n- Beweis +-\n- Beispiel +\n- Randfall -\n\nNotizen ohne Wertung.\n"));
}

#[test]
fn test_calculate_protocol_with_byte_order_mark() {
    let dir = tempdir().unwrap();
    let content = format!("\u{feff}{}", SAMPLE_PROTOCOL);
    let path = write_protocol(dir.path(), "exam.md", &content);

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exam.md: 2.50/4 (62.5%) grade 4.0"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("\u{feff}---\nstudent: Ada Lovelace\n"));
    assert!(written.contains("vorgeschlageneNote: 4.0\n"));
}

#[test]
fn test_calculate_alias_matches_command_id() {
    let dir = tempdir().unwrap();
    write_protocol(dir.path(), "exam.md", "- ++-\n- +\n");

    oralgrade(dir.path())
        .args(["calculate-points-and-grade", "exam.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.67/2"));
}

#[test]
fn test_calculate_overwrites_previous_values_and_keeps_other_keys() {
    let dir = tempdir().unwrap();
    let path = write_protocol(
        dir.path(),
        "exam.md",
        "---\nstudent: Ada\npunkte: stale\nvorgeschlageneNote: 5.0\nexaminer: Babbage\n---\n- +\n",
    );

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("student: Ada\n"));
    assert!(written.contains("examiner: Babbage\n"));
    assert!(written.contains("vorgeschlageneNote: 1.0\n"));
    assert!(!written.contains("stale"));
    assert!(written.ends_with("---\n- +\n"));
}

#[test]
fn test_calculate_adds_frontmatter_when_missing() {
    let dir = tempdir().unwrap();
    let path = write_protocol(dir.path(), "exam.md", "# Protocol\n- +-\n");

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("---\n"));
    assert!(written.contains("vorgeschlageneNote: 5.0\n"));
    assert!(written.ends_with("---\n# Protocol\n- +-\n"));
}

#[test]
fn test_calculate_without_scored_lines_fails_the_exam() {
    let dir = tempdir().unwrap();
    write_protocol(dir.path(), "exam.md", "# Protocol\n\n- just text\n");

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00/0 (0.0%) grade 5.0"));
}

#[test]
fn test_calculate_dry_run_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = write_protocol(dir.path(), "exam.md", SAMPLE_PROTOCOL);

    oralgrade(dir.path())
        .args(["calculate", "--dry-run", "exam.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry run)"));

    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_PROTOCOL);
}

#[test]
fn test_calculate_explain_lists_lines() {
    let dir = tempdir().unwrap();
    write_protocol(dir.path(), "exam.md", SAMPLE_PROTOCOL);

    oralgrade(dir.path())
        .args(["calculate", "--dry-run", "--explain", "exam.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 7: +2 -0 = 1.00"))
        .stdout(predicate::str::contains("line 8: +1 -1 = 0.50"))
        .stdout(predicate::str::contains("line 10: +0 -1 = 0.00"));
}

#[test]
fn test_calculate_missing_file_reports_no_active_document() {
    let dir = tempdir().unwrap();

    oralgrade(dir.path())
        .args(["calculate", "missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please open an oral exam protocol."))
        .stderr(predicate::str::contains("no active document: missing.md"));

    assert!(!dir.path().join("missing.md").exists());
}

#[test]
fn test_calculate_missing_file_json_error() {
    let dir = tempdir().unwrap();

    oralgrade(dir.path())
        .args(["--format", "json", "calculate", "missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"no_active_document\""));
}

#[test]
fn test_calculate_quiet_suppresses_notice() {
    let dir = tempdir().unwrap();

    oralgrade(dir.path())
        .args(["--quiet", "calculate", "missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_calculate_invalid_frontmatter_is_data_error() {
    let dir = tempdir().unwrap();
    let original = "---\nstudent: [Ada\n---\n- +\n";
    let path = write_protocol(dir.path(), "exam.md", original);

    oralgrade(dir.path())
        .args(["calculate", "exam.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid frontmatter"));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_calculate_walks_directories() {
    let dir = tempdir().unwrap();
    write_protocol(dir.path(), "protocols/a.md", "- +\n");
    write_protocol(dir.path(), "protocols/nested/b.md", "- -\n");
    write_protocol(dir.path(), "protocols/notes.txt", "- +\n");

    oralgrade(dir.path())
        .args(["--format", "records", "calculate", "protocols"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H oralgrade=1 records=1 mode=calculate documents=2 errors=0 dry_run=false",
        ))
        .stdout(predicate::str::contains("score=\"1.00/1\""))
        .stdout(predicate::str::contains("score=\"0.00/1\""))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_calculate_continues_after_failure() {
    let dir = tempdir().unwrap();
    let path = write_protocol(dir.path(), "good.md", "- +\n");

    oralgrade(dir.path())
        .args(["--format", "records", "calculate", "missing.md", "good.md"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("documents=1 errors=1"))
        .stdout(predicate::str::contains(
            "E path=\"missing.md\" type=no_active_document",
        ));

    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("vorgeschlageneNote: 1.0"));
}

#[test]
fn test_calculate_json_output() {
    let dir = tempdir().unwrap();
    write_protocol(dir.path(), "exam.md", "- ++-\n- +\n");

    let output = oralgrade(dir.path())
        .args(["--format", "json", "calculate", "--explain", "exam.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let doc = &json["documents"][0];
    assert_eq!(doc["path"], "exam.md");
    assert_eq!(doc["max_points"], 2);
    assert_eq!(doc["score"], "1.67/2");
    // 5/6 falls just short of the 2.0 threshold.
    assert_eq!(doc["grade"], 2.3);
    assert_eq!(doc["written"], true);
    assert_eq!(doc["lines"].as_array().unwrap().len(), 2);
    assert!(json.get("errors").is_none());
}
