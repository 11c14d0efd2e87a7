use crate::cli::support::oralgrade;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_scale_human() {
    let dir = tempdir().unwrap();
    oralgrade(dir.path())
        .arg("scale")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade"))
        .stdout(predicate::str::contains("94.0%"))
        .stdout(predicate::str::contains("<60.0%"));
}

#[test]
fn test_scale_records() {
    let dir = tempdir().unwrap();
    let output = oralgrade(dir.path())
        .args(["--format", "records", "scale"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("H oralgrade=1 records=1 mode=scale entries=10 grades=11\n"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("S ")).count(), 10);
    assert!(stdout.contains("S grade=4.0 above_min=0.00 threshold=0.6000"));
    assert!(stdout.contains("F grade=5.0 below=0.6000"));
}

#[test]
fn test_scale_json() {
    let dir = tempdir().unwrap();
    let output = oralgrade(dir.path())
        .args(["--format", "json", "scale"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["failing_grade"], 5.0);
    let grades: Vec<f64> = json["grades"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g.as_f64().unwrap())
        .collect();
    assert_eq!(
        grades,
        vec![1.0, 1.3, 1.7, 2.0, 2.3, 2.7, 3.0, 3.3, 3.7, 4.0, 5.0]
    );
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["grade"], 1.0);
    assert_eq!(entries[0]["required_above_min"], 0.85);
    assert_eq!(entries[9]["grade"], 4.0);
}
