use crate::cli::support::oralgrade;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    oralgrade(dir.path())
        .args(["--log-level", "debug", "grade", "0.7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    oralgrade(dir.path())
        .args(["grade", "0.7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    oralgrade(dir.path())
        .args(["--verbose", "grade", "0.7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_produces_valid_json() {
    let dir = tempdir().unwrap();
    oralgrade(dir.path())
        .args(["--log-json", "--log-level", "debug", "grade", "0.7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"timestamp\""))
        .stderr(predicate::str::contains("\"level\""));
}

#[test]
fn test_log_env_var_overrides_level() {
    let dir = tempdir().unwrap();
    oralgrade(dir.path())
        .env("ORALGRADE_LOG", "oralgrade=debug")
        .args(["grade", "0.7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
