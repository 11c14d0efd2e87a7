//! Shared output helpers for commands

use oralgrade_core::error::Result;
use serde::Serialize;

/// Records format header line
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut header = format!("H oralgrade=1 records=1 mode={}", mode);
    for (key, value) in fields {
        header.push_str(&format!(" {}={}", key, value));
    }
    header
}

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Grades are always shown with one decimal, e.g. `1.0` or `2.7`
pub fn format_grade(grade: f64) -> String {
    format!("{:.1}", grade)
}
