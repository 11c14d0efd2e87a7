//! `oralgrade scale` - print the grading ladder

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::format::{format_grade, print_json, records_header};
use crate::output_by_format_result;
use oralgrade_core::error::Result;
use oralgrade_core::grade::{grade_scale, GradeEntry, FAILING_GRADE, GRADE_TABLE, MIN_PERCENT};

#[derive(Debug, Serialize)]
struct ScaleEntry {
    grade: f64,
    required_above_min: f64,
    threshold: f64,
}

impl From<&GradeEntry> for ScaleEntry {
    fn from(entry: &GradeEntry) -> Self {
        Self {
            grade: entry.grade,
            required_above_min: entry.required_above_min,
            threshold: entry.threshold(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Scale {
    min_percent: f64,
    failing_grade: f64,
    /// Every grade that can be suggested, best first
    grades: Vec<f64>,
    entries: Vec<ScaleEntry>,
}

/// Execute the scale command
pub fn execute(cli: &Cli) -> Result<()> {
    let scale = Scale {
        min_percent: MIN_PERCENT,
        failing_grade: FAILING_GRADE,
        grades: grade_scale(),
        entries: GRADE_TABLE.iter().map(ScaleEntry::from).collect(),
    };

    output_by_format_result!(cli.format,
        json => print_json(&scale),
        human => { print_human(&scale); },
        records => { print_records(&scale); }
    )
}

fn print_human(scale: &Scale) {
    println!("{:<6} {:>10} {:>10}", "Grade", "Above min", "From");
    for entry in &scale.entries {
        println!(
            "{:<6} {:>9.0}% {:>9.1}%",
            format_grade(entry.grade),
            entry.required_above_min * 100.0,
            entry.threshold * 100.0
        );
    }
    println!(
        "{:<6} {:>10} {:>10}",
        format_grade(scale.failing_grade),
        "-",
        format!("<{:.1}%", scale.min_percent * 100.0)
    );
}

fn print_records(scale: &Scale) {
    println!(
        "{}",
        records_header(
            "scale",
            &[
                ("entries", scale.entries.len().to_string()),
                ("grades", scale.grades.len().to_string()),
            ],
        )
    );
    for entry in &scale.entries {
        println!(
            "S grade={} above_min={:.2} threshold={:.4}",
            format_grade(entry.grade),
            entry.required_above_min,
            entry.threshold
        );
    }
    println!(
        "F grade={} below={:.4}",
        format_grade(scale.failing_grade),
        scale.min_percent
    );
}
