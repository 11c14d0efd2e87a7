//! `oralgrade calculate` - score protocols and write points and grade
//!
//! Each file becomes the active document in turn. Failures are collected so
//! the remaining files are still graded; the first one decides the exit code.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::cli::{CalculateArgs, Cli};
use crate::commands::dispatch::trace_command;
use crate::commands::format::{escape_quotes, format_grade, print_json, records_header};
use crate::commands::host::FileHost;
use crate::output_by_format_result;
use oralgrade_core::command::{calculate_points_and_grade, Assessment, WriteMode};
use oralgrade_core::config::{GradingConfig, MetadataKeys};
use oralgrade_core::document::collect_documents;
use oralgrade_core::error::{OralgradeError, Result};

#[derive(Debug, Serialize)]
struct GradedDocument {
    path: String,
    #[serde(flatten)]
    assessment: Assessment,
}

#[derive(Debug, Serialize)]
struct FailedDocument {
    path: String,
    #[serde(rename = "type")]
    error_type: &'static str,
    message: String,
}

#[derive(Debug, Default, Serialize)]
struct CalculateReport {
    documents: Vec<GradedDocument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FailedDocument>,
}

/// Execute the calculate command
pub fn execute(
    cli: &Cli,
    config: &GradingConfig,
    args: &CalculateArgs,
    start: Instant,
) -> Result<()> {
    let mode = if args.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let paths = collect_documents(&args.paths, config)?;
    trace_command!(cli, start, "collect_documents");
    if paths.is_empty() {
        return Err(OralgradeError::NoActiveDocument {
            path: args.paths.first().cloned(),
        });
    }

    let mut report = CalculateReport::default();
    let mut first_error = None;

    for path in paths {
        match grade_file(&path, &config.metadata, mode, cli.quiet) {
            Ok(mut assessment) => {
                if !args.explain {
                    assessment.lines.clear();
                }
                report.documents.push(GradedDocument {
                    path: path.display().to_string(),
                    assessment,
                });
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "failed to grade document");
                report.errors.push(FailedDocument {
                    path: path.display().to_string(),
                    error_type: e.error_type(),
                    message: e.to_string(),
                });
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    trace_command!(cli, start, "grade_documents");

    output_by_format_result!(cli.format,
        json => print_json(&report),
        human => { print_human(&report, args); },
        records => { print_records(&report, args); }
    )?;

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn grade_file(
    path: &Path,
    keys: &MetadataKeys,
    mode: WriteMode,
    quiet: bool,
) -> Result<Assessment> {
    let mut host = FileHost::open(path, quiet)?;
    calculate_points_and_grade(&mut host, keys, mode).map_err(|e| match e {
        OralgradeError::NoActiveDocument { path: None } => OralgradeError::NoActiveDocument {
            path: Some(PathBuf::from(path)),
        },
        other => other,
    })
}

fn print_human(report: &CalculateReport, args: &CalculateArgs) {
    for doc in &report.documents {
        let assessment = &doc.assessment;
        let mut line = format!(
            "{}: {} ({:.1}%) grade {}",
            doc.path,
            assessment.score,
            assessment.percent * 100.0,
            format_grade(assessment.grade)
        );
        if !assessment.written {
            line.push_str(" (dry run)");
        }
        println!("{}", line);

        if args.explain {
            for score in &assessment.lines {
                println!(
                    "  line {}: +{} -{} = {:.2}",
                    score.line + 1,
                    score.plus,
                    score.minus,
                    score.contribution
                );
            }
        }
    }
}

fn print_records(report: &CalculateReport, args: &CalculateArgs) {
    println!(
        "{}",
        records_header(
            "calculate",
            &[
                ("documents", report.documents.len().to_string()),
                ("errors", report.errors.len().to_string()),
                ("dry_run", args.dry_run.to_string()),
            ],
        )
    );

    for doc in &report.documents {
        let assessment = &doc.assessment;
        let path = escape_quotes(&doc.path);
        println!(
            "D path=\"{}\" points={:.2} max_points={} percent={:.4} grade={} score=\"{}\" written={}",
            path,
            assessment.tally.points,
            assessment.tally.max_points,
            assessment.percent,
            format_grade(assessment.grade),
            assessment.score,
            assessment.written
        );
        for score in &assessment.lines {
            println!(
                "L path=\"{}\" line={} plus={} minus={} contribution={:.4}",
                path,
                score.line + 1,
                score.plus,
                score.minus,
                score.contribution
            );
        }
    }

    for failed in &report.errors {
        println!(
            "E path=\"{}\" type={} message=\"{}\"",
            escape_quotes(&failed.path),
            failed.error_type,
            escape_quotes(&failed.message)
        );
    }
}
