//! The `calculate-points-and-grade` command
//!
//! Binds the scorer and grade mapper to whatever host supplies the active
//! document. The metadata write is a single read-modify-write through the
//! host; concurrent edits of the same document are not guarded against.

use std::time::Instant;

use serde::Serialize;

use crate::config::MetadataKeys;
use crate::document::{Host, LineSource, MetadataStore};
use crate::error::{OralgradeError, Result};
use crate::grade::percent_to_grade;
use crate::score::{score_lines_detailed, LineScore, ScoreTally};
use crate::trace_time;

/// Identifier under which the command is registered
pub const COMMAND_ID: &str = "calculate-points-and-grade";

/// Display name of the command
pub const COMMAND_NAME: &str = "Calculate points and a grade";

/// Notice shown when there is nothing to grade
pub const NO_ACTIVE_DOCUMENT_MESSAGE: &str = "Please open an oral exam protocol.";

/// Whether the computed values are written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    DryRun,
}

/// Outcome of grading one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub tally: ScoreTally,
    pub percent: f64,
    pub grade: f64,
    /// Value written under the score key
    pub score: String,
    pub written: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineScore>,
}

/// Score the host's active document and store points and grade in its header.
///
/// Without an active document the host shows [`NO_ACTIVE_DOCUMENT_MESSAGE`]
/// and nothing is read or written.
pub fn calculate_points_and_grade<H: Host>(
    host: &mut H,
    keys: &MetadataKeys,
    mode: WriteMode,
) -> Result<Assessment> {
    let start = Instant::now();

    let document = match host.active_document() {
        Some(document) => document,
        None => {
            host.show_transient_message(NO_ACTIVE_DOCUMENT_MESSAGE);
            return Err(OralgradeError::NoActiveDocument { path: None });
        }
    };

    let (tally, lines) = score_lines_detailed(document.lines());
    trace_time!(start, "score_document", lines = document.line_count());

    let percent = tally.percent();
    let grade = percent_to_grade(percent);
    let score = tally.score_string();

    let written = match mode {
        WriteMode::Write => {
            document.update_metadata(|metadata| {
                metadata.insert(keys.score_key.as_str().into(), score.as_str().into());
                metadata.insert(keys.grade_key.as_str().into(), grade.into());
            })?;
            true
        }
        WriteMode::DryRun => false,
    };

    tracing::debug!(
        points = tally.points,
        max_points = tally.max_points,
        percent,
        grade,
        written,
        "graded document"
    );
    trace_time!(start, "calculate_points_and_grade");

    Ok(Assessment {
        tally,
        percent,
        grade,
        score,
        written,
        lines,
    })
}
