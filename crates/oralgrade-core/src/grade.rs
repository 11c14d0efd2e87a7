//! Percent to grade mapping
//!
//! Follows the scale of the Rostock examination regulations (RPO 2023, p. 17):
//! passing requires 60% of the points, and each better grade requires a fixed
//! share of the points above that minimum.

use serde::Serialize;

use crate::error::{OralgradeError, Result};

/// Share of points required to pass
pub const MIN_PERCENT: f64 = 0.6;

/// Share of points available above the passing minimum
pub const ABOVE_MIN: f64 = 1.0 - MIN_PERCENT;

/// Grade given when no entry of [`GRADE_TABLE`] is reached
pub const FAILING_GRADE: f64 = 5.0;

/// One rung of the grading ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeEntry {
    pub grade: f64,
    /// Fraction of the points above [`MIN_PERCENT`] needed for this grade
    pub required_above_min: f64,
}

impl GradeEntry {
    const fn new(grade: f64, required_above_min: f64) -> Self {
        Self {
            grade,
            required_above_min,
        }
    }

    /// Absolute percent at which this grade is reached (inclusive)
    pub fn threshold(&self) -> f64 {
        MIN_PERCENT + self.required_above_min * ABOVE_MIN
    }
}

/// Grading ladder, best grade first
pub const GRADE_TABLE: [GradeEntry; 10] = [
    GradeEntry::new(1.0, 0.85),
    GradeEntry::new(1.3, 0.75),
    GradeEntry::new(1.7, 0.67),
    GradeEntry::new(2.0, 0.59),
    GradeEntry::new(2.3, 0.50),
    GradeEntry::new(2.7, 0.42),
    GradeEntry::new(3.0, 0.34),
    GradeEntry::new(3.3, 0.25),
    GradeEntry::new(3.7, 0.12),
    GradeEntry::new(4.0, 0.00),
];

/// Map a fraction of achieved points onto the grade scale.
///
/// The input is not clamped: anything at or above the 1.0 threshold is a 1.0,
/// anything below [`MIN_PERCENT`] (including NaN) fails.
pub fn percent_to_grade(percent: f64) -> f64 {
    GRADE_TABLE
        .iter()
        .find(|entry| percent >= entry.threshold())
        .map_or(FAILING_GRADE, |entry| entry.grade)
}

/// Every grade the mapper can produce, best first
pub fn grade_scale() -> Vec<f64> {
    GRADE_TABLE
        .iter()
        .map(|entry| entry.grade)
        .chain(std::iter::once(FAILING_GRADE))
        .collect()
}

/// Parse a percent given as a fraction (`0.75`) or a percentage (`75%`)
pub fn parse_percent(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let invalid = || OralgradeError::InvalidPercent {
        value: input.to_string(),
    };

    let percent = match trimmed.strip_suffix('%') {
        Some(number) => number.trim().parse::<f64>().map_err(|_| invalid())? / 100.0,
        None => trimmed.parse::<f64>().map_err(|_| invalid())?,
    };

    if !percent.is_finite() {
        return Err(invalid());
    }
    Ok(percent)
}
