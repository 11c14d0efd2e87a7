//! Point tallying over the lines of an exam protocol
//!
//! Every unordered list item outside the frontmatter that carries at least one
//! `+` or `-` mark is worth one point. The item earns the share of its marks
//! that are `+`, so a line scores somewhere in `[0, 1]`.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::document::frontmatter::BOM;

/// Line that opens or closes a frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

const LIST_ITEM_PATTERN: &str = r"^[-*+] (.*)$";
const MARK_PATTERN: &str = r"[+-]";

static CLASSIFIER: OnceLock<LineClassifier> = OnceLock::new();

/// Classification of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    FrontmatterDelimiter,
    Blank,
    /// Unordered list item; carries the text after the marker and its space
    ListItem(&'a str),
    Other,
}

/// Accumulated points of one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreTally {
    /// Sum of all line contributions
    pub points: f64,
    /// Number of list items that carried at least one mark
    pub max_points: u32,
}

impl ScoreTally {
    /// Fraction of reachable points, or 0 when nothing was scored
    pub fn percent(&self) -> f64 {
        if self.max_points > 0 {
            self.points / f64::from(self.max_points)
        } else {
            0.0
        }
    }

    /// Score as written into the metadata header, e.g. `7.50/10`
    pub fn score_string(&self) -> String {
        format!("{:.2}/{}", self.points, self.max_points)
    }

    fn record(&mut self, contribution: f64) {
        self.max_points += 1;
        self.points += contribution;
    }
}

/// Breakdown of a single scored list item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineScore {
    /// Zero-based index into the scanned line sequence
    pub line: usize,
    pub plus: usize,
    pub minus: usize,
    /// `1 / (plus + minus)` summed once per `+`
    pub contribution: f64,
}

/// Compiled patterns for a scan
struct LineClassifier {
    list_item: Regex,
    mark: Regex,
}

impl LineClassifier {
    fn new() -> Self {
        Self {
            list_item: Regex::new(LIST_ITEM_PATTERN).expect("valid list item regex"),
            mark: Regex::new(MARK_PATTERN).expect("valid mark regex"),
        }
    }

    fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == BOM);
        if line.is_empty() {
            return LineKind::Blank;
        }
        if line == FRONTMATTER_DELIMITER {
            return LineKind::FrontmatterDelimiter;
        }
        match self.list_item.captures(line).and_then(|caps| caps.get(1)) {
            Some(content) => LineKind::ListItem(content.as_str()),
            None => LineKind::Other,
        }
    }

    /// Count `+` and `-` marks anywhere in the item content
    fn count_marks(&self, content: &str) -> (usize, usize) {
        self.mark
            .find_iter(content)
            .fold((0, 0), |(plus, minus), m| match m.as_str() {
                "+" => (plus + 1, minus),
                _ => (plus, minus + 1),
            })
    }
}

fn classifier() -> &'static LineClassifier {
    CLASSIFIER.get_or_init(LineClassifier::new)
}

/// Classify a single line after trimming surrounding whitespace and a
/// byte order mark
pub fn classify_line(line: &str) -> LineKind<'_> {
    classifier().classify(line)
}

/// Each `+` adds `1 / marks` in turn, so the float result matches a running
/// tally of the marks rather than a single division.
fn line_contribution(plus: usize, marks: usize) -> f64 {
    let step = 1.0 / marks as f64;
    (0..plus).fold(0.0, |acc, _| acc + step)
}

/// Score a sequence of document lines
pub fn score_lines<I, S>(lines: I) -> ScoreTally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    score_lines_detailed(lines).0
}

/// Score a sequence of document lines and keep the per-item breakdown
#[tracing::instrument(skip(lines))]
pub fn score_lines_detailed<I, S>(lines: I) -> (ScoreTally, Vec<LineScore>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = ScoreTally::default();
    let mut breakdown = Vec::new();
    let mut in_frontmatter = false;

    for (index, line) in lines.into_iter().enumerate() {
        let content = match classify_line(line.as_ref()) {
            LineKind::Blank | LineKind::Other => continue,
            // Delimiters never count, even when closing a block.
            LineKind::FrontmatterDelimiter => {
                in_frontmatter = !in_frontmatter;
                continue;
            }
            LineKind::ListItem(_) if in_frontmatter => continue,
            LineKind::ListItem(content) => content,
        };

        let (plus, minus) = classifier().count_marks(content);
        let marks = plus + minus;
        if marks == 0 {
            continue;
        }

        let contribution = line_contribution(plus, marks);
        tally.record(contribution);
        breakdown.push(LineScore {
            line: index,
            plus,
            minus,
            contribution,
        });
    }

    tracing::debug!(
        points = tally.points,
        max_points = tally.max_points,
        in_frontmatter,
        "scored_lines"
    );

    (tally, breakdown)
}
