//! `oralgrade grade` - map a share of points onto the grade scale

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{format_grade, print_json, records_header};
use crate::output_by_format_result;
use oralgrade_core::error::Result;
use oralgrade_core::grade::{parse_percent, percent_to_grade};

/// Execute the grade command
pub fn execute(cli: &Cli, percent: &str) -> Result<()> {
    let percent = parse_percent(percent)?;
    let grade = percent_to_grade(percent);
    tracing::debug!(percent, grade, "mapped percent");

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "percent": percent, "grade": grade })),
        human => { println!("{}", format_grade(grade)); },
        records => {
            println!("{}", records_header("grade", &[]));
            println!("G percent={:.4} grade={}", percent, format_grade(grade));
        }
    )
}
