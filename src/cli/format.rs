//! Format output dispatch helpers

/// Dispatch output by format.
/// The json branch returns a `Result`; human and records print and succeed.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&report),
///     human => { println!("{}", grade); },
///     records => { println!("H oralgrade=1 records=1 mode=grade"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            oralgrade_core::format::OutputFormat::Json => $json,
            oralgrade_core::format::OutputFormat::Human => {
                $human;
                Ok(())
            }
            oralgrade_core::format::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
