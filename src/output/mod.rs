//! Report formatting for [`Suite`](crate::Suite) runs.

use std::io::Write;

use crate::{
    config::{Mode, OutputFormat},
    suite::Report,
    Result,
};

mod json;
mod table;

/// Writes `reports` in the given format.
pub(crate) fn write(
    reports: &[Report],
    mode: Mode,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Pretty => table::write_pretty(reports, mode, out)?,
        OutputFormat::Terse => table::write_terse(reports, out)?,
        OutputFormat::Json => json::write(reports, mode, out)?,
    }
    Ok(())
}
