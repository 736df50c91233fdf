//! Json output.

use std::{io::Write, time::Duration};

use serde_json::{json, Value as JsonValue};

use crate::{config::Mode, suite::Report, Result};

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

fn mode_json(mode: Mode) -> JsonValue {
    match mode {
        Mode::Total { reps } | Mode::BestOf { reps } => json!({
            "name": mode.name(),
            "reps": reps.get(),
        }),
        Mode::BestOfTotal { outer, inner } => json!({
            "name": mode.name(),
            "outer": outer.get(),
            "inner": inner.get(),
        }),
    }
}

fn report_json(report: &Report) -> JsonValue {
    json!({
        "name": report.name,
        "time_ns": nanos(report.duration),
        "per_call_ns": nanos(report.per_call()),
        "result": report.result,
    })
}

pub(crate) fn write(reports: &[Report], mode: Mode, out: &mut dyn Write) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&json!({
        "mode": mode_json(mode),
        "reports": reports.iter().map(report_json).collect::<Vec<_>>(),
    }))?;
    writeln!(out, "{pretty}")?;
    Ok(())
}
