//! Column-aligned terminal output.

use std::{
    io::{self, Write},
    iter::repeat,
};

use crate::{config::Mode, suite::Report, util::fmt::DisplayDuration};

/// Results longer than this are cut off with an ellipsis.
const MAX_RESULT_WIDTH: usize = 40;

/// Columns of the table.
#[derive(Clone, Copy)]
enum Column {
    Name,
    Time,
    PerCall,
    Result,
}

impl Column {
    const COUNT: usize = 4;

    const ALL: [Self; Self::COUNT] = [Self::Name, Self::Time, Self::PerCall, Self::Result];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Time => "time",
            Self::PerCall => "per call",
            Self::Result => "result",
        }
    }

    fn get(self, report: &Report) -> String {
        match self {
            Self::Name => report.name.clone(),
            Self::Time => DisplayDuration(report.duration).to_string(),
            Self::PerCall => DisplayDuration(report.per_call()).to_string(),
            Self::Result => truncate(&report.result),
        }
    }
}

struct Row([String; Column::COUNT]);

impl Row {
    fn header() -> Self {
        Self(Column::ALL.map(|column| column.name().to_owned()))
    }

    fn new(report: &Report) -> Self {
        Self(Column::ALL.map(|column| column.get(report)))
    }

    /// Writes the row into the buffer.
    fn write(&self, buf: &mut String, column_widths: &[usize; Column::COUNT]) {
        for (column, value) in self.0.iter().enumerate() {
            let is_first = column == 0;
            let is_last = column == Column::COUNT - 1;

            if !is_first {
                buf.push_str(" │ ");
            }

            buf.push_str(value);

            // Right-pad all but the last column to prevent trailing spaces.
            if !is_last {
                let rem_width = column_widths[column].saturating_sub(value.chars().count());
                buf.extend(repeat(' ').take(rem_width));
            }
        }
    }
}

fn truncate(result: &str) -> String {
    if result.chars().count() <= MAX_RESULT_WIDTH {
        return result.to_owned();
    }

    let mut truncated: String = result.chars().take(MAX_RESULT_WIDTH - 1).collect();
    truncated.push('…');
    truncated
}

pub(crate) fn write_pretty(
    reports: &[Report],
    mode: Mode,
    out: &mut dyn Write,
) -> io::Result<()> {
    let header = Row::header();
    let rows: Vec<Row> = reports.iter().map(Row::new).collect();

    let mut column_widths = [0; Column::COUNT];
    for row in std::iter::once(&header).chain(&rows) {
        for (width, value) in column_widths.iter_mut().zip(&row.0) {
            *width = (*width).max(value.chars().count());
        }
    }

    writeln!(out, "{mode}")?;

    let mut buf = String::new();
    for row in std::iter::once(&header).chain(&rows) {
        buf.clear();
        row.write(&mut buf, &column_widths);
        writeln!(out, "{buf}")?;
    }

    Ok(())
}

pub(crate) fn write_terse(reports: &[Report], out: &mut dyn Write) -> io::Result<()> {
    for report in reports {
        writeln!(
            out,
            "{}: {} ({} per call) -> {}",
            report.name,
            DisplayDuration(report.duration),
            DisplayDuration(report.per_call()),
            truncate(&report.result),
        )?;
    }

    Ok(())
}
