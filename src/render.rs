//! Text and JSON rendering of the roster tables.

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use rota_duty::{active_slot, domestic_active, DutySnapshot};
use rota_roster::{DomesticRow, InternationalRow, ShiftCode};

use crate::cli::OutputFormat;
use crate::config::RotaConfig;

const MONTHS_SHORT: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const MONTH_COL: usize = 12;
const SHIFT_COL: usize = 4;

/// Resolves the output format: an explicit CLI flag wins over the config.
pub fn resolve_format(cli: Option<OutputFormat>, config: &RotaConfig) -> Result<OutputFormat> {
    if let Some(format) = cli {
        return Ok(format);
    }
    match config.output.format.as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format {other:?} in config (expected \"text\" or \"json\")"),
    }
}

/// Renders the international table: six month columns, the four shift
/// columns, then the remaining six month columns.
pub fn international_text(
    year: i32,
    rows: &[InternationalRow],
    snapshot: &DutySnapshot,
    highlight: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "International roster {year}");

    let mut header = String::new();
    for month in &MONTHS_SHORT[..6] {
        let _ = write!(header, "{month:<MONTH_COL$}");
    }
    for code in ShiftCode::ALL {
        let _ = write!(header, "{:<SHIFT_COL$}", code.letter());
    }
    for month in &MONTHS_SHORT[6..] {
        let _ = write!(header, "{month:<MONTH_COL$}");
    }
    let _ = writeln!(out, "{}", header.trim_end());

    for row in rows {
        let active = if highlight {
            active_slot(row, snapshot)
        } else {
            None
        };
        let mut line = String::new();
        for month in 1..=6 {
            let _ = write!(line, "{:<MONTH_COL$}", month_cell(row, month, snapshot, highlight));
        }
        for code in ShiftCode::ALL {
            let _ = write!(line, "{:<SHIFT_COL$}", shift_cell(row, code, active));
        }
        for month in 7..=12 {
            let _ = write!(line, "{:<MONTH_COL$}", month_cell(row, month, snapshot, highlight));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Renders the domestic grid: per month, a date column and the two shift
/// columns.
pub fn domestic_text(
    year: i32,
    rows: &[DomesticRow],
    snapshot: &DutySnapshot,
    highlight: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Domestic roster {year}");

    let mut header = String::new();
    let mut subheader = String::new();
    for month in MONTHS_SHORT {
        let _ = write!(header, "{month:<17}");
        let _ = write!(subheader, "{:<9}{:<4}{:<4}", "Date", 'M', 'E');
    }
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", subheader.trim_end());

    for row in rows {
        let mut line = String::new();
        for month in 1..=12 {
            match row.months.get(&month).and_then(Option::as_ref) {
                Some(cell) => {
                    let active = if highlight {
                        domestic_active(cell, snapshot)
                    } else {
                        None
                    };
                    let date_text = format!("{:02} {}", row.day, cell.weekday);
                    let date_text = if highlight && cell.date == snapshot.today {
                        format!("[{date_text}]")
                    } else {
                        date_text
                    };
                    let _ = write!(line, "{date_text:<9}");
                    let _ = write!(
                        line,
                        "{:<4}",
                        marked(cell.morning.label(), active == Some(ShiftCode::Morning))
                    );
                    let _ = write!(
                        line,
                        "{:<4}",
                        marked(cell.evening.label(), active == Some(ShiftCode::Evening))
                    );
                }
                None => {
                    let _ = write!(line, "{:<17}", "");
                }
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// JSON document wrapping a rendered roster.
#[derive(Serialize)]
struct RosterDocument<'a, R> {
    year: i32,
    duty: &'a DutySnapshot,
    rows: &'a [R],
}

/// Serializes a roster with its duty snapshot as pretty-printed JSON.
pub fn roster_json<R: Serialize>(
    year: i32,
    rows: &[R],
    snapshot: &DutySnapshot,
) -> Result<String> {
    serde_json::to_string_pretty(&RosterDocument {
        year,
        duty: snapshot,
        rows,
    })
    .context("failed to serialize roster to JSON")
}

fn month_cell(
    row: &InternationalRow,
    month: u32,
    snapshot: &DutySnapshot,
    highlight: bool,
) -> String {
    match row.months.get(&month) {
        Some(cell) if highlight && cell.date == snapshot.today => format!("[{}]", cell.label),
        Some(cell) => cell.label.clone(),
        None => String::new(),
    }
}

fn shift_cell(row: &InternationalRow, code: ShiftCode, active: Option<ShiftCode>) -> String {
    marked(row.team_on(code).label(), active == Some(code))
}

fn marked(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}
