//! Display formatting for roster cells.

use chrono::NaiveDate;

/// Formats a date as the compact roster cell label `DD Ddd-YY`.
///
/// Example: 2026-01-05 formats as `05 Mon-26`.
pub fn cell_label(date: NaiveDate) -> String {
    date.format("%d %a-%y").to_string()
}

/// Formats a date as its canonical ISO string `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the three-letter English weekday name (`Mon`, `Tue`, ...).
pub fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
