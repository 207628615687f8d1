//! Domestic rotation: teams A and B alternating on a 6-day cycle,
//! rendered as a 31-row day-of-month grid.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use rota_calendar::{days_from_epoch, iso_date, weekday_short, CalendarError};

use crate::team::Team;

/// Number of day-of-month rows in the domestic grid.
const ROW_COUNT: u32 = 31;

/// Length of the alternation cycle in days.
const CYCLE_DAYS: i64 = 6;

/// A resolved date cell in the domestic grid.
#[derive(Debug, Clone, Serialize)]
pub struct DomesticCell {
    /// The resolved calendar date.
    #[serde(skip)]
    pub date: NaiveDate,
    /// Three-letter weekday name.
    pub weekday: String,
    /// Canonical ISO date string, `YYYY-MM-DD`.
    pub iso: String,
    /// Team on the morning shift.
    pub morning: Team,
    /// Team on the evening shift.
    pub evening: Team,
}

impl DomesticCell {
    fn new(date: NaiveDate) -> Self {
        let (morning, evening) = shift_pair(date);
        Self {
            date,
            weekday: weekday_short(date),
            iso: iso_date(date),
            morning,
            evening,
        }
    }
}

/// One day-of-month row of the domestic grid.
#[derive(Debug, Clone, Serialize)]
pub struct DomesticRow {
    /// Day of month, 1..=31.
    pub day: u32,
    /// Cell per month number; `None` where this day does not exist in the
    /// month (e.g. April 31, or February 29 outside leap years).
    pub months: BTreeMap<u32, Option<DomesticCell>>,
}

/// Position of a date in the 6-day alternation cycle, 0..=5.
///
/// A total function of the date's signed day offset from the reference
/// epoch, independent of which row or month displays the date.
pub fn cycle_index(date: NaiveDate) -> u8 {
    (days_from_epoch(date) - 1).rem_euclid(CYCLE_DAYS) as u8
}

/// Returns the `(morning, evening)` team pair for a date.
///
/// The first three cycle positions put team A on mornings; the last three
/// swap the pair.
fn shift_pair(date: NaiveDate) -> (Team, Team) {
    if cycle_index(date) < 3 {
        (Team::A, Team::B)
    } else {
        (Team::B, Team::A)
    }
}

/// Builds the 31-row domestic roster grid for a calendar year.
///
/// Each cell's shift pair is computed independently from its own date; rows
/// share no cycle state across months. Day-of-month values that do not
/// exist in a month yield `None` cells.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` cannot be represented
/// as a calendar date.
pub fn domestic_roster(year: i32) -> Result<Vec<DomesticRow>, CalendarError> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(CalendarError::YearOutOfRange { year });
    }
    let mut rows = Vec::with_capacity(ROW_COUNT as usize);
    for day in 1..=ROW_COUNT {
        let mut months = BTreeMap::new();
        for month in 1..=12 {
            let cell = NaiveDate::from_ymd_opt(year, month, day).map(DomesticCell::new);
            months.insert(month, cell);
        }
        rows.push(DomesticRow { day, months });
    }
    debug!(year, "built domestic roster grid");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cycle_starts_day_after_epoch() {
        assert_eq!(cycle_index(date(2026, 1, 1)), 0);
        assert_eq!(cycle_index(date(2026, 1, 3)), 2);
        assert_eq!(cycle_index(date(2026, 1, 4)), 3);
        assert_eq!(cycle_index(date(2026, 1, 6)), 5);
        assert_eq!(cycle_index(date(2026, 1, 7)), 0);
    }

    #[test]
    fn cycle_index_before_epoch() {
        // The epoch itself sits at the end of a cycle.
        assert_eq!(cycle_index(date(2025, 12, 31)), 5);
        assert_eq!(cycle_index(date(2025, 12, 26)), 0);
    }

    #[test]
    fn cycle_period_is_six_days() {
        let mut d = date(2025, 11, 1);
        for _ in 0..90 {
            let shifted = d + chrono::Days::new(6);
            assert_eq!(cycle_index(d), cycle_index(shifted), "period broken at {d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn first_half_cycle_puts_a_on_mornings() {
        assert_eq!(shift_pair(date(2026, 1, 1)), (Team::A, Team::B));
        assert_eq!(shift_pair(date(2026, 1, 3)), (Team::A, Team::B));
        assert_eq!(shift_pair(date(2026, 1, 4)), (Team::B, Team::A));
        assert_eq!(shift_pair(date(2026, 1, 6)), (Team::B, Team::A));
    }

    #[test]
    fn grid_has_31_rows_of_12_months() {
        let rows = domestic_roster(2026).unwrap();
        assert_eq!(rows.len(), 31);
        for row in &rows {
            assert_eq!(row.months.len(), 12);
        }
    }

    #[test]
    fn nonexistent_dates_are_none() {
        let rows = domestic_roster(2026).unwrap();
        // Day 31 exists in seven months only.
        let day31 = &rows[30];
        assert!(day31.months[&4].is_none());
        assert!(day31.months[&6].is_none());
        assert!(day31.months[&1].is_some());
        // Feb 29/30 in a common year.
        assert!(rows[28].months[&2].is_none());
        assert!(rows[29].months[&2].is_none());
    }

    #[test]
    fn leap_day_present_in_leap_years() {
        let rows = domestic_roster(2024).unwrap();
        let cell = rows[28].months[&2].as_ref().unwrap();
        assert_eq!(cell.date, date(2024, 2, 29));
    }

    #[test]
    fn cell_fields_resolved_from_date() {
        let rows = domestic_roster(2026).unwrap();
        let cell = rows[0].months[&1].as_ref().unwrap();
        assert_eq!(cell.date, date(2026, 1, 1));
        assert_eq!(cell.weekday, "Thu");
        assert_eq!(cell.iso, "2026-01-01");
        assert_eq!(cell.morning, Team::A);
        assert_eq!(cell.evening, Team::B);
    }

    #[test]
    fn morning_and_evening_always_differ() {
        let rows = domestic_roster(2024).unwrap();
        for row in &rows {
            for cell in row.months.values().flatten() {
                assert_ne!(cell.morning, cell.evening, "day {} {}", row.day, cell.iso);
            }
        }
    }

    #[test]
    fn year_out_of_range() {
        assert!(domestic_roster(i32::MIN).is_err());
    }
}
