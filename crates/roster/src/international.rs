//! International rotation: four teams over a repeating 8-state cycle,
//! rendered as a 32-row table.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use rota_calendar::{cell_label, days_from_epoch, iso_date, year_dates, CalendarError};

use crate::team::{ShiftCode, Team};

/// Number of rows in the international rotation table.
const ROW_COUNT: usize = 32;

/// Number of states in the repeating shift cycle.
const CYCLE_STATES: u32 = 8;

/// Row that the reference date itself falls on.
const REFERENCE_ROW: i64 = 6;

/// A dated cell in the international table.
#[derive(Debug, Clone, Serialize)]
pub struct DateCell {
    /// The resolved calendar date.
    #[serde(skip)]
    pub date: NaiveDate,
    /// Compact display label, `DD Ddd-YY`.
    pub label: String,
    /// Canonical ISO date string, `YYYY-MM-DD`.
    pub iso: String,
    /// Day of month.
    pub day: u32,
}

impl DateCell {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            label: cell_label(date),
            iso: iso_date(date),
            day: date.day(),
        }
    }
}

/// One row of the 32-row international rotation table.
///
/// Shift slot assignment is a pure function of the row index and never
/// depends on the requested year; the year only determines which dates
/// land on the row.
#[derive(Debug, Clone, Serialize)]
pub struct InternationalRow {
    /// Row position, 0..=31.
    pub index: usize,
    /// Team on the morning shift.
    pub morning: Team,
    /// Team on the evening shift.
    pub evening: Team,
    /// Team on the night shift.
    pub night: Team,
    /// Team on its off day.
    pub off: Team,
    /// First date of each month landing on this row, keyed by month number.
    pub months: BTreeMap<u32, DateCell>,
}

impl InternationalRow {
    fn new(index: usize) -> Self {
        let cycle_state = (index as u32) % CYCLE_STATES;
        // Offsets are spaced two states apart while slots pair up
        // consecutive states, so each slot is written exactly once.
        let mut slots = [Team::A; 4];
        for team in Team::ALL {
            let state = (team.cycle_offset() + cycle_state) % CYCLE_STATES;
            slots[(state / 2) as usize] = team;
        }
        Self {
            index,
            morning: slots[0],
            evening: slots[1],
            night: slots[2],
            off: slots[3],
            months: BTreeMap::new(),
        }
    }

    /// Returns the team assigned to the given shift slot.
    pub fn team_on(&self, code: ShiftCode) -> Team {
        match code {
            ShiftCode::Morning => self.morning,
            ShiftCode::Evening => self.evening,
            ShiftCode::Night => self.night,
            ShiftCode::Off => self.off,
        }
    }

    /// Returns whether one of this row's cells holds the given date.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.months.values().any(|cell| cell.date == date)
    }
}

/// Returns the table row a date falls on.
///
/// The mapping is a total function of the date's signed day offset from the
/// reference epoch: the reference date sits on row 6 and each following day
/// advances one row, wrapping after 32.
pub fn row_index(date: NaiveDate) -> usize {
    (REFERENCE_ROW + days_from_epoch(date)).rem_euclid(ROW_COUNT as i64) as usize
}

/// Builds the 32-row international roster for a calendar year.
///
/// Every date of the year is assigned to its row; within a row, the first
/// date of each month wins the month cell and later dates of the same month
/// are dropped. The tables are rebuilt from scratch on every call and never
/// mutated afterwards.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` cannot be represented
/// as a calendar date.
pub fn international_roster(year: i32) -> Result<Vec<InternationalRow>, CalendarError> {
    let mut rows: Vec<InternationalRow> = (0..ROW_COUNT).map(InternationalRow::new).collect();
    let dates = year_dates(year)?;
    for date in &dates {
        let row = &mut rows[row_index(*date)];
        row.months
            .entry(date.month())
            .or_insert_with(|| DateCell::new(*date));
    }
    debug!(year, n_dates = dates.len(), "built international roster");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn row_zero_slots() {
        let row = InternationalRow::new(0);
        assert_eq!(row.morning, Team::A);
        assert_eq!(row.evening, Team::B);
        assert_eq!(row.night, Team::C);
        assert_eq!(row.off, Team::D);
    }

    #[test]
    fn row_two_slots_rotate() {
        let row = InternationalRow::new(2);
        assert_eq!(row.morning, Team::D);
        assert_eq!(row.evening, Team::A);
        assert_eq!(row.night, Team::B);
        assert_eq!(row.off, Team::C);
    }

    #[test]
    fn consecutive_state_pairs_share_slots() {
        // States pair up: rows 2r and 2r+1 carry the same assignment.
        for r in 0..16 {
            let even = InternationalRow::new(2 * r);
            let odd = InternationalRow::new(2 * r + 1);
            for code in ShiftCode::ALL {
                assert_eq!(even.team_on(code), odd.team_on(code), "row pair {r}");
            }
        }
    }

    #[test]
    fn slots_repeat_every_eight_rows() {
        for index in 0..24 {
            let a = InternationalRow::new(index);
            let b = InternationalRow::new(index + 8);
            for code in ShiftCode::ALL {
                assert_eq!(a.team_on(code), b.team_on(code), "row {index}");
            }
        }
    }

    #[test]
    fn reference_date_lands_on_row_six() {
        assert_eq!(row_index(date(2025, 12, 31)), 6);
    }

    #[test]
    fn row_index_advances_daily() {
        assert_eq!(row_index(date(2026, 1, 1)), 7);
        assert_eq!(row_index(date(2026, 1, 2)), 8);
        // Wraps after row 31.
        assert_eq!(row_index(date(2026, 1, 26)), 0);
    }

    #[test]
    fn row_index_before_epoch() {
        assert_eq!(row_index(date(2025, 12, 30)), 5);
        // Six days before the epoch wraps below zero.
        assert_eq!(row_index(date(2025, 12, 24)), 31);
    }

    #[test]
    fn row_index_period_is_32_days() {
        let mut d = date(2024, 1, 1);
        for _ in 0..40 {
            let shifted = d + chrono::Days::new(32);
            assert_eq!(row_index(d), row_index(shifted), "period broken at {d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn month_cell_keeps_first_date() {
        let rows = international_roster(2026).unwrap();
        // Row 7 receives Jan 1 and, 32 days later, Feb 2.
        let row = &rows[7];
        assert_eq!(row.months[&1].date, date(2026, 1, 1));
        assert_eq!(row.months[&2].date, date(2026, 2, 2));
    }

    #[test]
    fn cell_carries_display_strings() {
        let rows = international_roster(2026).unwrap();
        let cell = &rows[7].months[&1];
        assert_eq!(cell.label, "01 Thu-26");
        assert_eq!(cell.iso, "2026-01-01");
        assert_eq!(cell.day, 1);
    }

    #[test]
    fn slot_assignment_is_year_independent() {
        let a = international_roster(1999).unwrap();
        let b = international_roster(2026).unwrap();
        for (ra, rb) in a.iter().zip(&b) {
            for code in ShiftCode::ALL {
                assert_eq!(ra.team_on(code), rb.team_on(code), "row {}", ra.index);
            }
        }
    }

    #[test]
    fn year_out_of_range() {
        assert!(international_roster(i32::MAX).is_err());
    }
}
