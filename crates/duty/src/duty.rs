//! Duty-date rollover and live-cell queries.

use chrono::{NaiveDate, Timelike};
use serde::Serialize;

use rota_roster::{DomesticCell, InternationalRow, ShiftCode};

use crate::band::ShiftBand;
use crate::clock::{Clock, FixedClock};

/// Hour at which a duty day hands over to the next calendar date.
const ROLLOVER_HOUR: u32 = 6;

/// Returns the current local calendar date.
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.now().date()
}

/// Returns the date whose duty is running now.
///
/// A duty day extends past midnight: until 06:00 the previous calendar
/// date is still on duty.
pub fn active_duty_date(clock: &impl Clock) -> NaiveDate {
    let now = clock.now();
    if now.hour() < ROLLOVER_HOUR {
        now.date()
            .pred_opt()
            .expect("wall-clock dates have a previous day")
    } else {
        now.date()
    }
}

/// One consistent reading of the wall clock for duty evaluation.
///
/// The clock is read once and every derived value comes from that reading,
/// so a snapshot taken near a band boundary cannot disagree with itself.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DutySnapshot {
    /// Current calendar date.
    pub today: NaiveDate,
    /// Date currently on duty (lags `today` until 06:00).
    pub duty_date: NaiveDate,
    /// Shift band running now.
    pub band: ShiftBand,
}

impl DutySnapshot {
    /// Captures the clock and derives dates and band from that one reading.
    pub fn capture(clock: &impl Clock) -> Self {
        let now = clock.now();
        let pinned = FixedClock::new(now);
        Self {
            today: today(&pinned),
            duty_date: active_duty_date(&pinned),
            band: ShiftBand::for_hour(now.hour()),
        }
    }
}

/// Returns the shift column to light up on an international row, if any.
///
/// A row is on duty only while one of its cells holds the active duty
/// date; the band then selects the M, E or N column. The Off column never
/// lights up.
pub fn active_slot(row: &InternationalRow, snapshot: &DutySnapshot) -> Option<ShiftCode> {
    if !row.contains_date(snapshot.duty_date) {
        return None;
    }
    Some(snapshot.band.shift_code())
}

/// Returns the shift column to light up on a domestic cell, if any.
///
/// Domestic duty is same-day: the cell must hold today's date (no overnight
/// rollover) and the night band lights nothing.
pub fn domestic_active(cell: &DomesticCell, snapshot: &DutySnapshot) -> Option<ShiftCode> {
    if cell.date != snapshot.today {
        return None;
    }
    match snapshot.band {
        ShiftBand::Morning => Some(ShiftCode::Morning),
        ShiftBand::Evening => Some(ShiftCode::Evening),
        ShiftBand::Night => None,
    }
}
