//! Shift band derivation from the wall-clock hour.

use serde::Serialize;

use rota_roster::ShiftCode;

/// The shift band running at a given hour of day.
///
/// The three bands partition the 24-hour day: Morning covers 06:00-14:00,
/// Evening 14:00-22:00 and Night wraps from 22:00 past midnight to 06:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftBand {
    Morning,
    Evening,
    Night,
}

impl ShiftBand {
    /// Returns the band containing the given hour (0..24).
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            6..=13 => ShiftBand::Morning,
            14..=21 => ShiftBand::Evening,
            _ => ShiftBand::Night,
        }
    }

    /// The roster shift column this band lights up.
    pub fn shift_code(self) -> ShiftCode {
        match self {
            ShiftBand::Morning => ShiftCode::Morning,
            ShiftBand::Evening => ShiftCode::Evening,
            ShiftBand::Night => ShiftCode::Night,
        }
    }
}
