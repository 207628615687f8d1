//! Reference-epoch anchoring and signed day-offset arithmetic.
//!
//! Every rotation scheme in the workspace measures its cycle position as a
//! signed whole-day offset from a single fixed anchor date. Dates are
//! normalized to noon before differencing so the offsets stay whole days
//! regardless of how the surrounding clock behaves.

use chrono::{NaiveDate, NaiveDateTime};

/// Year of the fixed reference date.
pub const REFERENCE_YEAR: i32 = 2025;
/// Month of the fixed reference date.
pub const REFERENCE_MONTH: u32 = 12;
/// Day of the fixed reference date.
pub const REFERENCE_DAY: u32 = 31;

/// Returns the fixed reference epoch: 2025-12-31 at 12:00.
///
/// All cyclic offsets in the roster engine are measured from this instant.
pub fn reference_epoch() -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY)
        .expect("fixed reference date is a valid calendar date");
    noon(date)
}

/// Normalizes a calendar date to noon.
pub fn noon(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0)
        .expect("12:00:00 is valid on every calendar date")
}

/// Returns the signed whole-day offset of `date` from the reference epoch.
///
/// The offset is 0 on the reference date itself, positive after it and
/// negative before it. Both endpoints are noon-normalized, so the duration
/// between them is always an exact multiple of one day.
pub fn days_from_epoch(date: NaiveDate) -> i64 {
    noon(date)
        .signed_duration_since(reference_epoch())
        .num_days()
}
