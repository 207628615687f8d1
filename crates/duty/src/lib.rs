//! # rota-duty
//!
//! Wall-clock duty evaluation for the rota roster tables: which calendar
//! date is on duty right now, which shift band is running, and which table
//! cells should light up.
//!
//! All queries go through an injectable [`Clock`] so behavior around the
//! 06:00 rollover and the band boundaries is testable with a pinned time.

pub mod band;
pub mod clock;
pub mod duty;

pub use band::ShiftBand;
pub use clock::{Clock, FixedClock, SystemClock};
pub use duty::{active_duty_date, active_slot, domestic_active, today, DutySnapshot};
