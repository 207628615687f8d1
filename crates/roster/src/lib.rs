//! # rota-roster
//!
//! Rotation table generators for the rota crew duty calendar.
//!
//! Two independent schemes share the reference-date anchoring from
//! [`rota_calendar`]:
//!
//! | Scheme | Shape | Cycle |
//! |--------|-------|-------|
//! | International | 32 rows, one month cell per row | 4 teams through an 8-state M/E/N/O cycle, one row per day |
//! | Domestic | 31 day-of-month rows × 12 months | teams A/B alternating mornings and evenings every 3 days of a 6-day cycle |
//!
//! Both generators are pure functions of `(year, reference epoch)`: they
//! rebuild their tables from scratch on every call, hold no shared state,
//! and return read-only row data for rendering.
//!
//! ```ignore
//! use rota_roster::{international_roster, domestic_roster};
//!
//! let rows = international_roster(2026)?;
//! assert_eq!(rows.len(), 32);
//! let grid = domestic_roster(2026)?;
//! assert_eq!(grid.len(), 31);
//! ```

pub mod domestic;
pub mod international;
pub mod team;

pub use domestic::{cycle_index, domestic_roster, DomesticCell, DomesticRow};
pub use international::{international_roster, row_index, DateCell, InternationalRow};
pub use team::{ShiftCode, Team};
