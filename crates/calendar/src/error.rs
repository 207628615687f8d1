//! Error types for the rota-calendar crate.

/// Error type for all fallible operations in the rota-calendar crate.
///
/// The roster engine is total over every year that the underlying calendar
/// type can represent; the only failure is asking for a year outside that
/// range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year cannot be represented as a calendar date.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The unrepresentable year that was requested.
        year: i32,
    },
}
