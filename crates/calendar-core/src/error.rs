//! Error types for the layout core.
//!
//! Layout itself never fails (a render always degrades to something
//! drawable); these errors only surface from constructors and parsers so
//! callers can tell bad input apart from a legitimate value.

use thiserror::Error;

/// Errors produced while parsing dates or deriving relative day indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateError {
    /// The string is not shaped like `YYYY-MM-DD`.
    #[error("date is not in YYYY-MM-DD form")]
    Malformed,
    /// Well-formed digits that name no calendar day (e.g. `2025-02-30`).
    #[error("date does not exist in the Gregorian calendar")]
    InvalidDate,
    /// The date lies before the window start or past its last day.
    #[error("date lies outside the 14-day window (offset {offset})")]
    OutsideWindow {
        /// Signed 1-based offset that was computed.
        offset: i64,
    },
}

/// Errors produced while building a [`CalendarEvent`](crate::CalendarEvent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventError {
    /// A day number outside `1..=14`.
    #[error("day {0} is outside the 14-day window")]
    DayOutOfRange(i64),
    /// `start_day` is after `end_day`.
    #[error("event starts on day {start} but ends on day {end}")]
    InvertedRange {
        /// Start day as given.
        start: u8,
        /// End day as given.
        end: u8,
    },
    /// A time string that is neither `HH:MM`, `"-"` nor empty.
    #[error("time is not in HH:MM form")]
    MalformedTime,
}

impl From<DateError> for EventError {
    fn from(err: DateError) -> Self {
        match err {
            DateError::OutsideWindow { offset } => Self::DayOutOfRange(offset),
            DateError::Malformed | DateError::InvalidDate => Self::DayOutOfRange(0),
        }
    }
}
