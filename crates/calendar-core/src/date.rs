//! Date arithmetic for the 14-day display window.
//!
//! The window is anchored on its first day (`week_start`). Every event and
//! "today" are placed by their 1-based offset from that anchor, so
//! `day_index(week_start, week_start) == 1`.
//!
//! Day counts use `chrono::NaiveDate` (proleptic Gregorian): real month
//! lengths, leap years and year rollover all come for free.

use core::fmt;

use chrono::{Datelike, Days, NaiveDate};

pub use chrono::Weekday;

use crate::error::DateError;

/// Number of days addressable by the grid.
pub const WINDOW_DAYS: u8 = 14;

/// Columns per grid row.
pub const DAYS_PER_WEEK: u8 = 7;

/// Grid rows (weeks) in the window.
pub const WEEKS: u8 = 2;

/// 1-based position of a day inside the 14-day window.
///
/// Only values in `1..=14` can be constructed, so a `DayIndex` is always a
/// valid grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DayIndex(u8);

impl DayIndex {
    /// The window's first day.
    pub const FIRST: Self = Self(1);
    /// The window's last day.
    pub const LAST: Self = Self(WINDOW_DAYS);

    /// Create from a 1-based day number.
    pub fn new(day: u8) -> Result<Self, DateError> {
        if (1..=WINDOW_DAYS).contains(&day) {
            Ok(Self(day))
        } else {
            Err(DateError::OutsideWindow {
                offset: i64::from(day),
            })
        }
    }

    /// Create from a `(week, column)` grid cell, both zero-based.
    pub fn from_cell(week: u8, column: u8) -> Option<Self> {
        if week >= WEEKS || column >= DAYS_PER_WEEK {
            return None;
        }
        // week < 2 and column < 7, so the result is at most 14.
        #[allow(clippy::arithmetic_side_effects)]
        let day = week * DAYS_PER_WEEK + column + 1;
        Some(Self(day))
    }

    /// The raw 1-based day number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based week (grid row) this day falls in.
    pub const fn week(self) -> u8 {
        self.0.saturating_sub(1) / DAYS_PER_WEEK
    }

    /// Zero-based column (weekday position) inside its week.
    pub const fn column(self) -> u8 {
        self.0.saturating_sub(1) % DAYS_PER_WEEK
    }

    /// Bit for this day in a 14-bit day mask (bit 0 = day 1).
    pub const fn bit(self) -> u16 {
        1u16 << self.0.saturating_sub(1)
    }

    /// Iterate over every day of the window in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=WINDOW_DAYS).map(Self)
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar date parsed from `YYYY-MM-DD` (any `T…` time suffix ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS][±TZ]`,
    /// `YYYY-MM-DD HH:MM` or similar.
    ///
    /// Only the date part is inspected; everything from the first `T` or
    /// space on is dropped before validation.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let text = text.trim();
        let date = text.split(['T', ' ']).next().unwrap_or(text);
        let mut parts = date.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::Malformed);
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(DateError::Malformed);
        }
        let year: i32 = parse_digits(year)?;
        let month: u32 = parse_digits(month)?;
        let day: u32 = parse_digits(day)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate)
    }

    /// Build from numeric parts.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate)
    }

    /// Day of the month (`1..=31`).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(self, other: Self) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// This date moved forward by `days`, or `None` past the representable range.
    pub fn plus_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

fn parse_digits<T: core::str::FromStr>(text: &str) -> Result<T, DateError> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Malformed);
    }
    text.parse().map_err(|_| DateError::Malformed)
}

/// Signed 0-based day difference between `date` and `week_start`.
///
/// `day_offset(d, d) == 0`; dates before the anchor yield negative values.
pub fn day_offset(date: &str, week_start: &str) -> Result<i64, DateError> {
    let date = CalendarDate::parse(date)?;
    let anchor = CalendarDate::parse(week_start)?;
    Ok(date.days_since(anchor))
}

/// 1-based index of `date` inside the window anchored at `week_start`.
///
/// Returns [`DateError::OutsideWindow`] when `date` is before the anchor or
/// more than 13 days after it.
pub fn day_index(date: &str, week_start: &str) -> Result<DayIndex, DateError> {
    let offset = day_offset(date, week_start)?.saturating_add(1);
    u8::try_from(offset)
        .ok()
        .and_then(|day| DayIndex::new(day).ok())
        .ok_or(DateError::OutsideWindow { offset })
}

/// Like [`day_index`], but clamps any failure to day 1.
///
/// Used where the grid must still render (the "today" highlight). The
/// fallback is logged so bad anchors are visible in traces.
pub fn day_index_or_first(date: &str, week_start: &str) -> DayIndex {
    match day_index(date, week_start) {
        Ok(index) => index,
        Err(err) => {
            tracing::warn!(%err, date, week_start, "day index fell back to day 1");
            DayIndex::FIRST
        }
    }
}

/// Calendar date shown in the cell for `index`.
pub fn date_at(week_start: CalendarDate, index: DayIndex) -> Option<CalendarDate> {
    week_start.plus_days(u64::from(index.get().saturating_sub(1)))
}

/// Fixed upper-case header label for a weekday.
pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}
