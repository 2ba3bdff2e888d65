//! Calendar events as seen by the layout core.

use alloc::string::String;
use core::fmt;

use crate::date::DayIndex;
use crate::error::EventError;

/// Wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create from hour (`0..=23`) and minute (`0..=59`).
    pub fn new(hour: u8, minute: u8) -> Result<Self, EventError> {
        if hour < 24 && minute < 60 {
            Ok(Self { hour, minute })
        } else {
            Err(EventError::MalformedTime)
        }
    }

    /// Parse `HH:MM` or `HH:MM:SS` (seconds are ignored).
    pub fn parse(text: &str) -> Result<Self, EventError> {
        let bytes = text.as_bytes();
        let shaped = matches!(bytes.len(), 5 | 8)
            && bytes.get(2) == Some(&b':')
            && (bytes.len() == 5 || bytes.get(5) == Some(&b':'));
        if !shaped {
            return Err(EventError::MalformedTime);
        }
        let hour = two_digits(bytes.get(0..2))?;
        let minute = two_digits(bytes.get(3..5))?;
        if bytes.len() == 8 {
            // Seconds must still be digits even though they are dropped.
            two_digits(bytes.get(6..8))?;
        }
        Self::new(hour, minute)
    }

    /// Hour of day.
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of hour.
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

fn two_digits(pair: Option<&[u8]>) -> Result<u8, EventError> {
    match pair {
        Some(&[tens @ b'0'..=b'9', ones @ b'0'..=b'9']) => {
            // Both digits are 0..=9, so the value is at most 99.
            #[allow(clippy::arithmetic_side_effects)]
            let value = (tens - b'0') * 10 + (ones - b'0');
            Ok(value)
        }
        _ => Err(EventError::MalformedTime),
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One event inside the 14-day window.
///
/// Immutable input to a render pass. `start_time == None` marks an all-day
/// event; multi-day events are simply those whose start and end days differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Display title (entities already decoded upstream).
    pub title: String,
    /// Source calendar name. Carried through, not used by layout.
    pub calendar: String,
    start_day: DayIndex,
    end_day: DayIndex,
    /// Start time, `None` for all-day events.
    pub start_time: Option<ClockTime>,
    /// End time, `None` for all-day events.
    pub end_time: Option<ClockTime>,
}

impl CalendarEvent {
    /// Create an all-day event spanning `start_day..=end_day`.
    pub fn new(
        title: impl Into<String>,
        calendar: impl Into<String>,
        start_day: DayIndex,
        end_day: DayIndex,
    ) -> Result<Self, EventError> {
        if start_day > end_day {
            return Err(EventError::InvertedRange {
                start: start_day.get(),
                end: end_day.get(),
            });
        }
        Ok(Self {
            title: title.into(),
            calendar: calendar.into(),
            start_day,
            end_day,
            start_time: None,
            end_time: None,
        })
    }

    /// Attach start and end times.
    #[must_use]
    pub fn with_times(mut self, start: ClockTime, end: ClockTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Build from the string contract used at the ingestion boundary.
    ///
    /// `start_time`/`end_time` are `HH:MM`, the sentinel `"-"` (all-day,
    /// single day) or empty (all-day, multi-day).
    pub fn from_parts(
        title: &str,
        calendar: &str,
        start_day: u8,
        end_day: u8,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, EventError> {
        let start = DayIndex::new(start_day)?;
        let end = DayIndex::new(end_day)?;
        let mut event = Self::new(title, calendar, start, end)?;
        event.start_time = parse_event_time(start_time)?;
        event.end_time = parse_event_time(end_time)?;
        Ok(event)
    }

    /// First day of the event.
    pub const fn start_day(&self) -> DayIndex {
        self.start_day
    }

    /// Last day of the event (inclusive).
    pub const fn end_day(&self) -> DayIndex {
        self.end_day
    }

    /// `true` when the event spans more than one day.
    pub fn is_multi_day(&self) -> bool {
        self.start_day != self.end_day
    }

    /// `true` when the event has no start time.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }

    /// `true` when `day` lies within `start_day..=end_day`.
    pub fn covers(&self, day: DayIndex) -> bool {
        self.start_day <= day && day <= self.end_day
    }

    /// Days spanned, as a 14-bit mask (bit 0 = day 1).
    pub fn day_mask(&self) -> u16 {
        DayIndex::all()
            .filter(|day| self.covers(*day))
            .fold(0, |mask, day| mask | day.bit())
    }

    /// Number of days spanned (at least 1).
    pub fn span_days(&self) -> u8 {
        self.end_day
            .get()
            .saturating_sub(self.start_day.get())
            .saturating_add(1)
    }
}

fn parse_event_time(text: &str) -> Result<Option<ClockTime>, EventError> {
    match text.trim() {
        "" | "-" => Ok(None),
        time => ClockTime::parse(time).map(Some),
    }
}
