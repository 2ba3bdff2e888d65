//! Resolve raw snapshot events onto the 14-day window.
//!
//! - all-day, single day: all-day card (no start time)
//! - all-day, several days: multi-day bar without times
//! - timed: `HH:MM` taken from the timestamps
//!
//! Events starting outside the window are dropped; ends past the window are
//! clipped to its last day.

use anyhow::{Context, Result};
use calendar_core::{day_offset, CalendarEvent, ClockTime, DayIndex, WINDOW_DAYS};

use crate::snapshot::{RawEvent, Snapshot};

/// Outcome of [`resolve_events`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Events on the window, in source order.
    pub events: Vec<CalendarEvent>,
    /// Events skipped because they start outside the window.
    pub outside_window: usize,
    /// Events skipped because their dates or times could not be read.
    pub malformed: usize,
}

/// Resolve every snapshot event against `snapshot.week_start`.
pub fn resolve_events(snapshot: &Snapshot) -> Result<Resolved> {
    calendar_core::CalendarDate::parse(&snapshot.week_start)
        .with_context(|| format!("week_start {:?} is not a date", snapshot.week_start))?;

    let mut resolved = Resolved::default();
    for raw in &snapshot.events {
        match resolve_event(raw, &snapshot.week_start) {
            Ok(Some(event)) => resolved.events.push(event),
            Ok(None) => {
                tracing::debug!(title = %raw.title, start = %raw.start, "event outside window");
                resolved.outside_window = resolved.outside_window.saturating_add(1);
            }
            Err(err) => {
                tracing::warn!(title = %raw.title, error = %err, "skipping malformed event");
                resolved.malformed = resolved.malformed.saturating_add(1);
            }
        }
    }
    tracing::info!(
        kept = resolved.events.len(),
        outside_window = resolved.outside_window,
        malformed = resolved.malformed,
        "events resolved"
    );
    Ok(resolved)
}

/// Resolve one event. `Ok(None)` when it starts outside the window.
pub fn resolve_event(raw: &RawEvent, week_start: &str) -> Result<Option<CalendarEvent>> {
    let start = day_offset(&raw.start, week_start)?.saturating_add(1);
    let end = day_offset(&raw.end, week_start)?.saturating_add(1);
    let Some(start_day) = u8::try_from(start).ok().filter(|d| DayIndex::new(*d).is_ok()) else {
        return Ok(None);
    };
    let end_day = u8::try_from(end.clamp(1, i64::from(WINDOW_DAYS))).unwrap_or(WINDOW_DAYS);

    let all_day = !raw.start.contains('T') && !raw.end.contains('T');
    let (start_time, end_time) = if all_day {
        (None, None)
    } else {
        (clock_time(&raw.start)?, clock_time(&raw.end)?)
    };

    let mut event =
        CalendarEvent::from_parts(&raw.title, &raw.calendar, start_day, end_day, "", "")?;
    event.start_time = start_time;
    event.end_time = end_time;
    Ok(Some(event))
}

/// `HH:MM` from `YYYY-MM-DDTHH:MM[:SS][±TZ]`.
fn clock_time(timestamp: &str) -> Result<Option<ClockTime>> {
    let Some((_, time)) = timestamp.split_once('T') else {
        return Ok(None);
    };
    let hh_mm = time
        .get(..5)
        .with_context(|| format!("timestamp {timestamp:?} has no HH:MM"))?;
    Ok(Some(ClockTime::parse(hh_mm)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK_START: &str = "2025-01-06";

    fn raw(start: &str, end: &str) -> RawEvent {
        RawEvent {
            title: "Event".into(),
            calendar: "family".into(),
            start: start.into(),
            end: end.into(),
        }
    }

    fn resolve(start: &str, end: &str) -> Option<CalendarEvent> {
        resolve_event(&raw(start, end), WEEK_START).unwrap()
    }

    #[test]
    fn all_day_single_is_all_day_card() {
        let event = resolve("2025-01-09", "2025-01-09").unwrap();
        assert_eq!(event.start_day().get(), 4);
        assert!(!event.is_multi_day());
        assert!(event.is_all_day());
    }

    #[test]
    fn all_day_range_is_multi_day_without_times() {
        let event = resolve("2025-01-09", "2025-01-11").unwrap();
        assert!(event.is_multi_day());
        assert_eq!(event.end_day().get(), 6);
        assert_eq!(event.start_time, None);
        assert_eq!(event.end_time, None);
    }

    #[test]
    fn timed_event_keeps_hh_mm() {
        let event = resolve("2025-01-08T09:30:00+01:00", "2025-01-08T11:00:00+01:00").unwrap();
        assert_eq!(event.start_day().get(), 3);
        assert_eq!(event.start_time.unwrap().to_string(), "09:30");
        assert_eq!(event.end_time.unwrap().to_string(), "11:00");
    }

    #[test]
    fn window_edges() {
        assert!(resolve("2025-01-05", "2025-01-07").is_none());
        assert!(resolve("2025-01-20", "2025-01-20").is_none());
        let clipped = resolve("2025-01-18", "2025-01-25").unwrap();
        assert_eq!(clipped.start_day().get(), 13);
        assert_eq!(clipped.end_day(), DayIndex::LAST);
    }

    #[test]
    fn crosses_month_end() {
        let event = resolve_event(&raw("2025-02-02", "2025-02-02"), "2025-01-27").unwrap().unwrap();
        assert_eq!(event.start_day().get(), 7);
    }

    #[test]
    fn malformed_dates_are_errors() {
        assert!(resolve_event(&raw("tomorrow", "2025-01-09"), WEEK_START).is_err());
        assert!(resolve_event(&raw("2025-01-09T9", "2025-01-09T10:00"), WEEK_START).is_err());
    }
}
