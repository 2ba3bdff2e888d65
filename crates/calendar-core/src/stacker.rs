//! Single-day event placement inside one day cell.
//!
//! Cards are stacked top to bottom in start-time order. When the cell cannot
//! hold them all, the last visible slot may shrink to a reduced one-line
//! card and the remainder is summarised as an overflow count.

use alloc::vec::Vec;

use crate::date::DayIndex;
use crate::event::CalendarEvent;

/// Gap kept below a reduced card before the overflow line.
pub const REDUCED_GAP: u32 = 2;

/// Vertical metrics the stacker needs, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackMetrics {
    /// Pitch of a full-height card (card height plus gap).
    pub full_spacing: u32,
    /// Height of a reduced card.
    pub reduced_height: u32,
    /// Height of the "N more events..." line.
    pub overflow_spacing: u32,
}

impl StackMetrics {
    /// Space taken by a reduced card including its gap.
    pub const fn reduced_slot(&self) -> u32 {
        self.reduced_height.saturating_add(REDUCED_GAP)
    }

    /// How many cards to draw full and whether one more is drawn reduced.
    ///
    /// Pure arithmetic over the count; see [`DayStack::plan`] for the event
    /// version.
    pub fn decide(&self, count: usize, available: u32) -> StackShape {
        let max_full = available
            .checked_div(self.full_spacing)
            .map_or(0, |slots| usize::try_from(slots).unwrap_or(usize::MAX));

        if count <= max_full {
            return StackShape {
                full: count,
                reduced: false,
            };
        }

        let trimmed = max_full.saturating_sub(1);
        if max_full > 0 {
            let needed = u32::try_from(trimmed)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.full_spacing)
                .saturating_add(self.reduced_slot())
                .saturating_add(self.overflow_spacing);
            if needed <= available {
                return StackShape {
                    full: trimmed,
                    reduced: true,
                };
            }
        }

        StackShape {
            full: trimmed.max(1),
            reduced: false,
        }
    }
}

/// Result of [`StackMetrics::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackShape {
    /// Cards drawn at full height.
    pub full: usize,
    /// One extra card drawn at reduced height.
    pub reduced: bool,
}

impl StackShape {
    /// Cards drawn in total.
    pub fn shown(&self) -> usize {
        self.full.saturating_add(usize::from(self.reduced))
    }
}

/// Placement of one day's single-day events.
///
/// Holds indices into the render's event slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayStack {
    /// Drawn at full height, top to bottom.
    pub full: Vec<usize>,
    /// Drawn at reduced height below the full cards.
    pub reduced: Option<usize>,
    /// Events not drawn, reported by count.
    pub overflow: usize,
}

impl DayStack {
    /// Decide placement for the single-day events on `day`.
    ///
    /// `available` is the height left in the cell after the day-number
    /// margin and any multi-day rows covering the day.
    pub fn plan(
        events: &[CalendarEvent],
        day: DayIndex,
        available: u32,
        metrics: &StackMetrics,
    ) -> Self {
        let agenda = day_agenda(events, day);
        let shape = metrics.decide(agenda.len(), available);

        let mut order = agenda.into_iter();
        let full: Vec<usize> = order.by_ref().take(shape.full).collect();
        let reduced = if shape.reduced { order.next() } else { None };
        let overflow = order.count();

        if overflow > 0 {
            tracing::debug!(day = day.get(), shown = shape.shown(), overflow, "day overflows");
        }

        Self {
            full,
            reduced,
            overflow,
        }
    }

    /// Cards drawn, full and reduced.
    pub fn shown(&self) -> usize {
        self.full.len().saturating_add(usize::from(self.reduced.is_some()))
    }

    /// Events considered for the day.
    pub fn total(&self) -> usize {
        self.shown().saturating_add(self.overflow)
    }
}

/// Indices of the single-day events on `day`, ordered by start time.
///
/// All-day events come first. Equal times keep input order.
pub fn day_agenda(events: &[CalendarEvent], day: DayIndex) -> Vec<usize> {
    let mut agenda: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| !event.is_multi_day() && event.start_day() == day)
        .map(|(index, _)| index)
        .collect();
    agenda.sort_by_key(|&index| events.get(index).and_then(|event| event.start_time));
    agenda
}
