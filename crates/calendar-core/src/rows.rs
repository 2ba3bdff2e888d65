//! Multi-day events packed into stacking rows.
//!
//! Greedy interval colouring: events are visited by start day (input order
//! breaks ties) and each takes the lowest row whose occupied days do not
//! intersect its own. Visiting in start order makes the row count equal the
//! deepest overlap of any single day.

use alloc::vec;
use alloc::vec::Vec;

use crate::date::DayIndex;
use crate::event::CalendarEvent;

/// Row placement for the multi-day events of one render pass.
///
/// Indexed by position in the event slice it was built from. Single-day
/// events have no row. Borrowing the slice ties the mapping to the render
/// that produced it.
#[derive(Debug, Clone)]
pub struct RowAssignment<'a> {
    events: &'a [CalendarEvent],
    rows: Vec<Option<usize>>,
    row_count: usize,
}

impl<'a> RowAssignment<'a> {
    /// Assign a row to every multi-day event in `events`.
    pub fn assign(events: &'a [CalendarEvent]) -> Self {
        let mut order: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.is_multi_day())
            .map(|(index, _)| index)
            .collect();
        // Stable: equal start days keep input order.
        order.sort_by_key(|&index| events.get(index).map(CalendarEvent::start_day));

        let mut rows = vec![None; events.len()];
        // Day mask of what each row already holds.
        let mut occupied: Vec<u16> = Vec::new();

        for index in order {
            let Some(event) = events.get(index) else {
                continue;
            };
            let span = event.day_mask();
            let row = match occupied.iter().position(|&days| days & span == 0) {
                Some(row) => row,
                None => {
                    occupied.push(0);
                    occupied.len().saturating_sub(1)
                }
            };
            if let Some(days) = occupied.get_mut(row) {
                *days |= span;
            }
            if let Some(slot) = rows.get_mut(index) {
                *slot = Some(row);
            }
        }

        Self {
            events,
            rows,
            row_count: occupied.len(),
        }
    }

    /// Row of the event at `index`, `None` for single-day events.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows.get(index).copied().flatten()
    }

    /// Rows in use across the whole window.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Rows reserved on `day`: one past the highest row of any multi-day
    /// event covering it, so single-day cards start below every bar.
    pub fn rows_covering(&self, day: DayIndex) -> usize {
        self.placed()
            .filter(|(event, _)| event.covers(day))
            .map(|(_, row)| row.saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Multi-day events with their rows, in input order.
    pub fn placed(&self) -> impl Iterator<Item = (&'a CalendarEvent, usize)> + '_ {
        self.events
            .iter()
            .zip(&self.rows)
            .filter_map(|(event, row)| row.map(|row| (event, row)))
    }

    /// Multi-day events that begin on `day`, with their rows.
    pub fn starting_on(&self, day: DayIndex) -> impl Iterator<Item = (&'a CalendarEvent, usize)> + '_ {
        self.placed().filter(move |(event, _)| event.start_day() == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(start: u8, end: u8) -> CalendarEvent {
        CalendarEvent::from_parts("e", "c", start, end, "", "").unwrap()
    }

    #[test]
    fn overlapping_events_take_separate_rows() {
        let events = [multi(3, 5), multi(4, 6)];
        let rows = RowAssignment::assign(&events);
        assert_eq!((rows.row_of(0), rows.row_of(1)), (Some(0), Some(1)));
        assert_eq!(rows.row_count(), 2);
    }

    #[test]
    fn disjoint_events_share_row() {
        let events = [multi(3, 5), multi(6, 8)];
        let rows = RowAssignment::assign(&events);
        assert_eq!((rows.row_of(0), rows.row_of(1)), (Some(0), Some(0)));
        assert_eq!(rows.row_count(), 1);
    }

    #[test]
    fn start_order_beats_input_order() {
        // Input order would put the late event in row 0 first, but packing
        // visits by start day.
        let events = [multi(6, 8), multi(1, 4), multi(2, 3)];
        let rows = RowAssignment::assign(&events);
        assert_eq!(rows.row_of(1), Some(0));
        assert_eq!(rows.row_of(2), Some(1));
        assert_eq!(rows.row_of(0), Some(0));
    }

    #[test]
    fn single_day_events_have_no_row() {
        let single = CalendarEvent::from_parts("s", "c", 4, 4, "09:00", "10:00").unwrap();
        let events = [single, multi(3, 5)];
        let rows = RowAssignment::assign(&events);
        assert_eq!(rows.row_of(0), None);
        assert_eq!(rows.row_of(1), Some(0));
        assert_eq!(rows.row_of(7), None);
    }

    #[test]
    fn rows_covering_counts_highest_row() {
        let events = [multi(1, 3), multi(2, 9), multi(5, 6)];
        let rows = RowAssignment::assign(&events);
        let day = |n| DayIndex::new(n).unwrap();
        assert_eq!(rows.rows_covering(day(2)), 2);
        assert_eq!(rows.rows_covering(day(1)), 1);
        // Day 5 holds the row-0 event (5-6) and the row-1 event (2-9).
        assert_eq!(rows.rows_covering(day(5)), 2);
        assert_eq!(rows.rows_covering(day(12)), 0);
        assert_eq!(rows.starting_on(day(2)).count(), 1);
    }
}
