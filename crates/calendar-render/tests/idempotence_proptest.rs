//! Rendering is a pure function of its inputs.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use calendar_core::{day_agenda, CalendarEvent, DayIndex};
use calendar_render::prelude::*;
use calendar_testing::{DrawOp, RecordingSurface, TestCanvas};
use proptest::prelude::*;

const META: CalendarMeta<'static> = CalendarMeta {
    current_date: "2025-03-05",
    current_day: "Wednesday",
    current_time: "07:45",
    week_start: "2025-03-03",
};

fn record(events: &[CalendarEvent]) -> (Vec<DrawOp>, RenderReport) {
    let geometry = GridGeometry::default();
    let mut surface = RecordingSurface::new(geometry.size());
    let report = {
        let mut ctx = RenderContext::new(&mut surface, geometry);
        render_calendar(&mut ctx, events, &META).unwrap()
    };
    (surface.take_ops(), report)
}

prop_compose! {
    fn arb_event()(
        start in 1u8..=14,
        len in 0u8..5,
        hour in proptest::option::of(0u8..24),
        title in "[A-Za-z]{1,10}( [A-Za-z]{1,12}){0,4}",
    ) -> CalendarEvent {
        let end = (start + len).min(14);
        let time = hour.map(|h| format!("{h:02}:00")).unwrap_or_default();
        CalendarEvent::from_parts(&title, "cal", start, end, &time, "").unwrap()
    }
}

proptest! {
    #[test]
    fn same_inputs_same_draw_calls(events in proptest::collection::vec(arb_event(), 0..30)) {
        let (first_ops, first_report) = record(&events);
        let (second_ops, second_report) = record(&events);
        prop_assert_eq!(first_ops, second_ops);
        prop_assert_eq!(first_report, second_report);
    }

    #[test]
    fn every_single_day_event_is_shown_or_counted(
        events in proptest::collection::vec(arb_event(), 0..30)
    ) {
        let (_, report) = record(&events);
        for day in DayIndex::all() {
            let stack = report.day(day).unwrap();
            prop_assert_eq!(stack.total(), day_agenda(&events, day).len());
        }
        let cards = report.placements_of(PlacementKind::Card).count()
            + report.placements_of(PlacementKind::ReducedCard).count();
        let shown: usize = report.days.iter().map(|d| d.shown()).sum();
        prop_assert_eq!(cards, shown);
    }

    #[test]
    fn placements_stay_on_the_canvas(events in proptest::collection::vec(arb_event(), 0..30)) {
        let (_, report) = record(&events);
        let g = GridGeometry::default();
        for placement in &report.placements {
            let b = placement.bounds;
            prop_assert!(b.top_left.x >= 0 && b.top_left.y >= 0);
            prop_assert!(b.top_left.x as u32 + b.size.width <= g.width);
        }
    }
}

#[test]
fn canvas_pixels_are_reproducible() {
    let events = [
        CalendarEvent::from_parts("Ski week", "family", 6, 11, "", "").unwrap(),
        CalendarEvent::from_parts("Dentist", "home", 3, 3, "08:30", "09:00").unwrap(),
    ];
    let geometry = GridGeometry::default();
    let draw = || {
        let mut canvas = TestCanvas::with_geometry(&geometry);
        {
            let mut ctx = RenderContext::new(&mut *canvas, geometry);
            render_calendar(&mut ctx, &events, &META).unwrap();
        }
        canvas.framebuffer().clone()
    };
    assert_eq!(draw(), draw());
}
