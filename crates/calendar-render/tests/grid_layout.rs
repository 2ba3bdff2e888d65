//! Grid rendering on the headless canvas.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use calendar_core::{CalendarEvent, DayIndex};
use calendar_render::prelude::*;
use calendar_testing::{RecordingSurface, TestCanvas};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

const META: CalendarMeta<'static> = CalendarMeta {
    current_date: "2025-01-08",
    current_day: "Wednesday",
    current_time: "06:30",
    week_start: "2025-01-06",
};

fn day(n: u8) -> DayIndex {
    DayIndex::new(n).unwrap()
}

fn timed(title: &str, d: u8, start: &str, end: &str) -> CalendarEvent {
    CalendarEvent::from_parts(title, "work", d, d, start, end).unwrap()
}

fn multi(title: &str, start: u8, end: u8) -> CalendarEvent {
    CalendarEvent::from_parts(title, "family", start, end, "", "").unwrap()
}

fn render(events: &[CalendarEvent], meta: &CalendarMeta<'_>) -> (TestCanvas, RenderReport) {
    let geometry = GridGeometry::default();
    let mut canvas = TestCanvas::with_geometry(&geometry);
    let report = {
        let mut ctx = RenderContext::new(&mut *canvas, geometry);
        render_calendar(&mut ctx, events, meta).unwrap()
    };
    canvas.register_report(&report);
    (canvas, report)
}

fn record(events: &[CalendarEvent], meta: &CalendarMeta<'_>) -> RecordingSurface {
    let geometry = GridGeometry::default();
    let mut surface = RecordingSurface::new(geometry.size());
    let mut ctx = RenderContext::new(&mut surface, geometry);
    render_calendar(&mut ctx, events, meta).unwrap();
    surface
}

#[test]
fn empty_grid_has_headers_and_day_numbers_only() {
    let (canvas, report) = render(&[], &META);

    assert_eq!(report.today, day(3));
    assert_eq!(report.multi_day_rows, 0);
    assert_eq!(report.placements_of(PlacementKind::Header).count(), 7);
    assert_eq!(report.placements_of(PlacementKind::DayBadge).count(), 14);
    assert_eq!(report.placements.len(), 21);
    assert!(report.days.iter().all(|d| d.total() == 0));

    // Red appears only in today's header label and badge.
    let g = GridGeometry::default();
    let everything = Rectangle::new(Point::zero(), g.size());
    let header = g.header_cell(day(3).column());
    let badge = g.badge(day(3));
    let red = canvas.pixel_count_of_color(everything, TriColor::Red);
    assert!(red > 0);
    assert_eq!(
        red,
        canvas.pixel_count_of_color(header, TriColor::Red)
            + canvas.pixel_count_of_color(badge, TriColor::Red)
    );
}

#[test]
fn today_badge_is_accent_with_white_number() {
    let (canvas, _) = render(&[], &META);
    let badge = canvas.query_by_test_id("badge-3").unwrap().bounds();
    canvas.assert_region_contains(badge, TriColor::Red).unwrap();
    canvas.assert_region_contains(badge, TriColor::White).unwrap();

    let other = canvas.query_by_test_id("badge-4").unwrap().bounds();
    assert!(canvas.assert_region_contains(other, TriColor::Red).is_err());
    canvas.assert_region_contains(other, TriColor::Black).unwrap();
}

#[test]
fn separators_span_the_canvas() {
    let (canvas, _) = render(&[], &META);
    let g = GridGeometry::default();
    for y in [g.header_height, g.header_height + g.row_height] {
        canvas.assert_pixel(0, y, TriColor::Black).unwrap();
        canvas.assert_pixel(g.width - 1, y, TriColor::Black).unwrap();
    }
}

#[test]
fn headers_follow_the_anchor_weekday() {
    let wednesday_start = CalendarMeta {
        current_date: "2025-01-08",
        week_start: "2025-01-08",
        ..META
    };
    let surface = record(&[], &wednesday_start);
    let labels: Vec<&str> = surface.texts().take(7).collect();
    assert_eq!(
        labels,
        ["WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY", "SUNDAY", "MONDAY", "TUESDAY"]
    );
}

#[test]
fn malformed_anchor_falls_back_to_relative_numbers() {
    let broken = CalendarMeta {
        week_start: "next week",
        ..META
    };
    let surface = record(&[], &broken);
    let texts: Vec<&str> = surface.texts().collect();
    assert_eq!(texts[0], "MONDAY");
    // Headers, then one number per day 1..=14.
    let numbers: Vec<&str> = texts[7..].to_vec();
    let expected: Vec<String> = (1..=14).map(|n: u8| n.to_string()).collect();
    assert_eq!(numbers, expected);

    let (_, report) = render(&[], &broken);
    assert_eq!(report.today, DayIndex::FIRST);
}

#[test]
fn day_numbers_roll_over_real_month_ends() {
    let leap = CalendarMeta {
        current_date: "2024-02-28",
        week_start: "2024-02-26",
        ..META
    };
    let texts: Vec<String> = record(&[], &leap).texts().skip(7).map(str::to_string).collect();
    assert_eq!(texts[..6], ["26", "27", "28", "29", "1", "2"]);
    assert_eq!(texts[13], "10");
}

#[test]
fn cards_land_in_their_cell() {
    let events = [
        timed("Dentist", 2, "09:00", "09:30"),
        timed("Standup", 3, "09:15", "09:30"),
    ];
    let (canvas, report) = render(&events, &META);
    let g = GridGeometry::default();

    let card = canvas.query_by_test_id("card-2-0").unwrap().bounds();
    assert_eq!(card.top_left, Point::new(114 + 3, 32 + 25));
    assert_eq!(card.size, Size::new(g.card_width(), g.card_height));
    canvas.assert_region_contains(card, TriColor::Black).unwrap();
    assert!(canvas.assert_region_contains(card, TriColor::Red).is_err());

    // Today's cards use the accent colour.
    let today_card = canvas.query_by_test_id("card-3-1").unwrap().bounds();
    canvas.assert_region_contains(today_card, TriColor::Red).unwrap();

    assert_eq!(report.day(day(2)).unwrap().full, vec![0]);
    assert_eq!(report.overflow_total(), 0);
}

#[test]
fn cards_are_drawn_in_start_time_order() {
    let events = [
        timed("Late", 5, "18:00", "19:00"),
        CalendarEvent::from_parts("Holiday", "home", 5, 5, "-", "").unwrap(),
        timed("Early", 5, "07:00", "08:00"),
    ];
    let (canvas, report) = render(&events, &META);
    assert_eq!(report.day(day(5)).unwrap().full, vec![1, 2, 0]);

    let y = |id: &str| canvas.query_by_test_id(id).unwrap().position.1;
    assert!(y("card-5-1") < y("card-5-2"));
    assert!(y("card-5-2") < y("card-5-0"));

    let surface = record(&events, &META);
    assert!(surface.drew_text("All day"));
    assert!(surface.drew_text("07:00-08:00"));
}

#[test]
fn crowded_day_reduces_last_card_and_reports_overflow() {
    let events: Vec<CalendarEvent> = (0..5)
        .map(|n| timed("Meeting", 4, &format!("{:02}:00", 9 + n), &format!("{:02}:45", 9 + n)))
        .collect();
    let (canvas, report) = render(&events, &META);

    // 183px free: 2 full cards + reduced + overflow line.
    let stack = report.day(day(4)).unwrap();
    assert_eq!(stack.full.len(), 2);
    assert!(stack.reduced.is_some());
    assert_eq!(stack.overflow, 2);
    assert_eq!(stack.total(), 5);

    let reduced = canvas.query_by_test_id("reduced-4-2").unwrap();
    assert_eq!(reduced.size.1, GridGeometry::default().reduced_card_height);
    canvas.assert_has_component("overflow-4").unwrap();
    assert!(record(&events, &META).drew_text("2 more events..."));
}

#[test]
fn multi_day_rows_shrink_the_card_area() {
    let mut events = vec![multi("Trip", 1, 4), multi("Course", 2, 6)];
    events.extend((0..5).map(|n| timed("Call", 3, &format!("1{n}:00"), "")));
    let (canvas, report) = render(&events, &META);

    assert_eq!(report.multi_day_rows, 2);
    // 123px free: 1 full card + reduced + overflow line.
    let stack = report.day(day(3)).unwrap();
    assert_eq!(stack.full.len(), 1);
    assert!(stack.reduced.is_some());
    assert_eq!(stack.overflow, 3);

    let card = canvas.query_by_test_id("card-3-2").unwrap();
    assert_eq!(card.position.1, 32 + 25 + 2 * 30);
}

#[test]
fn overlapping_bars_stack_and_disjoint_bars_share_a_row() {
    let events = [multi("A", 3, 5), multi("B", 4, 6), multi("C", 6, 7), multi("D", 1, 2)];
    let (canvas, report) = render(&events, &META);
    assert_eq!(report.multi_day_rows, 2);

    let top = |id: &str| canvas.query_by_test_id(id).unwrap().position.1;
    assert_eq!(top("segment-1-0") - top("segment-0-0"), 30);
    assert_eq!(top("segment-3-0"), top("segment-0-0"));
    // C starts after A ends, so it reuses row 0.
    assert_eq!(top("segment-2-0"), top("segment-0-0"));
}

#[test]
fn bar_crossing_the_week_splits_into_two_segments() {
    let events = [multi("Conference", 5, 10)];
    let (canvas, report) = render(&events, &META);
    let segments: Vec<_> = report.placements_of(PlacementKind::MultiDaySegment).collect();
    assert_eq!(segments.len(), 2);

    let first = canvas.query_by_test_id("segment-0-0").unwrap();
    let second = canvas.query_by_test_id("segment-0-1").unwrap();
    assert_eq!(first.position, (4 * 114 + 3, 32 + 25));
    assert_eq!(first.size, (3 * 114 - 6, 26));
    assert_eq!(second.position, (3, 32 + 208 + 25));
    assert_eq!(second.size, (3 * 114 - 6, 26));
    assert_eq!(segments[1].day, Some(day(8)));

    // The title is only drawn on the first segment.
    let texts: Vec<String> = record(&events, &META).texts().map(str::to_string).collect();
    assert_eq!(texts.iter().filter(|t| t.starts_with("Conf")).count(), 1);
}

#[test]
fn second_week_bar_is_a_single_segment() {
    let events = [multi("Camp", 9, 14)];
    let (_, report) = render(&events, &META);
    let segments: Vec<_> = report.placements_of(PlacementKind::MultiDaySegment).collect();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].bounds.size.width, 6 * 114 - 6);
}

#[test]
fn bar_covering_today_uses_accent() {
    let events = [multi("Now", 2, 4), multi("Later", 5, 6)];
    let (canvas, _) = render(&events, &META);
    let now = canvas.query_by_test_id("segment-0-0").unwrap().bounds();
    let later = canvas.query_by_test_id("segment-1-0").unwrap().bounds();
    canvas.assert_region_contains(now, TriColor::Red).unwrap();
    assert!(canvas.assert_region_contains(later, TriColor::Red).is_err());
}

#[test]
fn long_titles_wrap_inside_the_card() {
    let events = [timed("Harvest Festival Competition Announcement", 6, "10:00", "12:00")];
    let surface = record(&events, &META);
    let texts: Vec<&str> = surface.texts().collect();
    assert!(texts.contains(&"Harvest"));
    assert!(texts.iter().any(|t| t.ends_with("...")));

    let card = GridGeometry::default().card_width() - 8;
    for op in surface.ops() {
        if let calendar_testing::DrawOp::Text { text, font: Font::Body, .. } = op {
            assert!(Font::Body.measure(text).width <= card, "{text} overflows");
        }
    }
}

#[test]
fn oversized_geometry_leaves_a_blank_canvas() {
    let geometry = GridGeometry {
        day_width: u32::MAX / 4,
        ..GridGeometry::default()
    };
    let events = [timed("Dentist", 2, "09:00", "09:30"), multi("Trip", 3, 9)];
    let mut surface = RecordingSurface::new(GridGeometry::default().size());
    let report = {
        let mut ctx = RenderContext::new(&mut surface, geometry);
        render_calendar(&mut ctx, &events, &META).unwrap()
    };

    assert!(matches!(
        report.geometry_error,
        Some(GeometryError::TooLarge { field: "day_width", .. })
    ));
    assert!(report.placements.is_empty());
    assert!(report.days.is_empty());
    // Only the clear.
    assert_eq!(surface.ops().len(), 1);
    assert_eq!(surface.ops()[0].color(), TriColor::White);

    let mut canvas = TestCanvas::with_geometry(&GridGeometry::default());
    {
        let mut ctx = RenderContext::new(&mut *canvas, geometry);
        render_calendar(&mut ctx, &events, &META).unwrap();
    }
    let everything = Rectangle::new(Point::zero(), GridGeometry::default().size());
    canvas.assert_region_uniform(everything, TriColor::White).unwrap();
}

#[test]
fn valid_geometry_reports_no_error() {
    let (_, report) = render(&[], &META);
    assert_eq!(report.geometry_error, None);
}
