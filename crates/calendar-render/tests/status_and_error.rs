//! Status bar and full-screen error state.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use calendar_core::PowerThresholds;
use calendar_render::error_screen::ICON_SIZE;
use calendar_render::prelude::*;
use calendar_testing::{DrawOp, RecordingSurface, TestCanvas};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

fn info(rssi: i32, battery_mv: Option<u32>) -> StatusInfo<'static> {
    StatusInfo {
        refresh_time: "06:30",
        rssi,
        battery_mv,
        power: PowerThresholds::default(),
    }
}

fn record_status(info: &StatusInfo<'_>) -> RecordingSurface {
    let geometry = GridGeometry::default();
    let mut surface = RecordingSurface::new(geometry.size());
    let mut ctx = RenderContext::new(&mut surface, geometry);
    render_status_bar(&mut ctx, info).unwrap();
    surface
}

fn text_color(surface: &RecordingSurface, wanted: &str) -> TriColor {
    surface
        .ops()
        .iter()
        .find(|op| op.text() == Some(wanted))
        .map(DrawOp::color)
        .unwrap()
}

#[test]
fn healthy_device_is_all_black() {
    let surface = record_status(&info(-55, Some(4000)));
    assert!(surface.drew_text("06:30"));
    assert_eq!(text_color(&surface, "Good (-55dBm)"), TriColor::Black);
    let battery = surface.texts().find(|t| t.ends_with("(4.00v)")).unwrap().to_string();
    assert_eq!(text_color(&surface, &battery), TriColor::Black);

    let bitmaps = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Bitmap { .. }))
        .count();
    assert_eq!(bitmaps, 3);
}

#[test]
fn low_battery_and_weak_signal_use_accent() {
    let surface = record_status(&info(-82, Some(3300)));
    assert_eq!(text_color(&surface, "Weak (-82dBm)"), TriColor::Red);
    let battery = surface.texts().find(|t| t.ends_with("(3.30v)")).unwrap().to_string();
    assert_eq!(text_color(&surface, &battery), TriColor::Red);
    assert_eq!(text_color(&surface, "06:30"), TriColor::Black);
}

#[test]
fn disconnected_without_battery() {
    let surface = record_status(&info(0, None));
    assert_eq!(text_color(&surface, "No Connection"), TriColor::Black);
    assert!(!surface.texts().any(|t| t.contains('%')));
    let bitmaps = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Bitmap { .. }))
        .count();
    assert_eq!(bitmaps, 2);
}

#[test]
fn status_bar_stays_in_its_band() {
    let geometry = GridGeometry::default();
    let mut canvas = TestCanvas::with_geometry(&geometry);
    {
        let mut ctx = RenderContext::new(&mut *canvas, geometry);
        render_status_bar(&mut ctx, &info(-65, Some(3900))).unwrap();
    }
    let band = geometry.status_bar();
    canvas.assert_region_contains(band, TriColor::Black).unwrap();
    let above = Rectangle::new(Point::zero(), Size::new(geometry.width, band.top_left.y as u32));
    canvas.assert_region_uniform(above, TriColor::White).unwrap();

    // Items are packed against the right edge.
    let right = Rectangle::new(Point::new(700, band.top_left.y), Size::new(100, 32));
    canvas.assert_region_contains(right, TriColor::Black).unwrap();
}

#[test]
fn error_icon_is_accent_above_the_middle() {
    let geometry = GridGeometry::default();
    let mut canvas = TestCanvas::with_geometry(&geometry);
    for icon in [ErrorIcon::NetworkUnavailable, ErrorIcon::LowBattery, ErrorIcon::TimeSync] {
        {
            let mut ctx = RenderContext::new(&mut *canvas, geometry);
            render_error(&mut ctx, icon, "Network unavailable", Some("Retrying in 30 minutes")).unwrap();
        }
        let icon_area = Rectangle::new(
            Point::new(400 - ICON_SIZE as i32 / 2, 0),
            Size::new(ICON_SIZE, 240),
        );
        canvas.assert_region_contains(icon_area, TriColor::Red).unwrap();
        let lower = Rectangle::new(Point::new(0, 240), Size::new(800, 240));
        assert!(canvas.assert_region_contains(lower, TriColor::Red).is_err());
        canvas.assert_region_contains(lower, TriColor::Black).unwrap();
    }
}

#[test]
fn error_lines_are_centred() {
    let geometry = GridGeometry::default();
    let mut surface = RecordingSurface::new(geometry.size());
    {
        let mut ctx = RenderContext::new(&mut surface, geometry);
        render_error(&mut ctx, ErrorIcon::TimeSync, "Time sync failed", Some("Check the network")).unwrap();
    }
    let lines: Vec<(Point, String)> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { origin, text, font: Font::Heading, .. } => Some((*origin, text.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 2);
    for (origin, text) in &lines {
        let width = Font::Heading.measure(text).width as i32;
        assert_eq!(origin.x, 400 - width / 2);
    }
    assert_eq!(lines[1].0.y - lines[0].0.y, 28);
}

#[test]
fn single_error_line_wraps_to_two() {
    let geometry = GridGeometry::default();
    let mut surface = RecordingSurface::new(geometry.size());
    {
        let mut ctx = RenderContext::new(&mut surface, geometry);
        let message = "The calendar server could not be reached because the Wi-Fi network did not respond in time, so the display will try again at the next scheduled refresh";
        render_error(&mut ctx, ErrorIcon::NetworkUnavailable, message, None).unwrap();
    }
    let lines: Vec<&str> = surface.texts().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("..."));
    for line in lines {
        assert!(Font::Heading.measure(line).width <= 600);
    }
}

#[test]
fn status_bar_skips_rejected_geometry() {
    let geometry = GridGeometry {
        status_bar_height: u32::MAX,
        ..GridGeometry::default()
    };
    let mut surface = RecordingSurface::new(GridGeometry::default().size());
    {
        let mut ctx = RenderContext::new(&mut surface, geometry);
        render_status_bar(&mut ctx, &info(-55, Some(4000))).unwrap();
    }
    assert!(surface.ops().is_empty());
}
