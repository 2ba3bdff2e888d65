//! Two-week calendar grid.
//!
//! One linear pass per call: clear, weekday headers, separators, multi-day
//! bars (start day only, split at the week boundary), then day numbers and
//! single-day cards per day. Row assignment and stacking are recomputed from
//! the event slice every time, so two calls with the same inputs issue the
//! same draw calls.

use alloc::vec::Vec;
use core::fmt::Write as _;

use calendar_core::{
    date_at, day_index_or_first, weekday_label, CalendarDate, CalendarEvent, DayIndex, DayStack,
    RowAssignment, Weekday, DAYS_PER_WEEK, WEEKS,
};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::cards::{draw_multi_day_segment, draw_single_day_card};
use crate::color::TriColor;
use crate::font::Font;
use crate::geometry::GeometryError;
use crate::surface::{RenderContext, Surface};
use crate::text::{draw_string, Alignment};

/// Scalar inputs that accompany the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMeta<'a> {
    /// Today as `YYYY-MM-DD`.
    pub current_date: &'a str,
    /// Today's weekday name, as reported by the data source.
    pub current_day: &'a str,
    /// Wall-clock time of the data snapshot.
    pub current_time: &'a str,
    /// First day of the window as `YYYY-MM-DD`.
    pub week_start: &'a str,
}

/// What a [`Placement`] rectangle holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlacementKind {
    /// Weekday label above a column.
    Header,
    /// Day number in the top-left of a cell.
    DayBadge,
    /// One week's piece of a multi-day bar.
    MultiDaySegment,
    /// Full-height single-day card.
    Card,
    /// One-line single-day card above the overflow label.
    ReducedCard,
    /// "N more events..." label.
    Overflow,
}

/// One placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Element kind.
    pub kind: PlacementKind,
    /// Bounds on the canvas.
    pub bounds: Rectangle,
    /// Index into the rendered event slice, for event shapes.
    pub event: Option<usize>,
    /// Day cell the element belongs to. `None` for headers.
    pub day: Option<DayIndex>,
}

/// Summary of one [`render_calendar`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Highlighted day.
    pub today: DayIndex,
    /// Multi-day rows used across the window.
    pub multi_day_rows: usize,
    /// Stacking outcome per day, day 1 first.
    pub days: Vec<DayStack>,
    /// Every placed element in draw order.
    pub placements: Vec<Placement>,
    /// Set when the geometry failed validation and only a blank canvas was
    /// drawn.
    pub geometry_error: Option<GeometryError>,
}

impl RenderReport {
    /// Stacking outcome for `day`.
    pub fn day(&self, day: DayIndex) -> Option<&DayStack> {
        self.days.get(usize::from(day.get()).saturating_sub(1))
    }

    /// Placements of one kind.
    pub fn placements_of(&self, kind: PlacementKind) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.kind == kind)
    }

    /// Events summarised by overflow labels across all days.
    pub fn overflow_total(&self) -> usize {
        self.days.iter().map(|day| day.overflow).sum()
    }
}

/// Render the grid for `events` and report what was placed.
///
/// `events` must already be resolved to the 14-day window. The status bar
/// band is left untouched. Geometry that fails
/// [`GridGeometry::validate`](crate::GridGeometry::validate) leaves a blank
/// canvas and is reported in [`RenderReport::geometry_error`].
pub fn render_calendar<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    events: &[CalendarEvent],
    meta: &CalendarMeta<'_>,
) -> Result<RenderReport, S::Error> {
    let today = day_index_or_first(meta.current_date, meta.week_start);
    let anchor = CalendarDate::parse(meta.week_start).ok();
    let mut placements = Vec::new();

    ctx.clear()?;
    if let Err(err) = ctx.geometry().validate() {
        tracing::warn!(%err, "grid geometry rejected, canvas left blank");
        return Ok(RenderReport {
            today,
            multi_day_rows: 0,
            days: Vec::new(),
            placements,
            geometry_error: Some(err),
        });
    }
    draw_headers(ctx, anchor, today, &mut placements)?;
    draw_separators(ctx)?;

    let rows = RowAssignment::assign(events);
    draw_multi_day_bars(ctx, events, &rows, today, &mut placements)?;

    let mut days = Vec::with_capacity(DayIndex::all().count());
    for day in DayIndex::all() {
        draw_day_number(ctx, anchor, day, day == today, &mut placements)?;
        days.push(draw_day_cards(ctx, events, &rows, day, day == today, &mut placements)?);
    }

    let report = RenderReport {
        today,
        multi_day_rows: rows.row_count(),
        days,
        placements,
        geometry_error: None,
    };
    tracing::debug!(
        today = today.get(),
        weekday = meta.current_day,
        time = meta.current_time,
        events = events.len(),
        multi_day_rows = report.multi_day_rows,
        overflow = report.overflow_total(),
        "calendar rendered"
    );
    Ok(report)
}

// SAFETY: header offsets are derived from display-sized geometry.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
fn draw_headers<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    anchor: Option<CalendarDate>,
    today: DayIndex,
    placements: &mut Vec<Placement>,
) -> Result<(), S::Error> {
    let geometry = *ctx.geometry();
    let mut weekday = anchor.map_or(Weekday::Mon, CalendarDate::weekday);

    ctx.set_font(Font::Heading);
    let top = (geometry.header_height.saturating_sub(ctx.line_height()) / 2) as i32;
    for column in 0..DAYS_PER_WEEK {
        let cell = geometry.header_cell(column);
        let label = weekday_label(weekday);
        let color = if column == today.column() {
            TriColor::ACCENT
        } else {
            TriColor::Black
        };
        ctx.set_color(color);
        let center = cell.top_left.x + (geometry.day_width / 2) as i32;
        let width = draw_string(ctx, Point::new(center, top), label, Alignment::Center)?;

        placements.push(Placement {
            kind: PlacementKind::Header,
            bounds: Rectangle::new(
                Point::new(Alignment::Center.left_edge(center, width), top),
                Size::new(width, ctx.line_height()),
            ),
            event: None,
            day: None,
        });
        weekday = weekday.succ();
    }
    Ok(())
}

// SAFETY: canvas width is display-sized.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
fn draw_separators<S: Surface>(ctx: &mut RenderContext<'_, S>) -> Result<(), S::Error> {
    let geometry = *ctx.geometry();
    let right = geometry.width.saturating_sub(1) as i32;
    ctx.set_color(TriColor::Black);
    let header = geometry.header_height as i32;
    ctx.draw_line(Point::new(0, header), Point::new(right, header))?;
    for week in 1..WEEKS {
        let y = geometry.week_y(week);
        ctx.draw_line(Point::new(0, y), Point::new(right, y))?;
    }
    Ok(())
}

fn draw_multi_day_bars<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    events: &[CalendarEvent],
    rows: &RowAssignment<'_>,
    today: DayIndex,
    placements: &mut Vec<Placement>,
) -> Result<(), S::Error> {
    let geometry = *ctx.geometry();
    for (index, event) in events.iter().enumerate() {
        let Some(row) = rows.row_of(index) else {
            continue;
        };
        let start = event.start_day();
        let span = event.span_days();
        let to_week_end = DAYS_PER_WEEK.saturating_sub(start.column());
        let first_week = span.min(to_week_end);
        let color = if event.covers(today) {
            TriColor::ACCENT
        } else {
            TriColor::Black
        };

        let bounds = geometry.multi_day_bar(start, row, first_week);
        let is_end = span <= first_week;
        draw_multi_day_segment(ctx, bounds, Some(&event.title), true, is_end, color)?;
        placements.push(Placement {
            kind: PlacementKind::MultiDaySegment,
            bounds,
            event: Some(index),
            day: Some(start),
        });

        if span > first_week && start.week() == 0 {
            let Some(resume) = DayIndex::from_cell(1, 0) else {
                continue;
            };
            let bounds = geometry.multi_day_bar(resume, row, span.saturating_sub(first_week));
            draw_multi_day_segment(ctx, bounds, None, false, true, color)?;
            placements.push(Placement {
                kind: PlacementKind::MultiDaySegment,
                bounds,
                event: Some(index),
                day: Some(resume),
            });
        }
    }
    Ok(())
}

// SAFETY: badge offsets are a few pixels inside a display-sized cell.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
fn draw_day_number<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    anchor: Option<CalendarDate>,
    day: DayIndex,
    is_today: bool,
    placements: &mut Vec<Placement>,
) -> Result<(), S::Error> {
    let geometry = *ctx.geometry();
    let badge = geometry.badge(day);
    let number = anchor
        .and_then(|anchor| date_at(anchor, day))
        .map_or(u32::from(day.get()), CalendarDate::day);

    let mut label = heapless::String::<4>::new();
    // Day of month has at most two digits.
    let _ = write!(label, "{number}");

    if is_today {
        ctx.set_color(TriColor::ACCENT);
        ctx.fill_round_rect(badge, geometry.corner_radius)?;
        ctx.set_color(TriColor::White);
    } else {
        ctx.set_color(TriColor::Black);
    }
    ctx.set_font(Font::Heading);
    let center = badge.top_left.x + (badge.size.width / 2) as i32;
    let top = badge.top_left.y + (badge.size.height.saturating_sub(ctx.line_height()) / 2) as i32;
    draw_string(ctx, Point::new(center, top), &label, Alignment::Center)?;

    placements.push(Placement {
        kind: PlacementKind::DayBadge,
        bounds: badge,
        event: None,
        day: Some(day),
    });
    Ok(())
}

// SAFETY: card offsets accumulate at most a cell height.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
fn draw_day_cards<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    events: &[CalendarEvent],
    rows: &RowAssignment<'_>,
    day: DayIndex,
    is_today: bool,
    placements: &mut Vec<Placement>,
) -> Result<DayStack, S::Error> {
    let geometry = *ctx.geometry();
    let metrics = geometry.stack_metrics();
    let covering = rows.rows_covering(day);
    let stack = DayStack::plan(events, day, geometry.card_area_height(covering), &metrics);

    let color = if is_today {
        TriColor::ACCENT
    } else {
        TriColor::Black
    };
    let x = geometry.day_cell(day).top_left.x + geometry.event_margin as i32;
    let mut y = geometry.card_area_top(day, covering);

    for &index in &stack.full {
        let Some(event) = events.get(index) else {
            continue;
        };
        let bounds = Rectangle::new(
            Point::new(x, y),
            Size::new(geometry.card_width(), geometry.card_height),
        );
        draw_single_day_card(ctx, bounds, event, color, false)?;
        placements.push(Placement {
            kind: PlacementKind::Card,
            bounds,
            event: Some(index),
            day: Some(day),
        });
        y += geometry.card_spacing as i32;
    }

    if let Some((index, event)) = stack.reduced.and_then(|i| events.get(i).map(|e| (i, e))) {
        let bounds = Rectangle::new(
            Point::new(x, y),
            Size::new(geometry.card_width(), geometry.reduced_card_height),
        );
        draw_single_day_card(ctx, bounds, event, color, true)?;
        placements.push(Placement {
            kind: PlacementKind::ReducedCard,
            bounds,
            event: Some(index),
            day: Some(day),
        });
        y += metrics.reduced_slot() as i32;
    }

    if stack.overflow > 0 {
        let label = overflow_label(stack.overflow);
        ctx.set_color(TriColor::Black);
        ctx.set_font(Font::Small);
        let width = draw_string(ctx, Point::new(x, y), &label, Alignment::Left)?;
        placements.push(Placement {
            kind: PlacementKind::Overflow,
            bounds: Rectangle::new(Point::new(x, y), Size::new(width, ctx.line_height())),
            event: None,
            day: Some(day),
        });
    }

    Ok(stack)
}

/// `"N more events..."`.
pub fn overflow_label(hidden: usize) -> heapless::String<40> {
    // 20 digits of usize plus the suffix.
    let mut label = heapless::String::new();
    let _ = write!(label, "{hidden} more events...");
    label
}
