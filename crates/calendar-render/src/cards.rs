//! Event shapes: single-day cards and multi-day bar segments.

use core::fmt::Write as _;

use calendar_core::CalendarEvent;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::TriColor;
use crate::font::Font;
use crate::surface::{RenderContext, Surface};
use crate::text::{draw_multiline, draw_string, Alignment};

/// Label shown for events without a start time.
pub const ALL_DAY_LABEL: &str = "All day";

/// Offset of the time line inside a card.
const TIME_Y: i32 = 3;
/// Offset of the first title line inside a card.
const TITLE_Y: i32 = 14;
/// Pitch between title lines.
const TITLE_LINE_SPACING: u32 = 14;

/// `HH:MM-HH:MM`, `HH:MM` without an end, or [`ALL_DAY_LABEL`].
pub fn time_label(event: &CalendarEvent) -> heapless::String<16> {
    let mut label = heapless::String::new();
    // At most 11 ASCII characters, always within capacity.
    let _ = match (event.start_time, event.end_time) {
        (Some(start), Some(end)) => write!(label, "{start}-{end}"),
        (Some(start), None) => write!(label, "{start}"),
        (None, _) => label.push_str(ALL_DAY_LABEL).map_err(|_| core::fmt::Error),
    };
    label
}

/// Fill an event outline, rounding only the requested ends.
// SAFETY: rect dimensions are card-sized, so halving and re-adding stays in range.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn fill_event_shape<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    rect: Rectangle,
    round_left: bool,
    round_right: bool,
) -> Result<(), S::Error> {
    let radius = ctx.geometry().corner_radius;
    if !round_left && !round_right {
        return ctx.fill_rect(rect);
    }
    ctx.fill_round_rect(rect, radius)?;
    let half = rect.size.width / 2;
    let square = Size::new(rect.size.width - half, rect.size.height);
    if !round_left {
        ctx.fill_rect(Rectangle::new(rect.top_left, square))?;
    }
    if !round_right {
        let right = rect.top_left + Point::new(half as i32, 0);
        ctx.fill_rect(Rectangle::new(right, square))?;
    }
    Ok(())
}

/// Draw one single-day card: time line, then the title on two lines, or
/// one line when `reduced`.
// SAFETY: margins are a few pixels inside a card-sized rectangle.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn draw_single_day_card<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    rect: Rectangle,
    event: &CalendarEvent,
    color: TriColor,
    reduced: bool,
) -> Result<(), S::Error> {
    let margin = ctx.geometry().text_margin;
    let text_x = rect.top_left.x + margin as i32;

    ctx.set_color(color);
    fill_event_shape(ctx, rect, true, true)?;

    ctx.set_color(color.contrast());
    ctx.set_font(Font::Small);
    let time = time_label(event);
    draw_string(
        ctx,
        Point::new(text_x, rect.top_left.y + TIME_Y),
        &time,
        Alignment::Left,
    )?;

    ctx.set_font(Font::Body);
    let lines = if reduced { 1 } else { 2 };
    draw_multiline(
        ctx,
        Point::new(text_x, rect.top_left.y + TITLE_Y),
        &event.title,
        Alignment::Left,
        rect.size.width.saturating_sub(2 * margin),
        lines,
        TITLE_LINE_SPACING,
    )?;
    Ok(())
}

/// Draw one week's segment of a multi-day bar.
///
/// `is_start`/`is_end` round the matching end; `title` is truncated to one
/// line inside the segment.
// SAFETY: margins are a few pixels inside a bar-sized rectangle.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn draw_multi_day_segment<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    rect: Rectangle,
    title: Option<&str>,
    is_start: bool,
    is_end: bool,
    color: TriColor,
) -> Result<(), S::Error> {
    ctx.set_color(color);
    fill_event_shape(ctx, rect, is_start, is_end)?;

    let Some(title) = title else {
        return Ok(());
    };
    let margin = ctx.geometry().text_margin;
    ctx.set_color(color.contrast());
    ctx.set_font(Font::Body);
    let inset = (rect.size.height.saturating_sub(ctx.line_height()) / 2) as i32;
    draw_multiline(
        ctx,
        rect.top_left + Point::new(margin as i32, inset),
        title,
        Alignment::Left,
        rect.size.width.saturating_sub(2 * margin),
        1,
        0,
    )?;
    Ok(())
}
