//! Full-screen error state.
//!
//! Shown instead of the grid when there is nothing valid to lay out. A
//! large accent icon sits above the middle of the canvas with one or two
//! centred lines of text below it.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::TriColor;
use crate::font::Font;
use crate::icons::ErrorIcon;
use crate::surface::{RenderContext, Surface};
use crate::text::{draw_multiline, draw_string, Alignment};

/// Edge of the square error icon.
pub const ICON_SIZE: u32 = 96;
/// Gap between the canvas middle and the icon or text.
const MIDDLE_GAP: i32 = 12;
/// Pitch of the message lines.
const LINE_SPACING: u32 = 28;
/// Horizontal space kept free around a wrapped message.
const TEXT_INSET: u32 = 200;

/// Clear the canvas and draw `icon` with a message.
///
/// Without `line2`, `line1` is wrapped onto at most two lines.
// SAFETY: offsets derive from the canvas size and ICON_SIZE.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn render_error<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    icon: ErrorIcon,
    line1: &str,
    line2: Option<&str>,
) -> Result<(), S::Error> {
    let size = ctx.size();
    let center_x = (size.width / 2) as i32;
    let middle = (size.height / 2) as i32;

    ctx.clear()?;

    let origin = Point::new(
        center_x - (ICON_SIZE / 2) as i32,
        middle - MIDDLE_GAP - ICON_SIZE as i32,
    );
    ctx.set_color(TriColor::ACCENT);
    draw_error_icon(ctx, icon, origin)?;

    ctx.set_color(TriColor::Black);
    ctx.set_font(Font::Heading);
    let top = Point::new(center_x, middle + MIDDLE_GAP);
    match line2 {
        Some(line2) => {
            draw_string(ctx, top, line1, Alignment::Center)?;
            let below = top + Point::new(0, LINE_SPACING as i32);
            draw_string(ctx, below, line2, Alignment::Center)?;
        }
        None => {
            let width = size.width.saturating_sub(TEXT_INSET);
            draw_multiline(ctx, top, line1, Alignment::Center, width, 2, LINE_SPACING)?;
        }
    }

    tracing::debug!(icon = icon.name(), "error screen rendered");
    Ok(())
}

/// Draw `icon` in the current colour into the square at `origin`.
pub fn draw_error_icon<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    icon: ErrorIcon,
    origin: Point,
) -> Result<(), S::Error> {
    match icon {
        ErrorIcon::NetworkUnavailable => draw_network_unavailable(ctx, origin),
        ErrorIcon::LowBattery => draw_low_battery(ctx, origin),
        ErrorIcon::TimeSync => draw_time_sync(ctx, origin),
    }
}

#[allow(clippy::arithmetic_side_effects)] // Safety: offsets stay inside the icon square
fn rect(origin: Point, x: i32, y: i32, width: u32, height: u32) -> Rectangle {
    Rectangle::new(origin + Point::new(x, y), Size::new(width, height))
}

/// Five-pixel stroke as parallel one-pixel lines.
#[allow(clippy::arithmetic_side_effects)] // Safety: offsets stay inside the icon square
fn thick_line<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    from: Point,
    to: Point,
) -> Result<(), S::Error> {
    for offset in -2..=2 {
        let shift = Point::new(offset, 0);
        ctx.draw_line(from + shift, to + shift)?;
    }
    Ok(())
}

/// Wi-Fi fan struck through.
#[allow(clippy::arithmetic_side_effects)] // Safety: offsets stay inside the icon square
fn draw_network_unavailable<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    origin: Point,
) -> Result<(), S::Error> {
    let accent = ctx.color();
    let hub = origin + Point::new(48, 72);

    for (radius, ring) in [(46, true), (38, false), (30, true), (22, false), (14, true), (6, false)] {
        ctx.set_color(if ring { accent } else { TriColor::White });
        ctx.fill_circle(hub, radius)?;
    }
    ctx.set_color(TriColor::White);
    ctx.fill_rect(rect(origin, 0, 73, 96, 47))?;

    ctx.set_color(accent);
    ctx.fill_circle(hub, 5)?;
    thick_line(ctx, origin + Point::new(12, 8), origin + Point::new(84, 88))
}

/// Battery outline with a single low bar.
#[allow(clippy::arithmetic_side_effects)] // Safety: offsets stay inside the icon square
fn draw_low_battery<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    origin: Point,
) -> Result<(), S::Error> {
    let accent = ctx.color();
    ctx.fill_round_rect(rect(origin, 4, 24, 80, 48), 6)?;
    ctx.fill_rect(rect(origin, 84, 38, 8, 20))?;

    ctx.set_color(TriColor::White);
    ctx.fill_rect(rect(origin, 10, 30, 68, 36))?;

    ctx.set_color(accent);
    ctx.fill_rect(rect(origin, 14, 34, 12, 28))
}

/// Clock face with hands at three o'clock.
#[allow(clippy::arithmetic_side_effects)] // Safety: offsets stay inside the icon square
fn draw_time_sync<S: Surface>(ctx: &mut RenderContext<'_, S>, origin: Point) -> Result<(), S::Error> {
    let accent = ctx.color();
    let center = origin + Point::new(48, 48);

    ctx.fill_circle(center, 46)?;
    ctx.set_color(TriColor::White);
    ctx.fill_circle(center, 39)?;

    ctx.set_color(accent);
    ctx.fill_rect(rect(origin, 46, 18, 5, 32))?;
    ctx.fill_rect(rect(origin, 46, 46, 26, 5))?;
    ctx.fill_circle(center, 5)
}
