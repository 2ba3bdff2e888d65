//! Aligned and wrapped text.

use calendar_core::wrap;
use embedded_graphics::prelude::Point;

use crate::surface::{RenderContext, Surface};

/// Horizontal anchor of a string relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    /// Text starts at x.
    #[default]
    Left,
    /// Text is centred on x.
    Center,
    /// Text ends at x.
    Right,
}

impl Alignment {
    /// Left edge for text of `width` anchored at `x`.
    // Widths are bounded by the canvas, far below i32::MAX.
    #[allow(clippy::cast_possible_wrap)]
    pub fn left_edge(self, x: i32, width: u32) -> i32 {
        let width = width as i32;
        match self {
            Self::Left => x,
            Self::Center => x.saturating_sub(width / 2),
            Self::Right => x.saturating_sub(width),
        }
    }
}

/// Draw `text` in the context's font and colour, aligned on `anchor.x`.
///
/// Returns the drawn width.
pub fn draw_string<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    anchor: Point,
    text: &str,
    alignment: Alignment,
) -> Result<u32, S::Error> {
    let width = ctx.text_width(text);
    let origin = Point::new(alignment.left_edge(anchor.x, width), anchor.y);
    ctx.draw_text(origin, text)?;
    Ok(width)
}

/// Wrap `text` to `max_width` and draw up to `max_lines` lines,
/// `line_spacing` pixels apart.
///
/// Returns the number of lines drawn.
pub fn draw_multiline<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    anchor: Point,
    text: &str,
    alignment: Alignment,
    max_width: u32,
    max_lines: usize,
    line_spacing: u32,
) -> Result<usize, S::Error> {
    let lines = wrap(text, max_width, max_lines, &*ctx);
    let step = i32::try_from(line_spacing).unwrap_or(i32::MAX);
    let mut y = anchor.y;
    for line in &lines {
        draw_string(ctx, Point::new(anchor.x, y), line, alignment)?;
        y = y.saturating_add(step);
    }
    Ok(lines.len())
}
