//! Rendering surface boundary and the per-render drawing context.
//!
//! [`Surface`] is the capability the layout draws through: a handful of
//! filled primitives, lines, 1bpp bitmaps and text, plus text measurement.
//! [`DrawTargetSurface`] provides it for any embedded-graphics
//! [`DrawTarget`]; tests substitute a recording surface.
//!
//! [`RenderContext`] carries the surface together with the current colour
//! and font for one render call. Nothing is global, so two renders never
//! share drawing state.

use calendar_core::TextMeasure;
use embedded_graphics::{
    mono_font::MonoTextStyle,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
    Pixel,
};

use crate::color::TriColor;
use crate::font::Font;
use crate::geometry::GridGeometry;
use crate::icons::Bitmap;

/// Drawing capability consumed by the calendar layout.
///
/// Text origins are the top-left corner of the line box.
pub trait Surface {
    /// Error reported by the underlying device.
    type Error;

    /// Canvas size in pixels.
    fn size(&self) -> Size;

    /// Pixel size of `text` in `font`.
    fn measure_text(&self, text: &str, font: Font) -> Size {
        font.measure(text)
    }

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rectangle, color: TriColor) -> Result<(), Self::Error>;

    /// Fill a rectangle with rounded corners.
    fn fill_round_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: TriColor,
    ) -> Result<(), Self::Error>;

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: u32, color: TriColor)
        -> Result<(), Self::Error>;

    /// Draw a one-pixel line.
    fn draw_line(&mut self, from: Point, to: Point, color: TriColor) -> Result<(), Self::Error>;

    /// Draw the set pixels of `bitmap` with its top-left at `origin`.
    fn draw_bitmap(
        &mut self,
        origin: Point,
        bitmap: &Bitmap,
        color: TriColor,
    ) -> Result<(), Self::Error>;

    /// Draw one line of text.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: Font,
        color: TriColor,
    ) -> Result<(), Self::Error>;

    /// Fill the whole canvas.
    fn clear(&mut self, color: TriColor) -> Result<(), Self::Error> {
        let area = Rectangle::new(Point::zero(), self.size());
        self.fill_rect(area, color)
    }
}

/// [`Surface`] over any embedded-graphics [`DrawTarget`].
#[derive(Debug, Default)]
pub struct DrawTargetSurface<D> {
    target: D,
}

impl<D> DrawTargetSurface<D> {
    /// Wrap a draw target.
    pub const fn new(target: D) -> Self {
        Self { target }
    }

    /// The wrapped target.
    pub const fn target(&self) -> &D {
        &self.target
    }

    /// The wrapped target, mutably.
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwrap the target.
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Surface for DrawTargetSurface<D>
where
    D: DrawTarget<Color = TriColor>,
{
    type Error = D::Error;

    fn size(&self) -> Size {
        self.target.bounding_box().size
    }

    fn fill_rect(&mut self, rect: Rectangle, color: TriColor) -> Result<(), Self::Error> {
        self.target.fill_solid(&rect, color)
    }

    fn fill_round_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        let diameter = radius.saturating_mul(2).saturating_add(1);
        Circle::with_center(center, diameter)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn draw_line(&mut self, from: Point, to: Point, color: TriColor) -> Result<(), Self::Error> {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
    }

    #[allow(clippy::arithmetic_side_effects)] // Safety: icon offsets are at most 32 px
    fn draw_bitmap(
        &mut self,
        origin: Point,
        bitmap: &Bitmap,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        self.target
            .draw_iter(bitmap.points().map(|offset| Pixel(origin + offset, color)))
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: Font,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(font.mono(), color);
        Text::with_baseline(text, origin, style, Baseline::Top).draw(&mut self.target)?;
        Ok(())
    }
}

/// Surface plus current colour and font for one render call.
pub struct RenderContext<'a, S: Surface> {
    surface: &'a mut S,
    geometry: GridGeometry,
    color: TriColor,
    font: Font,
}

impl<'a, S: Surface> RenderContext<'a, S> {
    /// Start drawing on `surface` with black body text.
    pub fn new(surface: &'a mut S, geometry: GridGeometry) -> Self {
        Self {
            surface,
            geometry,
            color: TriColor::Black,
            font: Font::Body,
        }
    }

    /// Grid geometry for this render.
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Current drawing colour.
    pub const fn color(&self) -> TriColor {
        self.color
    }

    /// Current font.
    pub const fn font(&self) -> Font {
        self.font
    }

    /// Change the drawing colour.
    pub fn set_color(&mut self, color: TriColor) {
        self.color = color;
    }

    /// Change the font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Canvas size.
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// Width of `text` in the current font.
    pub fn text_width(&self, text: &str) -> u32 {
        self.surface.measure_text(text, self.font).width
    }

    /// Line height of the current font.
    pub fn line_height(&self) -> u32 {
        self.surface.measure_text("", self.font).height
    }

    /// Fill the canvas with paper colour.
    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.surface.clear(TriColor::White)
    }

    /// Fill `rect` in the current colour.
    pub fn fill_rect(&mut self, rect: Rectangle) -> Result<(), S::Error> {
        self.surface.fill_rect(rect, self.color)
    }

    /// Fill a rounded `rect` in the current colour.
    pub fn fill_round_rect(&mut self, rect: Rectangle, radius: u32) -> Result<(), S::Error> {
        self.surface.fill_round_rect(rect, radius, self.color)
    }

    /// Fill a circle in the current colour.
    pub fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), S::Error> {
        self.surface.fill_circle(center, radius, self.color)
    }

    /// Draw a line in the current colour.
    pub fn draw_line(&mut self, from: Point, to: Point) -> Result<(), S::Error> {
        self.surface.draw_line(from, to, self.color)
    }

    /// Draw a bitmap in the current colour.
    pub fn draw_bitmap(&mut self, origin: Point, bitmap: &Bitmap) -> Result<(), S::Error> {
        self.surface.draw_bitmap(origin, bitmap, self.color)
    }

    /// Draw text in the current font and colour.
    pub fn draw_text(&mut self, origin: Point, text: &str) -> Result<(), S::Error> {
        self.surface.draw_text(origin, text, self.font, self.color)
    }
}

impl<S: Surface> TextMeasure for RenderContext<'_, S> {
    fn text_width(&self, text: &str) -> u32 {
        RenderContext::text_width(self, text)
    }
}
