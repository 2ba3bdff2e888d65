//! Draw-call recorder.

use std::convert::Infallible;

use calendar_render::icons::Bitmap;
use calendar_render::{Font, Surface, TriColor};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// `fill_rect`.
    FillRect {
        /// Area.
        rect: Rectangle,
        /// Colour.
        color: TriColor,
    },
    /// `fill_round_rect`.
    FillRoundRect {
        /// Area.
        rect: Rectangle,
        /// Corner radius.
        radius: u32,
        /// Colour.
        color: TriColor,
    },
    /// `fill_circle`.
    FillCircle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: u32,
        /// Colour.
        color: TriColor,
    },
    /// `draw_line`.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Colour.
        color: TriColor,
    },
    /// `draw_bitmap`.
    Bitmap {
        /// Top-left corner.
        origin: Point,
        /// Bitmap size.
        size: Size,
        /// Colour.
        color: TriColor,
    },
    /// `draw_text`.
    Text {
        /// Top-left corner.
        origin: Point,
        /// Drawn string.
        text: String,
        /// Font.
        font: Font,
        /// Colour.
        color: TriColor,
    },
}

impl DrawOp {
    /// Colour the call drew with.
    pub fn color(&self) -> TriColor {
        match self {
            Self::FillRect { color, .. }
            | Self::FillRoundRect { color, .. }
            | Self::FillCircle { color, .. }
            | Self::Line { color, .. }
            | Self::Bitmap { color, .. }
            | Self::Text { color, .. } => *color,
        }
    }

    /// The string, for text calls.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// [`Surface`] that records every call instead of drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Recorder reporting `size` as its canvas.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Calls so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the recorded calls.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Every drawn string, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(DrawOp::text)
    }

    /// `true` if some text call drew exactly `text`.
    pub fn drew_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rectangle, color: TriColor) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::FillRect { rect, color });
        Ok(())
    }

    fn fill_round_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::FillRoundRect {
            rect,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: u32,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: TriColor) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Line { from, to, color });
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        origin: Point,
        bitmap: &Bitmap,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Bitmap {
            origin,
            size: bitmap.size(),
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: Font,
        color: TriColor,
    ) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            font,
            color,
        });
        Ok(())
    }
}
