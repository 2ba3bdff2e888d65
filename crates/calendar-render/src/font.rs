//! Monospace fonts used by the calendar.

use embedded_graphics::mono_font::{
    ascii::{FONT_10X20, FONT_6X10, FONT_7X13},
    MonoFont,
};
use embedded_graphics::prelude::Size;

/// Font selection. All fonts are fixed-width, so measuring is arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 6x10: card time line, overflow count, status bar.
    Small,
    /// 7x13: event titles.
    #[default]
    Body,
    /// 10x20: weekday headers, day numbers, error messages.
    Heading,
}

impl Font {
    /// The embedded-graphics font backing this selection.
    pub const fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Self::Small => &FONT_6X10,
            Self::Body => &FONT_7X13,
            Self::Heading => &FONT_10X20,
        }
    }

    /// Height of one line of text.
    pub const fn line_height(self) -> u32 {
        self.mono().character_size.height
    }

    /// Advance per character, including spacing.
    // SAFETY: glyph widths and spacing are single-digit pixel counts.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn advance(self) -> u32 {
        let font = self.mono();
        font.character_size.width + font.character_spacing
    }

    /// Bounding size of `text` on a single line.
    pub fn measure(self, text: &str) -> Size {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        Size::new(chars.saturating_mul(self.advance()), self.line_height())
    }
}
