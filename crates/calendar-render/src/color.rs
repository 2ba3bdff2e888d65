//! Tri-colour e-paper pixel.

use embedded_graphics::pixelcolor::PixelColor;

/// A pixel on a black/white/red panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriColor {
    /// Paper.
    #[default]
    White,
    /// Ink.
    Black,
    /// Accent ink: today, warnings, errors.
    Red,
}

impl TriColor {
    /// Accent colour of the panel.
    pub const ACCENT: Self = Self::Red;

    /// sRGB value used for previews and screenshots.
    pub const fn to_rgb(self) -> [u8; 3] {
        match self {
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Black => [0x00, 0x00, 0x00],
            Self::Red => [0xD0, 0x10, 0x10],
        }
    }

    /// Text drawn on a filled shape of this colour.
    pub const fn contrast(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black | Self::Red => Self::White,
        }
    }
}

impl PixelColor for TriColor {
    type Raw = ();
}
