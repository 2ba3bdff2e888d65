//! In-memory tri-colour framebuffer.
//!
//! Holds one [`TriColor`] per pixel, row-major. Implements `DrawTarget`, so
//! wrapping it in a [`DrawTargetSurface`](crate::surface::DrawTargetSurface)
//! gives an off-screen canvas for previews and tests.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Size};
use embedded_graphics::Pixel;

use crate::color::TriColor;

/// Row-major tri-colour pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<TriColor>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Blank white framebuffer.
    // SAFETY: width * height is a pixel count bounded by display dimensions (~800×480),
    // so it fits in u32 and usize.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            pixels: vec![TriColor::White; size],
            width,
            height,
        }
    }

    /// Framebuffer sized for `size`.
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[TriColor] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, `None` outside the buffer.
    // SAFETY: x < width and y < height are checked first; y * width + x < width * height.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<TriColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Set the pixel at `(x, y)`. Writes outside the buffer are dropped.
    // SAFETY: x < width and y < height are checked first; y * width + x < width * height.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: TriColor) {
        if x >= self.width || y >= self.height {
            return;
        }
        if let Some(pixel) = self.pixels.get_mut((y * self.width + x) as usize) {
            *pixel = color;
        }
    }

    /// Fill every pixel.
    pub fn fill(&mut self, color: TriColor) {
        self.pixels.fill(color);
    }

    /// Packed 8-bit RGB, three bytes per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| color.to_rgb()).collect()
    }
}

impl DrawTarget for Framebuffer {
    type Color = TriColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn starts_white() {
        let fb = Framebuffer::new(10, 4);
        assert_eq!(fb.pixels().len(), 40);
        assert!(fb.pixels().iter().all(|&p| p == TriColor::White));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pixel(4, 0, TriColor::Black);
        assert_eq!(fb.pixel_at(4, 0), None);
        Pixel(Point::new(-1, 2), TriColor::Red).draw(&mut fb).unwrap();
        assert!(fb.pixels().iter().all(|&p| p == TriColor::White));
    }

    #[test]
    fn primitives_land_in_buffer() {
        let mut fb = Framebuffer::new(8, 8);
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(TriColor::Red))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.pixel_at(2, 2), Some(TriColor::Red));
        assert_eq!(fb.pixel_at(4, 4), Some(TriColor::Red));
        assert_eq!(fb.pixel_at(5, 5), Some(TriColor::White));
        assert_eq!(fb.to_rgb8().len(), 8 * 8 * 3);
    }
}
