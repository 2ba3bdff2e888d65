//! Icons used by the status bar and the error screen.

mod bitmaps;

pub use bitmaps::*;

use calendar_core::status::{BatteryLevel, SignalStrength};
use embedded_graphics::prelude::{Point, Size};

/// A 1bpp monochrome bitmap, rows packed MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: &'static [u8],
}

impl Bitmap {
    /// Wrap packed bitmap data.
    pub const fn new(width: u32, height: u32, data: &'static [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Width and height in pixels.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bytes per packed row.
    pub const fn stride(&self) -> u32 {
        self.width.div_ceil(8)
    }

    /// `true` if the pixel at `(x, y)` is set. Out-of-range pixels are clear.
    // SAFETY: x < width and y < height are checked first, so y * stride + x / 8
    // is bounded by the bitmap's byte length (at most a few hundred bytes).
    #[allow(clippy::arithmetic_side_effects)]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = (y * self.stride() + x / 8) as usize;
        let mask = 0x80u8 >> (x % 8);
        self.data.get(index).is_some_and(|byte| byte & mask != 0)
    }

    /// Offsets of every set pixel, row by row.
    // Icon dimensions are tiny, so u32 -> i32 never wraps.
    #[allow(clippy::cast_possible_wrap)]
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.is_set(x, y))
                .map(move |x| Point::new(x as i32, y as i32))
        })
    }
}

/// Wi-Fi icon for a link quality.
pub const fn wifi_icon(signal: SignalStrength) -> &'static Bitmap {
    match signal {
        SignalStrength::Disconnected => &WIFI_OFF,
        SignalStrength::Excellent => &WIFI_4,
        SignalStrength::Good => &WIFI_3,
        SignalStrength::Fair => &WIFI_2,
        SignalStrength::Poor => &WIFI_1,
    }
}

/// Battery icon for a charge level.
pub const fn battery_icon(level: BatteryLevel) -> &'static Bitmap {
    match level {
        BatteryLevel::Empty => &BATTERY_0,
        BatteryLevel::Bars1 => &BATTERY_1,
        BatteryLevel::Bars2 => &BATTERY_2,
        BatteryLevel::Bars3 => &BATTERY_3,
        BatteryLevel::Bars4 => &BATTERY_4,
        BatteryLevel::Bars5 => &BATTERY_5,
        BatteryLevel::Bars6 => &BATTERY_6,
        BatteryLevel::Full => &BATTERY_7,
    }
}

/// Large icon shown above a full-screen error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorIcon {
    /// Wi-Fi or the calendar server could not be reached.
    NetworkUnavailable,
    /// Battery too low to refresh.
    LowBattery,
    /// Clock could not be synchronised.
    TimeSync,
}

impl ErrorIcon {
    /// Short name used in logs and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "network",
            Self::LowBattery => "battery",
            Self::TimeSync => "time",
        }
    }
}
