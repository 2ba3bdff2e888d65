//! Status-bar icons as 1bpp bitmaps.
//!
//! Rows are packed MSB first and padded to whole bytes; a set bit is drawn
//! in the requested colour, a clear bit is left untouched.

use super::Bitmap;

/// No Wi-Fi link.
pub const WIFI_OFF: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0x00, 0x00, 0x00, 0x00, 0x1F, 0xF8, 0x78, 0x1E, 0xE0, 0x07, 0x87, 0xE1,
        0x1F, 0xF8, 0x30, 0x0C, 0x21, 0x84, 0x07, 0x80, 0x0C, 0x22, 0x00, 0x14,
        0x01, 0x88, 0x03, 0x94, 0x03, 0xA2, 0x01, 0x80,
    ],
);

/// Weak signal: dot only.
pub const WIFI_1: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x80, 0x03, 0xC0, 0x03, 0xC0, 0x01, 0x80,
    ],
);

/// Fair signal.
pub const WIFI_2: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x80, 0x07, 0xE0, 0x0C, 0x30, 0x00, 0x00,
        0x01, 0x80, 0x03, 0xC0, 0x03, 0xC0, 0x01, 0x80,
    ],
);

/// Good signal.
pub const WIFI_3: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xE0,
        0x1F, 0xF8, 0x30, 0x0C, 0x21, 0x84, 0x07, 0xE0, 0x0C, 0x30, 0x00, 0x00,
        0x01, 0x80, 0x03, 0xC0, 0x03, 0xC0, 0x01, 0x80,
    ],
);

/// Excellent signal.
pub const WIFI_4: Bitmap = Bitmap::new(
    16,
    16,
    &[
        0x00, 0x00, 0x00, 0x00, 0x1F, 0xF8, 0x78, 0x1E, 0xE0, 0x07, 0x87, 0xE1,
        0x1F, 0xF8, 0x30, 0x0C, 0x21, 0x84, 0x07, 0xE0, 0x0C, 0x30, 0x00, 0x00,
        0x01, 0x80, 0x03, 0xC0, 0x03, 0xC0, 0x01, 0x80,
    ],
);

/// Empty battery outline.
pub const BATTERY_0: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x60, 0x00, 0x1E, 0x60, 0x00, 0x1E, 0x60, 0x00, 0x1E,
        0x60, 0x00, 0x1E, 0x60, 0x00, 0x1E, 0x60, 0x00, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Battery with 1 of 7 segments filled.
pub const BATTERY_1: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6C, 0x00, 0x1E, 0x6C, 0x00, 0x1E, 0x6C, 0x00, 0x1E,
        0x6C, 0x00, 0x1E, 0x6C, 0x00, 0x1E, 0x6C, 0x00, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Battery with 2 of 7 segments filled.
pub const BATTERY_2: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6F, 0x00, 0x1E, 0x6F, 0x00, 0x1E, 0x6F, 0x00, 0x1E,
        0x6F, 0x00, 0x1E, 0x6F, 0x00, 0x1E, 0x6F, 0x00, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Battery with 3 of 7 segments filled.
pub const BATTERY_3: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6F, 0xC0, 0x1E, 0x6F, 0xC0, 0x1E, 0x6F, 0xC0, 0x1E,
        0x6F, 0xC0, 0x1E, 0x6F, 0xC0, 0x1E, 0x6F, 0xC0, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Battery with 4 of 7 segments filled.
pub const BATTERY_4: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6F, 0xF0, 0x1E, 0x6F, 0xF0, 0x1E, 0x6F, 0xF0, 0x1E,
        0x6F, 0xF0, 0x1E, 0x6F, 0xF0, 0x1E, 0x6F, 0xF0, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Battery with 5 of 7 segments filled.
pub const BATTERY_5: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6F, 0xFC, 0x1E, 0x6F, 0xFC, 0x1E, 0x6F, 0xFC, 0x1E,
        0x6F, 0xFC, 0x1E, 0x6F, 0xFC, 0x1E, 0x6F, 0xFC, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Battery with 6 of 7 segments filled.
pub const BATTERY_6: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6F, 0xFF, 0x1E, 0x6F, 0xFF, 0x1E, 0x6F, 0xFF, 0x1E,
        0x6F, 0xFF, 0x1E, 0x6F, 0xFF, 0x1E, 0x6F, 0xFF, 0x1E, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Full battery.
pub const BATTERY_7: Bitmap = Bitmap::new(
    24,
    24,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8,
        0x60, 0x00, 0x18, 0x6F, 0xFF, 0xDE, 0x6F, 0xFF, 0xDE, 0x6F, 0xFF, 0xDE,
        0x6F, 0xFF, 0xDE, 0x6F, 0xFF, 0xDE, 0x6F, 0xFF, 0xDE, 0x60, 0x00, 0x18,
        0x7F, 0xFF, 0xF8, 0x7F, 0xFF, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);

/// Circular arrows next to the last refresh time.
pub const REFRESH: Bitmap = Bitmap::new(
    32,
    32,
    &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x03, 0x80, 0x00, 0x00, 0x07, 0x80, 0x00, 0x00, 0x0F, 0x80, 0x00,
        0x00, 0x3F, 0x84, 0x00, 0x00, 0x7F, 0x86, 0x00, 0x00, 0xF1, 0x8F, 0x00,
        0x01, 0xE0, 0x87, 0x80, 0x03, 0xC0, 0x03, 0xC0, 0x03, 0x80, 0x01, 0xC0,
        0x03, 0x00, 0x00, 0xC0, 0x07, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xE0,
        0x07, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xE0,
        0x07, 0x00, 0x00, 0xE0, 0x03, 0x00, 0x00, 0xC0, 0x03, 0x80, 0x01, 0xC0,
        0x03, 0xC0, 0x03, 0xC0, 0x01, 0xE1, 0x07, 0x80, 0x00, 0xF1, 0x8F, 0x00,
        0x00, 0x61, 0xFE, 0x00, 0x00, 0x21, 0xFC, 0x00, 0x00, 0x01, 0xF0, 0x00,
        0x00, 0x01, 0xE0, 0x00, 0x00, 0x01, 0xC0, 0x00, 0x00, 0x01, 0x80, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
);
