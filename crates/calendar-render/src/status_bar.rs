//! Status bar along the bottom edge.
//!
//! Laid out right to left: battery, Wi-Fi, last refresh.

use core::fmt::Write as _;

use calendar_core::{BatteryLevel, PowerThresholds, SignalStrength};
use embedded_graphics::prelude::{Point, Size};

use crate::color::TriColor;
use crate::font::Font;
use crate::icons::{battery_icon, wifi_icon, Bitmap, REFRESH};
use crate::surface::{RenderContext, Surface};
use crate::text::{draw_string, Alignment};

/// Gap between a text block and the next icon.
const GAP: i32 = 2;
/// Gap between the items.
const ITEM_GAP: i32 = 10;

/// Device state shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    /// Time of the last successful refresh.
    pub refresh_time: &'a str,
    /// Wi-Fi RSSI in dBm, `0` when disconnected.
    pub rssi: i32,
    /// Battery voltage in millivolts. `None` hides the battery read-out.
    pub battery_mv: Option<u32>,
    /// Battery curve and warning level.
    pub power: PowerThresholds,
}

/// `"87% (4.02v)"`, voltage rounded to 10 mV.
pub fn battery_label(mv: u32, power: &PowerThresholds) -> heapless::String<24> {
    let centivolts = mv.saturating_add(5) / 10;
    let mut label = heapless::String::new();
    // Fits for any u32 millivolt reading.
    let _ = write!(
        label,
        "{}% ({}.{:02}v)",
        power.percent(mv),
        centivolts / 100,
        centivolts % 100
    );
    label
}

/// Wi-Fi description, with the RSSI when connected.
pub fn wifi_label(rssi: i32) -> heapless::String<32> {
    let signal = SignalStrength::from_rssi(rssi);
    let mut label = heapless::String::new();
    // Longest is "No Connection" or "Excellent (-2147483648dBm)".
    let _ = match signal {
        SignalStrength::Disconnected => write!(label, "{}", signal.description()),
        _ => write!(label, "{} ({rssi}dBm)", signal.description()),
    };
    label
}

/// Draw the status bar into the band reserved by the geometry.
///
/// Nothing is drawn when the geometry fails validation.
// SAFETY: all offsets are display-sized and pos only moves left across a
// display-width band.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
pub fn render_status_bar<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    info: &StatusInfo<'_>,
) -> Result<(), S::Error> {
    if let Err(err) = ctx.geometry().validate() {
        tracing::warn!(%err, "status bar skipped, geometry rejected");
        return Ok(());
    }
    let band = ctx.geometry().status_bar();
    ctx.set_color(TriColor::White);
    ctx.fill_rect(band)?;

    ctx.set_font(Font::Small);
    let middle = band.top_left.y + (band.size.height / 2) as i32;
    let text_top = middle - (ctx.line_height() / 2) as i32;
    let mut pos = band.top_left.x + band.size.width as i32 - GAP;

    if let Some(mv) = info.battery_mv {
        let color = if info.power.is_low(mv) {
            TriColor::ACCENT
        } else {
            TriColor::Black
        };
        let label = battery_label(mv, &info.power);
        let icon = battery_icon(BatteryLevel::from_percent(info.power.percent(mv)));
        ctx.set_color(color);
        let width = draw_string(ctx, Point::new(pos, text_top), &label, Alignment::Right)?;
        pos -= width as i32 + GAP;
        pos = draw_icon_left_of(ctx, pos, middle, icon)? - ITEM_GAP;
    }

    let signal = SignalStrength::from_rssi(info.rssi);
    let color = if signal.needs_attention() {
        TriColor::ACCENT
    } else {
        TriColor::Black
    };
    let label = wifi_label(info.rssi);
    ctx.set_color(color);
    let width = draw_string(ctx, Point::new(pos, text_top), &label, Alignment::Right)?;
    pos -= width as i32 + GAP;
    pos = draw_icon_left_of(ctx, pos, middle, wifi_icon(signal))? - ITEM_GAP;

    ctx.set_color(TriColor::Black);
    let width = draw_string(
        ctx,
        Point::new(pos, text_top),
        info.refresh_time,
        Alignment::Right,
    )?;
    pos -= width as i32 + GAP;
    draw_icon_left_of(ctx, pos, middle, &REFRESH)?;
    Ok(())
}

/// Draw `icon` ending at `right`, vertically centred on `middle`. Returns its
/// left edge.
// SAFETY: icon sizes are at most 32 px.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
fn draw_icon_left_of<S: Surface>(
    ctx: &mut RenderContext<'_, S>,
    right: i32,
    middle: i32,
    icon: &Bitmap,
) -> Result<i32, S::Error> {
    let Size { width, height } = icon.size();
    let left = right - width as i32;
    ctx.draw_bitmap(Point::new(left, middle - (height / 2) as i32), icon)?;
    Ok(left)
}
