//! Desktop preview of the e-paper calendar.
//!
//! Loads a calendar snapshot (or the built-in sample), resolves its events
//! onto the 14-day window and renders the same frame the panel would show
//! into a PNG.

pub mod ingest;
pub mod sample;
pub mod snapshot;

use std::path::Path;

use anyhow::{Context, Result};
use calendar_core::PowerThresholds;
use calendar_render::prelude::*;

pub use ingest::{resolve_event, resolve_events, Resolved};
pub use snapshot::{RawEvent, Snapshot};

/// What to put on the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Calendar grid with the status bar.
    Calendar {
        /// Wi-Fi RSSI in dBm, `0` for disconnected.
        rssi: i32,
        /// Battery voltage, `None` hides the read-out.
        battery_mv: Option<u32>,
    },
    /// Full-screen error state.
    Error {
        /// Icon above the message.
        icon: ErrorIcon,
        /// First (or only) message line.
        line1: String,
        /// Second line. `None` wraps `line1` instead.
        line2: Option<String>,
    },
}

/// Read geometry JSON. Missing fields keep the 800x480 defaults.
pub fn load_geometry(path: &Path) -> Result<GridGeometry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read geometry {}", path.display()))?;
    let geometry: GridGeometry = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse geometry {}", path.display()))?;
    geometry.validate().context("geometry does not fit its canvas")?;
    Ok(geometry)
}

/// Render `screen` for `snapshot` into a fresh framebuffer.
pub fn render_preview(
    snapshot: &Snapshot,
    geometry: GridGeometry,
    screen: &Screen,
) -> Result<Framebuffer> {
    geometry.validate().context("geometry does not fit its canvas")?;
    let mut surface = DrawTargetSurface::new(Framebuffer::with_size(geometry.size()));
    {
        let mut ctx = RenderContext::new(&mut surface, geometry);
        match screen {
            Screen::Calendar { rssi, battery_mv } => {
                let resolved = resolve_events(snapshot)?;
                let meta = CalendarMeta {
                    current_date: &snapshot.current_date,
                    current_day: &snapshot.current_day,
                    current_time: &snapshot.current_time,
                    week_start: &snapshot.week_start,
                };
                let report = render_calendar(&mut ctx, &resolved.events, &meta)
                    .context("calendar render failed")?;
                tracing::info!(
                    today = report.today.get(),
                    multi_day_rows = report.multi_day_rows,
                    placements = report.placements.len(),
                    hidden = report.overflow_total(),
                    "calendar rendered"
                );

                let info = StatusInfo {
                    refresh_time: snapshot.refresh_time(),
                    rssi: *rssi,
                    battery_mv: *battery_mv,
                    power: PowerThresholds::default(),
                };
                render_status_bar(&mut ctx, &info).context("status bar render failed")?;
            }
            Screen::Error { icon, line1, line2 } => {
                render_error(&mut ctx, *icon, line1, line2.as_deref())
                    .context("error screen render failed")?;
                tracing::info!(icon = icon.name(), "error screen rendered");
            }
        }
    }
    Ok(surface.into_inner())
}

/// Encode `framebuffer` as an RGB PNG at `path`.
pub fn write_png(framebuffer: &Framebuffer, path: &Path) -> Result<()> {
    let image = image::RgbImage::from_raw(
        framebuffer.width(),
        framebuffer.height(),
        framebuffer.to_rgb8(),
    )
    .context("framebuffer size does not match its pixel data")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "preview written");
    Ok(())
}
