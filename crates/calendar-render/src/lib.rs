//! Drawing layer for the two-week e-paper calendar.
//!
//! Turns the placement decisions of `calendar-core` into draw calls on a
//! [`Surface`]. Any embedded-graphics `DrawTarget<Color = TriColor>` can be
//! used through [`DrawTargetSurface`]; [`Framebuffer`] is the in-memory one.
//!
//! # Architecture
//!
//! ```text
//! render_calendar (grid)
//!     ├── headers, separators, day numbers
//!     ├── multi-day bars     ← calendar_core::RowAssignment
//!     └── single-day cards   ← calendar_core::DayStack
//! render_status_bar          ← calendar_core::status
//! render_error               (full-screen error state)
//! ```
//!
//! # Example
//!
//! ```
//! use calendar_core::CalendarEvent;
//! use calendar_render::prelude::*;
//!
//! let geometry = GridGeometry::default();
//! let mut surface = DrawTargetSurface::new(Framebuffer::with_size(geometry.size()));
//! let mut ctx = RenderContext::new(&mut surface, geometry);
//! let events = [CalendarEvent::from_parts("Dentist", "home", 2, 2, "09:00", "09:30").unwrap()];
//! let meta = CalendarMeta {
//!     current_date: "2025-01-07",
//!     current_day: "Tuesday",
//!     current_time: "08:15",
//!     week_start: "2025-01-06",
//! };
//! let report = render_calendar(&mut ctx, &events, &meta).unwrap();
//! assert_eq!(report.today.get(), 2);
//! assert_eq!(report.placements_of(PlacementKind::Card).count(), 1);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

extern crate alloc;

pub mod cards;
pub mod color;
pub mod error_screen;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod grid;
pub mod icons;
pub mod status_bar;
pub mod surface;
pub mod text;

pub use color::TriColor;
pub use error_screen::render_error;
pub use font::Font;
pub use framebuffer::Framebuffer;
pub use geometry::{GeometryError, GridGeometry};
pub use grid::{render_calendar, CalendarMeta, Placement, PlacementKind, RenderReport};
pub use icons::{Bitmap, ErrorIcon};
pub use status_bar::{render_status_bar, StatusInfo};
pub use surface::{DrawTargetSurface, RenderContext, Surface};
pub use text::{draw_multiline, draw_string, Alignment};

pub mod prelude {
    //! Common imports for rendering a calendar frame.
    pub use crate::color::TriColor;
    pub use crate::error_screen::render_error;
    pub use crate::font::Font;
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{GeometryError, GridGeometry};
    pub use crate::grid::{render_calendar, CalendarMeta, Placement, PlacementKind, RenderReport};
    pub use crate::icons::ErrorIcon;
    pub use crate::status_bar::{render_status_bar, StatusInfo};
    pub use crate::surface::{DrawTargetSurface, RenderContext, Surface};
    pub use crate::text::Alignment;
}
