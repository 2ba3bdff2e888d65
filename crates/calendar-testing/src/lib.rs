//! Calendar rendering test utilities.
//!
//! Headless canvas with pixel assertions, a component registry fed from
//! [`RenderReport`]s, PNG screenshots and golden comparison, plus a
//! [`RecordingSurface`] that captures the draw-call sequence.
//!
//! # Quick start
//!
//! ```
//! use calendar_core::CalendarEvent;
//! use calendar_render::prelude::*;
//! use calendar_testing::TestCanvas;
//!
//! let geometry = GridGeometry::default();
//! let mut canvas = TestCanvas::with_geometry(&geometry);
//! let events = [CalendarEvent::from_parts("Standup", "work", 1, 1, "09:00", "09:15").unwrap()];
//! let meta = CalendarMeta {
//!     current_date: "2025-01-06",
//!     current_day: "Monday",
//!     current_time: "07:00",
//!     week_start: "2025-01-06",
//! };
//! let report = {
//!     let mut ctx = RenderContext::new(&mut *canvas, geometry);
//!     render_calendar(&mut ctx, &events, &meta).unwrap()
//! };
//! canvas.register_report(&report);
//!
//! canvas.assert_has_component("card-1-0").unwrap();
//! let badge = canvas.query_by_test_id("badge-1").unwrap().bounds();
//! canvas.assert_region_contains(badge, TriColor::Red).unwrap();
//! ```
//!
//! # Golden screenshot testing
//!
//! ```no_run
//! # use calendar_testing::TestCanvas;
//! # let canvas = TestCanvas::new(100, 100);
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! canvas.assert_matches_golden("tests/golden/fortnight.png", 0).unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

mod recording;

use std::path::Path;

use calendar_render::{
    DrawTargetSurface, Framebuffer, GridGeometry, PlacementKind, RenderReport, TriColor,
};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use image::RgbImage;

pub use recording::{DrawOp, RecordingSurface};

// ─────────────────────────────────────────────────────────────────────────────
// ComponentRef
// ─────────────────────────────────────────────────────────────────────────────

/// A placed element registered in the [`TestCanvas`]'s component registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    /// The test identifier, e.g. `"card-3-0"` or `"badge-9"`.
    pub test_id: String,
    /// Element category, e.g. `"Card"` or `"Header"`.
    pub component_type: String,
    /// Top-left corner in canvas coordinates.
    pub position: (i32, i32),
    /// Width × height in pixels.
    pub size: (u32, u32),
}

impl ComponentRef {
    /// The bounding rectangle as an `embedded-graphics` [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the component's bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// Registry name of a placement kind.
pub const fn kind_name(kind: PlacementKind) -> &'static str {
    match kind {
        PlacementKind::Header => "Header",
        PlacementKind::DayBadge => "DayBadge",
        PlacementKind::MultiDaySegment => "MultiDaySegment",
        PlacementKind::Card => "Card",
        PlacementKind::ReducedCard => "ReducedCard",
        PlacementKind::Overflow => "Overflow",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Headless tri-colour canvas for rendering tests.
///
/// Derefs to [`DrawTargetSurface<Framebuffer>`], so it can be handed
/// straight to a [`RenderContext`](calendar_render::RenderContext).
pub struct TestCanvas {
    inner: DrawTargetSurface<Framebuffer>,
    components: Vec<ComponentRef>,
}

impl TestCanvas {
    /// Blank white canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: DrawTargetSurface::new(Framebuffer::new(width, height)),
            components: Vec::new(),
        }
    }

    /// Canvas sized for `geometry`.
    pub fn with_geometry(geometry: &GridGeometry) -> Self {
        Self::new(geometry.width, geometry.height)
    }

    /// The underlying framebuffer.
    pub fn framebuffer(&self) -> &Framebuffer {
        self.inner.target()
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Colour at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<TriColor> {
        self.framebuffer().pixel_at(x, y)
    }

    fn pixel_at_point(&self, point: Point) -> Option<TriColor> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        self.pixel_at(x, y)
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected colour.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: TriColor) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_pixel({x}, {y}): expected {expected:?}, got {actual:?}"
            ))
        }
    }

    /// Assert that every pixel inside `rect` has the given colour.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: TriColor) -> Result<(), String> {
        for point in rect.points() {
            match self.pixel_at_point(point) {
                Some(actual) if actual == color => {}
                actual => {
                    return Err(format!(
                        "assert_region_uniform failed in {rect:?}: {point:?} is {actual:?}, expected {color:?}"
                    ))
                }
            }
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel of the given colour.
    pub fn assert_region_contains(&self, rect: Rectangle, color: TriColor) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no {color:?} pixel found in {rect:?}"
            ))
        }
    }

    /// Count pixels in `rect` of the given colour.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: TriColor) -> usize {
        rect.points()
            .filter(|&point| self.pixel_at_point(point) == Some(color))
            .count()
    }

    // ── Component registry ───────────────────────────────────────────────────

    /// Register (or update) a component by test ID.
    pub fn register_component(
        &mut self,
        test_id: &str,
        component_type: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) {
        if let Some(existing) = self.components.iter_mut().find(|c| c.test_id == test_id) {
            existing.component_type = component_type.to_string();
            existing.position = position;
            existing.size = size;
        } else {
            self.components.push(ComponentRef {
                test_id: test_id.to_string(),
                component_type: component_type.to_string(),
                position,
                size,
            });
        }
    }

    /// Register every placement of a render.
    ///
    /// Test IDs: `header-{column}`, `badge-{day}`, `segment-{event}-{n}`
    /// (n-th week piece of a bar), `card-{day}-{event}`,
    /// `reduced-{day}-{event}`, `overflow-{day}`.
    pub fn register_report(&mut self, report: &RenderReport) {
        let mut headers = 0_usize;
        for placement in &report.placements {
            let day = placement.day.map_or(0, |d| d.get());
            let event = placement.event.unwrap_or_default();
            let test_id = match placement.kind {
                PlacementKind::Header => {
                    let id = format!("header-{headers}");
                    headers = headers.saturating_add(1);
                    id
                }
                PlacementKind::DayBadge => format!("badge-{day}"),
                PlacementKind::MultiDaySegment => {
                    let prefix = format!("segment-{event}-");
                    let n = self
                        .components
                        .iter()
                        .filter(|c| c.test_id.starts_with(&prefix))
                        .count();
                    format!("{prefix}{n}")
                }
                PlacementKind::Card => format!("card-{day}-{event}"),
                PlacementKind::ReducedCard => format!("reduced-{day}-{event}"),
                PlacementKind::Overflow => format!("overflow-{day}"),
            };
            let bounds = placement.bounds;
            self.register_component(
                &test_id,
                kind_name(placement.kind),
                (bounds.top_left.x, bounds.top_left.y),
                (bounds.size.width, bounds.size.height),
            );
        }
    }

    /// Remove all registered components.
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// Find a component by test ID.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ComponentRef> {
        self.components.iter().find(|c| c.test_id == test_id)
    }

    /// All components of one type, in registration order.
    pub fn query_by_type<'a>(
        &'a self,
        component_type: &'a str,
    ) -> impl Iterator<Item = &'a ComponentRef> + 'a {
        self.components
            .iter()
            .filter(move |c| c.component_type == component_type)
    }

    /// Return all registered components.
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    /// Total number of registered components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Assert that a component with `test_id` exists in the registry.
    pub fn assert_has_component(&self, test_id: &str) -> Result<(), String> {
        self.query_by_test_id(test_id)
            .ok_or_else(|| format!("Component '{test_id}' not found"))
            .map(|_| ())
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// The canvas as an RGB image.
    pub fn to_image(&self) -> RgbImage {
        let fb = self.framebuffer();
        RgbImage::from_fn(fb.width(), fb.height(), |x, y| {
            image::Rgb(fb.pixel_at(x, y).unwrap_or_default().to_rgb())
        })
    }

    /// Save the canvas as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        self.to_image().save(path)?;
        Ok(())
    }

    /// Save the canvas as the golden reference PNG.
    ///
    /// Parent directories are created automatically.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.screenshot(p)
    }

    /// Assert the canvas matches a golden reference PNG.
    ///
    /// `threshold` is the maximum per-channel absolute difference still
    /// considered equal (0 = exact match).
    ///
    /// Set `UPDATE_GOLDEN=1` to **update** the golden file instead:
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(
        &self,
        golden_path: impl AsRef<Path>,
        threshold: u8,
    ) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self.save_golden(golden_path).map_err(|e| {
                format!(
                    "Failed to save golden '{p}': {e}",
                    p = golden_path.display()
                )
            });
        }

        let current = self.to_image();
        let golden = image::open(golden_path)
            .map_err(|e| {
                format!(
                    "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                    golden_path.display()
                )
            })?
            .to_rgb8();

        if current.dimensions() != golden.dimensions() {
            let (cw, ch) = current.dimensions();
            let (gw, gh) = golden.dimensions();
            return Err(format!(
                "Dimension mismatch: canvas is {cw}×{ch}, golden is {gw}×{gh}"
            ));
        }

        let diff_pixels = current
            .pixels()
            .zip(golden.pixels())
            .filter(|(cp, gp)| {
                cp.0.iter()
                    .zip(gp.0.iter())
                    .any(|(&a, &b)| a.abs_diff(b) > threshold)
            })
            .count();

        if diff_pixels > 0 {
            Err(format!(
                "{diff_pixels} pixels differ from golden '{}' (threshold={threshold})",
                golden_path.display()
            ))
        } else {
            Ok(())
        }
    }

    // ── Surface access ───────────────────────────────────────────────────────

    /// The drawing surface.
    pub fn surface(&self) -> &DrawTargetSurface<Framebuffer> {
        &self.inner
    }

    /// The drawing surface, mutably.
    pub fn surface_mut(&mut self) -> &mut DrawTargetSurface<Framebuffer> {
        &mut self.inner
    }
}

impl std::ops::Deref for TestCanvas {
    type Target = DrawTargetSurface<Framebuffer>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for TestCanvas {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
