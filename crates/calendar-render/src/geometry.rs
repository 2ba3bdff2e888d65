//! Pixel geometry of the calendar grid.
//!
//! Every constant the layout uses lives here so a different panel only
//! needs a different `GridGeometry`, not different code. With the `serde`
//! feature the struct loads from JSON; missing fields keep their defaults.

use calendar_core::{DayIndex, StackMetrics, DAYS_PER_WEEK, WEEKS};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use thiserror::Error;

/// Geometry that cannot be laid out on its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Header, two week rows and the status bar are taller than the canvas.
    #[error("grid needs {needed}px of height but the canvas has {available}px")]
    TooTall {
        /// Pixels required.
        needed: u32,
        /// Canvas height.
        available: u32,
    },
    /// Seven day columns are wider than the canvas.
    #[error("grid needs {needed}px of width but the canvas has {available}px")]
    TooWide {
        /// Pixels required.
        needed: u32,
        /// Canvas width.
        available: u32,
    },
    /// A spacing of zero would stack everything on one line.
    #[error("{0} spacing must be non-zero")]
    ZeroSpacing(&'static str),
    /// A field beyond [`MAX_DIMENSION`].
    #[error("{field} of {value}px exceeds the {max}px limit", max = MAX_DIMENSION)]
    TooLarge {
        /// Field name.
        field: &'static str,
        /// Value given.
        value: u32,
    },
}

/// Upper bound for every geometry field, canvas size included.
pub const MAX_DIMENSION: u32 = 16_384;

/// Every pixel constant of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridGeometry {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Weekday header band at the top.
    pub header_height: u32,
    /// Status bar band at the bottom.
    pub status_bar_height: u32,
    /// Width of one day column.
    pub day_width: u32,
    /// Height of one week row.
    pub row_height: u32,
    /// Space reserved for the day number at the top of each cell.
    pub day_number_margin: u32,
    /// Height of a multi-day bar.
    pub multi_day_height: u32,
    /// Pitch between multi-day rows.
    pub multi_day_spacing: u32,
    /// Horizontal inset of events inside their cell.
    pub event_margin: u32,
    /// Inset of text inside an event.
    pub text_margin: u32,
    /// Corner radius of events and the today badge.
    pub corner_radius: u32,
    /// Height of a full single-day card.
    pub card_height: u32,
    /// Pitch between full single-day cards.
    pub card_spacing: u32,
    /// Height of the reduced one-line card.
    pub reduced_card_height: u32,
    /// Height of the overflow line.
    pub overflow_spacing: u32,
    /// Width of the today badge behind the day number.
    pub badge_width: u32,
    /// Height of the today badge.
    pub badge_height: u32,
}

impl Default for GridGeometry {
    /// 800x480 tri-colour panel.
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            header_height: 32,
            status_bar_height: 32,
            day_width: 114,
            row_height: 208,
            day_number_margin: 25,
            multi_day_height: 26,
            multi_day_spacing: 30,
            event_margin: 3,
            text_margin: 4,
            corner_radius: 4,
            card_height: 48,
            card_spacing: 52,
            reduced_card_height: 30,
            overflow_spacing: 14,
            badge_width: 28,
            badge_height: 22,
        }
    }
}

// SAFETY (for the arithmetic below): `validate()` bounds every field by
// MAX_DIMENSION and the renderers refuse geometry that fails it, so sums and
// products of a handful of fields fit u32 and i32.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
impl GridGeometry {
    /// Check that the grid fits its canvas.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let spacings = [
            ("card", self.card_spacing),
            ("multi-day", self.multi_day_spacing),
            ("day column", self.day_width),
            ("week row", self.row_height),
        ];
        if let Some(&(name, _)) = spacings.iter().find(|(_, value)| *value == 0) {
            return Err(GeometryError::ZeroSpacing(name));
        }
        if let Some((field, value)) = self
            .fields()
            .into_iter()
            .find(|(_, value)| *value > MAX_DIMENSION)
        {
            return Err(GeometryError::TooLarge { field, value });
        }

        let needed = u32::from(WEEKS)
            .saturating_mul(self.row_height)
            .saturating_add(self.header_height)
            .saturating_add(self.status_bar_height);
        if needed > self.height {
            return Err(GeometryError::TooTall {
                needed,
                available: self.height,
            });
        }

        let needed = u32::from(DAYS_PER_WEEK).saturating_mul(self.day_width);
        if needed > self.width {
            return Err(GeometryError::TooWide {
                needed,
                available: self.width,
            });
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, u32); 18] {
        [
            ("width", self.width),
            ("height", self.height),
            ("header_height", self.header_height),
            ("status_bar_height", self.status_bar_height),
            ("day_width", self.day_width),
            ("row_height", self.row_height),
            ("day_number_margin", self.day_number_margin),
            ("multi_day_height", self.multi_day_height),
            ("multi_day_spacing", self.multi_day_spacing),
            ("event_margin", self.event_margin),
            ("text_margin", self.text_margin),
            ("corner_radius", self.corner_radius),
            ("card_height", self.card_height),
            ("card_spacing", self.card_spacing),
            ("reduced_card_height", self.reduced_card_height),
            ("overflow_spacing", self.overflow_spacing),
            ("badge_width", self.badge_width),
            ("badge_height", self.badge_height),
        ]
    }

    /// Canvas size.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Stacker metrics for single-day cards.
    pub const fn stack_metrics(&self) -> StackMetrics {
        StackMetrics {
            full_spacing: self.card_spacing,
            reduced_height: self.reduced_card_height,
            overflow_spacing: self.overflow_spacing,
        }
    }

    /// Left edge of a day column.
    pub fn column_x(&self, column: u8) -> i32 {
        (u32::from(column) * self.day_width) as i32
    }

    /// Top edge of a week row.
    pub fn week_y(&self, week: u8) -> i32 {
        (self.header_height + u32::from(week) * self.row_height) as i32
    }

    /// Header band above a column.
    pub fn header_cell(&self, column: u8) -> Rectangle {
        Rectangle::new(
            Point::new(self.column_x(column), 0),
            Size::new(self.day_width, self.header_height),
        )
    }

    /// Full cell of a day.
    pub fn day_cell(&self, day: DayIndex) -> Rectangle {
        Rectangle::new(
            Point::new(self.column_x(day.column()), self.week_y(day.week())),
            Size::new(self.day_width, self.row_height),
        )
    }

    /// Today badge behind the day number.
    pub fn badge(&self, day: DayIndex) -> Rectangle {
        let cell = self.day_cell(day);
        Rectangle::new(
            cell.top_left + Point::new(2, 2),
            Size::new(self.badge_width, self.badge_height),
        )
    }

    /// Multi-day bar for `row`, starting in the cell of `day` and covering
    /// `days` columns of that week.
    pub fn multi_day_bar(&self, day: DayIndex, row: usize, days: u8) -> Rectangle {
        let cell = self.day_cell(day);
        let row = u32::try_from(row).unwrap_or(u32::MAX);
        let top = cell.top_left.y
            + (self.day_number_margin as i32)
            + row.saturating_mul(self.multi_day_spacing) as i32;
        let width = (u32::from(days) * self.day_width).saturating_sub(2 * self.event_margin);
        Rectangle::new(
            Point::new(cell.top_left.x + self.event_margin as i32, top),
            Size::new(width, self.multi_day_height),
        )
    }

    /// Height left for single-day cards after `rows` multi-day rows.
    pub fn card_area_height(&self, rows: usize) -> u32 {
        let rows = u32::try_from(rows).unwrap_or(u32::MAX);
        self.row_height
            .saturating_sub(self.day_number_margin)
            .saturating_sub(rows.saturating_mul(self.multi_day_spacing))
    }

    /// Top of the single-day card area after `rows` multi-day rows.
    pub fn card_area_top(&self, day: DayIndex, rows: usize) -> i32 {
        let rows = u32::try_from(rows).unwrap_or(u32::MAX);
        self.day_cell(day).top_left.y
            + self.day_number_margin as i32
            + rows.saturating_mul(self.multi_day_spacing) as i32
    }

    /// Width of a single-day card.
    pub fn card_width(&self) -> u32 {
        self.day_width.saturating_sub(2 * self.event_margin)
    }

    /// Bottom band reserved for the status bar.
    pub fn status_bar(&self) -> Rectangle {
        let top = self.height.saturating_sub(self.status_bar_height);
        Rectangle::new(
            Point::new(0, top as i32),
            Size::new(self.width, self.status_bar_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u8) -> DayIndex {
        DayIndex::new(n).unwrap()
    }

    #[test]
    fn default_geometry_is_valid() {
        assert_eq!(GridGeometry::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_overflowing_rows() {
        let geometry = GridGeometry {
            row_height: 300,
            ..GridGeometry::default()
        };
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::TooTall {
                needed: 664,
                available: 480
            })
        );
    }

    #[test]
    fn rejects_wide_columns_and_zero_spacing() {
        let wide = GridGeometry {
            day_width: 120,
            ..GridGeometry::default()
        };
        assert!(matches!(wide.validate(), Err(GeometryError::TooWide { .. })));

        let flat = GridGeometry {
            card_spacing: 0,
            ..GridGeometry::default()
        };
        assert_eq!(flat.validate(), Err(GeometryError::ZeroSpacing("card")));
    }

    #[test]
    fn rejects_fields_past_the_limit() {
        let huge = GridGeometry {
            event_margin: u32::MAX,
            ..GridGeometry::default()
        };
        assert_eq!(
            huge.validate(),
            Err(GeometryError::TooLarge {
                field: "event_margin",
                value: u32::MAX
            })
        );

        // Checked before the fit tests, so the sum cannot wrap.
        let canvas = GridGeometry {
            width: u32::MAX,
            day_width: u32::MAX / 4,
            ..GridGeometry::default()
        };
        assert!(matches!(canvas.validate(), Err(GeometryError::TooLarge { field: "width", .. })));
    }

    #[test]
    fn cells_follow_week_and_column() {
        let g = GridGeometry::default();
        assert_eq!(g.day_cell(day(1)).top_left, Point::new(0, 32));
        assert_eq!(g.day_cell(day(9)).top_left, Point::new(114, 240));
        assert_eq!(g.day_cell(day(14)).bottom_right(), Some(Point::new(797, 447)));
    }

    #[test]
    fn card_area_shrinks_per_multi_day_row() {
        let g = GridGeometry::default();
        assert_eq!(g.card_area_height(0), 183);
        assert_eq!(g.card_area_height(2), 123);
        assert_eq!(g.card_area_height(10), 0);
        assert_eq!(g.card_area_top(day(1), 1), 32 + 25 + 30);
    }

    #[test]
    fn multi_day_bar_spans_columns() {
        let g = GridGeometry::default();
        let bar = g.multi_day_bar(day(3), 1, 3);
        assert_eq!(bar.top_left, Point::new(228 + 3, 32 + 25 + 30));
        assert_eq!(bar.size, Size::new(3 * 114 - 6, 26));
    }
}
