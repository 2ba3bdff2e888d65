//! Layout core for a two-week e-paper calendar.
//!
//! Everything in this crate is a pure function of its inputs: the renderer
//! hands over a flat list of events already resolved to a 14-day window and
//! gets back placement decisions. Nothing is cached between renders.
//!
//! # Architecture
//!
//! ```text
//! GridLayout (calendar-render)
//!     ├── date      - relative day index inside the window
//!     ├── rows      - multi-day events packed into stacking rows
//!     ├── stacker   - single-day cards: full / reduced / overflow
//!     └── wrap      - greedy word-wrap under a pixel budget
//! ```
//!
//! # Example
//!
//! ```
//! use calendar_core::prelude::*;
//!
//! let events = [
//!     CalendarEvent::from_parts("Conference", "work", 3, 5, "", "").unwrap(),
//!     CalendarEvent::from_parts("Holiday", "family", 4, 6, "", "").unwrap(),
//! ];
//! let rows = RowAssignment::assign(&events);
//! assert_eq!(rows.row_of(0), Some(0));
//! assert_eq!(rows.row_of(1), Some(1));
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
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

extern crate alloc;

pub mod date;
pub mod error;
pub mod event;
pub mod rows;
pub mod stacker;
pub mod status;
pub mod wrap;

pub use date::{
    date_at, day_index, day_index_or_first, day_offset, weekday_label, CalendarDate, DayIndex,
    Weekday, DAYS_PER_WEEK, WEEKS, WINDOW_DAYS,
};
pub use error::{DateError, EventError};
pub use event::{CalendarEvent, ClockTime};
pub use rows::RowAssignment;
pub use status::{battery_percent, BatteryLevel, PowerThresholds, SignalStrength};
pub use stacker::{day_agenda, DayStack, StackMetrics, StackShape};
pub use wrap::{wrap, TextMeasure, ELLIPSIS};

pub mod prelude {
    //! Everything a renderer needs in one import.
    pub use crate::date::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use crate::rows::*;
    pub use crate::stacker::*;
    pub use crate::status::*;
    pub use crate::wrap::*;
}
