//! # dc-time
//!
//! Date, weekday, day-type, and calendar classification types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and the weekday-only calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DayType`: workday / weekend / festival.
pub mod day_type;

/// Calendar amended with explicit per-date overrides.
pub mod override_calendar;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use date::Date;
pub use day_type::DayType;
pub use override_calendar::OverrideCalendar;
pub use weekday::Weekday;
