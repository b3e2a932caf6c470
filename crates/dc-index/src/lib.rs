//! # dc-index
//!
//! Precomputed day-type index with prefix-sum range counters.
//!
//! [`IndexBuilder`] classifies every day of a span of years once and records,
//! per year, how many weekend and festival days precede each date.
//! [`CalendarIndex`] then answers "what type is this date?" and "how many
//! days of this type fall in `[start, end)`?" without walking the range.
//! [`CalendarService`] publishes the index as an immutable snapshot and swaps
//! in a freshly built one on reload.
//!
//! ```
//! use dc_index::{CountKind, IndexBuilder};
//! use dc_time::{Date, DayType, OverrideCalendar};
//!
//! let mut overrides = OverrideCalendar::new("example");
//! overrides.set_override(Date::parse_compact("20200101").unwrap(), DayType::Festival);
//!
//! let index = IndexBuilder::new(2020, 2020).with_calendar(&overrides).build().unwrap();
//! assert_eq!(index.day_type_of("20200101").unwrap(), DayType::Festival);
//! assert_eq!(index.count(CountKind::Holiday, "20200101", "20200108").unwrap(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `IndexBuilder`: builds the index for a span of years.
pub mod builder;

/// `IndexConfig`: year span and override source.
pub mod config;

/// `CalendarIndex`: loaded years and point lookups.
pub mod index;

/// Festival / workday override files.
pub mod overrides;

/// Range counting and `CountKind`.
pub mod range;

/// `CalendarService`: snapshot publication and reload.
pub mod service;

/// `YearIndex`: per-year day types and cumulative counters.
pub mod year_index;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::{build, IndexBuilder};
pub use config::IndexConfig;
pub use index::{CalendarIndex, DayTypeMap};
pub use overrides::{load_overrides, parse_overrides, read_overrides};
pub use range::CountKind;
pub use service::CalendarService;
pub use year_index::{CumulativeCounts, YearBound, YearIndex};
