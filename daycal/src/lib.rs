//! # daycal
//!
//! Workday / weekend / festival classification of calendar days, with
//! constant-per-year range counts over a configured span of years.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `dc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! daycal = "0.1"
//! ```
//!
//! ```rust
//! use daycal::index::{CountKind, IndexBuilder};
//!
//! let index = IndexBuilder::new(2020, 2020).build().unwrap();
//! assert_eq!(index.count(CountKind::Weekend, "20200101", "20200201").unwrap(), 8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, snapshot handle, evaluation-date settings, compact-date parsing.
pub use dc_core as core;

/// Date, weekday, day-type, and calendar types.
pub use dc_time as time;

/// Day-type index: builder, range counts, lookups, and the reloadable service.
pub use dc_index as index;
