//! `CalendarService`: owns the published [`CalendarIndex`] snapshot and
//! rebuilds it on reload.
//!
//! Queries run against an `Arc<CalendarIndex>` taken from the service; they
//! hold no lock while counting.  A reload builds a complete new index first
//! and only then swaps it in, so a reader sees either the old index or the
//! new one.  If the rebuild fails, the old index stays published.

use std::sync::Arc;

use dc_core::errors::Result;
use dc_core::handle::SnapshotHandle;
use dc_time::{Date, DayType};

use crate::builder::IndexBuilder;
use crate::config::IndexConfig;
use crate::index::{CalendarIndex, DayTypeMap};
use crate::overrides::load_overrides;
use crate::range::CountKind;

/// The calendar service: configuration plus the currently published index.
#[derive(Debug, Clone)]
pub struct CalendarService {
    config: IndexConfig,
    index: SnapshotHandle<CalendarIndex>,
}

impl CalendarService {
    /// Build the index described by `config` and publish it.
    pub fn start(config: IndexConfig) -> Result<Self> {
        let index = build_from_config(&config)?;
        Ok(Self {
            config,
            index: SnapshotHandle::new(index),
        })
    }

    /// Serve an index that was built elsewhere.
    pub fn with_index(config: IndexConfig, index: CalendarIndex) -> Self {
        Self {
            config,
            index: SnapshotHandle::new(index),
        }
    }

    /// The configuration this service was started with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// The currently published index.
    pub fn index(&self) -> Arc<CalendarIndex> {
        self.index.current()
    }

    /// Re-read the override file, rebuild every year, and publish the result.
    ///
    /// Returns the newly published index.  On error nothing is published.
    pub fn reload(&self) -> Result<Arc<CalendarIndex>> {
        let fresh = Arc::new(build_from_config(&self.config)?);
        self.index.publish_arc(Arc::clone(&fresh));
        log::info!(
            "reloaded day-type index ({} years)",
            fresh.len()
        );
        Ok(fresh)
    }

    // ── Query surface ────────────────────────────────────────────────────

    /// Type of a single `YYYYMMDD` date.
    pub fn day_type(&self, date: &str) -> Result<DayType> {
        self.index().day_type_of(date)
    }

    /// Every day of a `YYYY` year.
    pub fn day_types_for_year(&self, year: &str) -> Result<DayTypeMap> {
        self.index().day_types_for_year(year)
    }

    /// Every day of a `YYYYMM` month.
    pub fn day_types_for_month(&self, month: &str) -> Result<DayTypeMap> {
        self.index().day_types_for_month(month)
    }

    /// Types of an explicit list of `YYYYMMDD` dates.
    pub fn day_types_for_dates<S: AsRef<str>>(&self, dates: &[S]) -> Result<DayTypeMap> {
        self.index().day_types_for_dates(dates)
    }

    /// Count days of `kind` in `[start, end)`.
    pub fn count(&self, kind: CountKind, start: &str, end: &str) -> Result<u32> {
        self.index().count(kind, start, end)
    }

    /// Count days of `kind` in `[start, end)` given as dates.
    pub fn count_between(&self, kind: CountKind, start: Date, end: Date) -> Result<u32> {
        self.index().count_between(kind, start, end)
    }
}

fn build_from_config(config: &IndexConfig) -> Result<CalendarIndex> {
    let end_year = config.resolve_end_year()?;
    let overrides = load_overrides(config.overrides_path.as_deref());
    IndexBuilder::new(config.start_year, end_year)
        .with_calendar(&overrides)
        .build()
}
