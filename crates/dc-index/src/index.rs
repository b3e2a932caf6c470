//! `CalendarIndex`: the immutable, fully built set of [`YearIndex`]es for a
//! contiguous span of years, and its point lookups.
//!
//! Range counting lives in [`crate::range`].  Every string-taking method
//! accepts the compact forms used by query parameters: `YYYY`, `YYYYMM`,
//! and `YYYYMMDD`.

use std::collections::BTreeMap;

use dc_core::errors::{Error, Result};
use dc_core::fail;
use dc_core::utilities::data_parsers::{parse_compact_month, parse_compact_year};
use dc_time::{Date, DayType};

use crate::year_index::YearIndex;

/// Dates mapped to their day type, in calendar order.
pub type DayTypeMap = BTreeMap<Date, DayType>;

/// Day-type index over a contiguous span of years.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarIndex {
    first_year: u16,
    years: Vec<YearIndex>,
}

impl CalendarIndex {
    /// An index with no years loaded.  Every lookup fails with
    /// [`Error::RangeNotLoaded`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble an index from consecutive years starting at `first_year`.
    pub(crate) fn from_years(first_year: u16, years: Vec<YearIndex>) -> Self {
        debug_assert!(years
            .iter()
            .enumerate()
            .all(|(i, y)| usize::from(y.year()) == usize::from(first_year) + i));
        Self { first_year, years }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// First loaded year, or `None` if the index is empty.
    pub fn first_year(&self) -> Option<u16> {
        self.years.first().map(YearIndex::year)
    }

    /// Last loaded year, or `None` if the index is empty.
    pub fn last_year(&self) -> Option<u16> {
        self.years.last().map(YearIndex::year)
    }

    /// Number of loaded years.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether no year is loaded.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Whether `year` is loaded.
    pub fn contains_year(&self, year: u16) -> bool {
        self.year(year).is_some()
    }

    /// The index of `year`, if loaded.
    pub fn year(&self, year: u16) -> Option<&YearIndex> {
        let year0 = usize::from(year.checked_sub(self.first_year)?);
        self.years.get(year0)
    }

    /// The index of `year`, or [`Error::RangeNotLoaded`].
    pub fn loaded_year(&self, year: u16) -> Result<&YearIndex> {
        self.year(year).ok_or(Error::RangeNotLoaded { year })
    }

    /// Iterate over the loaded years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = &YearIndex> {
        self.years.iter()
    }

    // ── Point lookups ────────────────────────────────────────────────────

    /// Type of a single date.
    pub fn day_type(&self, date: Date) -> Result<DayType> {
        let year = self.loaded_year(date.year())?;
        match year.day_type(date) {
            Some(day_type) => Ok(day_type),
            None => fail!("index for {} has no entry for {date}", year.year()),
        }
    }

    /// Type of a single `YYYYMMDD` date.
    pub fn day_type_of(&self, date: &str) -> Result<DayType> {
        self.day_type(Date::parse_compact(date)?)
    }

    /// Every day of a `YYYY` year.
    pub fn day_types_for_year(&self, year: &str) -> Result<DayTypeMap> {
        let year = parse_compact_year(year)?;
        Ok(self.loaded_year(year)?.day_types().collect())
    }

    /// Every day of a `YYYYMM` month, walking from the 1st until the month
    /// changes.
    pub fn day_types_for_month(&self, month: &str) -> Result<DayTypeMap> {
        let (year, month_number) = parse_compact_month(month)?;
        let first = Date::from_ymd(year, month_number, 1).map_err(|e| match e {
            Error::Date(reason) => Error::parse(month, reason),
            other => other,
        })?;

        let mut days = DayTypeMap::new();
        let mut date = first;
        while date.month() == month_number && date.year() == year {
            days.insert(date, self.day_type(date)?);
            match date.succ() {
                Some(next) => date = next,
                None => break,
            }
        }
        Ok(days)
    }

    /// Types of an explicit list of `YYYYMMDD` dates.
    ///
    /// Dates whose year is not loaded are left out of the result; a malformed
    /// date fails the whole lookup.
    pub fn day_types_for_dates<S: AsRef<str>>(&self, dates: &[S]) -> Result<DayTypeMap> {
        let mut days = DayTypeMap::new();
        for raw in dates {
            let date = Date::parse_compact(raw.as_ref())?;
            match self.day_type(date) {
                Ok(day_type) => {
                    days.insert(date, day_type);
                }
                Err(Error::RangeNotLoaded { year }) => {
                    log::debug!("skipping {date}: year {year} is not loaded");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(days)
    }
}
