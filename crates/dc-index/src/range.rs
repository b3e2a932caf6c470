//! Range counting over a [`CalendarIndex`].
//!
//! A count over `[start, end)` is stitched together year by year: the partial
//! first year from `start`, every full year in between, and the partial last
//! year up to `end`.  Each piece is one subtraction of two cumulative values,
//! so a query costs O(years spanned).
//!
//! Weekend and festival counts come from the stored tables.  Workday counts
//! are derived as the exact number of days in the range minus weekends minus
//! festivals.

use std::str::FromStr;

use dc_core::errors::{Error, Result};
use dc_core::fail;
use dc_time::{Date, DayType};

use crate::index::CalendarIndex;
use crate::year_index::YearBound;

/// What to count over a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountKind {
    /// Weekend days only.
    Weekend,
    /// Festival days only.
    Festival,
    /// Rest days: weekends plus festivals.
    Holiday,
    /// Workdays: every day that is neither a weekend nor a festival.
    Workday,
}

impl CountKind {
    /// All count kinds.
    pub const ALL: [CountKind; 4] = [
        CountKind::Weekend,
        CountKind::Festival,
        CountKind::Holiday,
        CountKind::Workday,
    ];

    /// Lower-case tag (`"weekend"`, `"festival"`, `"holiday"`, `"workday"`).
    pub fn tag(&self) -> &'static str {
        match self {
            CountKind::Weekend => "weekend",
            CountKind::Festival => "festival",
            CountKind::Holiday => "holiday",
            CountKind::Workday => "workday",
        }
    }
}

impl From<DayType> for CountKind {
    fn from(day_type: DayType) -> Self {
        match day_type {
            DayType::Workday => CountKind::Workday,
            DayType::Weekend => CountKind::Weekend,
            DayType::Festival => CountKind::Festival,
        }
    }
}

impl FromStr for CountKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CountKind::ALL
            .into_iter()
            .find(|k| k.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::parse(s, "expected weekend, festival, holiday or workday"))
    }
}

impl std::fmt::Display for CountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl CalendarIndex {
    /// Count days of `day_type` in `[start, end)` given as `YYYYMMDD`
    /// strings.
    ///
    /// ```
    /// use dc_index::IndexBuilder;
    /// use dc_time::DayType;
    ///
    /// let index = IndexBuilder::new(2019, 2020).build().unwrap();
    /// // Dec 30 2019 (Mon) .. Jan 2 2020 (Thu): no weekend in between
    /// assert_eq!(index.count_day_type(DayType::Weekend, "20191230", "20200103").unwrap(), 0);
    /// assert_eq!(index.count_day_type(DayType::Workday, "20191230", "20200103").unwrap(), 4);
    /// ```
    ///
    /// # Errors
    /// `Parse` for malformed dates, `InvalidRange` if `start > end`, and
    /// `RangeNotLoaded` if either date falls in a year with no index.
    pub fn count_day_type(&self, day_type: DayType, start: &str, end: &str) -> Result<u32> {
        self.count(CountKind::from(day_type), start, end)
    }

    /// Count days of `kind` in `[start, end)` given as `YYYYMMDD` strings.
    pub fn count(&self, kind: CountKind, start: &str, end: &str) -> Result<u32> {
        let start_date = Date::parse_compact(start)?;
        let end_date = Date::parse_compact(end)?;
        self.count_between(kind, start_date, end_date)
    }

    /// Count days of `kind` in `[start, end)`.
    ///
    /// `start == end` is an empty range and counts 0; `start > end` is
    /// rejected.
    pub fn count_between(&self, kind: CountKind, start: Date, end: Date) -> Result<u32> {
        if start > end {
            return Err(Error::InvalidRange {
                start: start.to_compact_string(),
                end: end.to_compact_string(),
            });
        }

        match kind {
            CountKind::Weekend => self.stitched(DayType::Weekend, start, end),
            CountKind::Festival => self.stitched(DayType::Festival, start, end),
            CountKind::Holiday => Ok(self.stitched(DayType::Weekend, start, end)?
                + self.stitched(DayType::Festival, start, end)?),
            CountKind::Workday => {
                let weekend = self.stitched(DayType::Weekend, start, end)?;
                let festival = self.stitched(DayType::Festival, start, end)?;
                let total = days_between(start, end);
                match total.checked_sub(weekend + festival) {
                    Some(workdays) => Ok(workdays),
                    None => fail!(
                        "{weekend} weekend and {festival} festival days exceed the \
                         {total} days of [{start}, {end})"
                    ),
                }
            }
        }
    }

    /// Sum the stored counter of `day_type` over `[start, end)`, one year at
    /// a time.
    fn stitched(&self, day_type: DayType, start: Date, end: Date) -> Result<u32> {
        let start_year = start.year();
        let end_year = end.year();

        let mut total = 0;
        for year in start_year..=end_year {
            let index = self.loaded_year(year)?;
            let lower = if year == start_year {
                YearBound::Day(start)
            } else {
                YearBound::Day(index.first_day())
            };
            let upper = if year == end_year {
                YearBound::Day(end)
            } else {
                YearBound::End
            };

            match index.count_between(day_type, lower, upper) {
                Some(count) => total += count,
                None => fail!("cannot count {day_type} days of {year} in [{start}, {end})"),
            }
        }
        Ok(total)
    }
}

/// Exact number of days in `[start, end)`.  `start` must not be after `end`.
pub fn days_between(start: Date, end: Date) -> u32 {
    debug_assert!(start <= end);
    start.days_between(end) as u32
}
