//! `IndexBuilder`: builds a [`CalendarIndex`] for a span of years.
//!
//! The builder is a pure function of the year span and the calendar it is
//! given: building twice from identical inputs yields identical indexes.
//! Reading override files is the caller's business (see
//! [`crate::overrides`]); the builder only sees the resulting calendar.

use dc_core::ensure;
use dc_core::errors::Result;
use dc_time::{Calendar, DayType, OverrideCalendar, WeekendsOnly};

use crate::index::CalendarIndex;
use crate::year_index::YearIndex;

static WEEKENDS_ONLY: WeekendsOnly = WeekendsOnly;

/// Builder for a [`CalendarIndex`] covering `[start_year, end_year]`.
///
/// ```
/// use dc_index::IndexBuilder;
///
/// let index = IndexBuilder::new(2019, 2020).build().unwrap();
/// assert_eq!(index.first_year(), Some(2019));
/// assert_eq!(index.last_year(), Some(2020));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IndexBuilder<'a> {
    start_year: u16,
    end_year: u16,
    calendar: &'a dyn Calendar,
}

impl<'a> IndexBuilder<'a> {
    /// Begin building an index for the inclusive year span, classifying days
    /// with the weekday default until a calendar is supplied.
    pub fn new(start_year: u16, end_year: u16) -> Self {
        Self {
            start_year,
            end_year,
            calendar: &WEEKENDS_ONLY,
        }
    }

    /// Classify days with `calendar` (typically an [`OverrideCalendar`]).
    pub fn with_calendar(mut self, calendar: &'a dyn Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Build every year in ascending order.
    ///
    /// # Errors
    /// `Precondition` if the span is reversed, `Date` if a year falls outside
    /// the representable range.
    pub fn build(self) -> Result<CalendarIndex> {
        ensure!(
            self.start_year <= self.end_year,
            "start year {} is after end year {}",
            self.start_year,
            self.end_year
        );

        let years = (self.start_year..=self.end_year)
            .map(|year| {
                let index = YearIndex::build(year, self.calendar)?;
                log::debug!(
                    "built {year}: {} days, {} weekend, {} festival",
                    index.len(),
                    index.total(DayType::Weekend),
                    index.total(DayType::Festival),
                );
                Ok(index)
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "day-type index ready for {}..={} using calendar {:?}",
            self.start_year,
            self.end_year,
            self.calendar.name(),
        );

        Ok(CalendarIndex::from_years(self.start_year, years))
    }
}

/// Build an index for `[start_year, end_year]` with the given overrides.
pub fn build(start_year: u16, end_year: u16, overrides: &OverrideCalendar) -> Result<CalendarIndex> {
    IndexBuilder::new(start_year, end_year)
        .with_calendar(overrides)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::errors::Error;
    use dc_time::Date;

    #[test]
    fn reversed_span_is_rejected() {
        let err = IndexBuilder::new(2021, 2020).build().unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        let err = IndexBuilder::new(2199, 2200).build().unwrap_err();
        assert!(matches!(err, Error::Date(_)));
    }

    #[test]
    fn single_year() {
        let index = IndexBuilder::new(2020, 2020).build().unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.year(2020).unwrap().len(), 366);
    }

    #[test]
    fn rebuild_is_identical() {
        let mut cal = OverrideCalendar::new("test");
        cal.set_override(Date::from_ymd(2020, 10, 1).unwrap(), DayType::Festival);
        cal.set_override(Date::from_ymd(2020, 9, 27).unwrap(), DayType::Workday);

        let a = build(2018, 2021, &cal).unwrap();
        let b = build(2018, 2021, &cal).unwrap();
        assert_eq!(a, b);
    }
}
