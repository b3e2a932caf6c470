//! `Calendar` trait and the default weekday-only calendar.
//!
//! A calendar knows the [`DayType`] of every date.  Unless a calendar
//! overrides a date explicitly, Saturdays and Sundays are weekends and every
//! other day is a workday.

use crate::date::Date;
use crate::day_type::DayType;

/// A day-type calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Explicit classification of `date`, if this calendar overrides it.
    fn override_for(&self, _date: Date) -> Option<DayType> {
        None
    }

    /// Classify `date`: the override if there is one, otherwise the weekday
    /// default.
    fn day_type(&self, date: Date) -> DayType {
        self.override_for(date)
            .unwrap_or_else(|| date.weekday().default_day_type())
    }

    /// Return `true` if `date` is a workday in this calendar.
    fn is_workday(&self, date: Date) -> bool {
        self.day_type(date) == DayType::Workday
    }

    /// Return `true` if `date` is a weekend day in this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        self.day_type(date) == DayType::Weekend
    }

    /// Return `true` if `date` is a festival in this calendar.
    fn is_festival(&self, date: Date) -> bool {
        self.day_type(date) == DayType::Festival
    }

    /// Count days of `kind` in the half-open range `[start, end)` by walking
    /// every date.  Returns 0 if `end <= start`.
    ///
    /// This is linear in the length of the range; the precomputed index
    /// answers the same question in constant time per year.
    fn count_between(&self, kind: DayType, start: Date, end: Date) -> u32 {
        start
            .until(end)
            .filter(|&d| self.day_type(d) == kind)
            .count() as u32
    }
}

/// A calendar with no overrides: only Saturdays and Sundays are rest days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }
}
