//! Override calendar: the weekday calendar amended with explicit per-date
//! classifications (a festival on a Tuesday, a make-up workday on a Saturday).

use std::collections::BTreeMap;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::day_type::DayType;

/// A calendar whose deviations from the weekday default are set at run time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideCalendar {
    name: String,
    overrides: BTreeMap<Date, DayType>,
}

impl OverrideCalendar {
    /// Create a new calendar with the given name and no overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Create a calendar from `(date, type)` pairs.  Later pairs win.
    pub fn from_overrides(
        name: impl Into<String>,
        overrides: impl IntoIterator<Item = (Date, DayType)>,
    ) -> Self {
        Self {
            name: name.into(),
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Set the classification of `date`, returning the previous override.
    pub fn set_override(&mut self, date: Date, day_type: DayType) -> Option<DayType> {
        self.overrides.insert(date, day_type)
    }

    /// Remove the override for `date`, restoring the weekday default.
    pub fn remove_override(&mut self, date: Date) -> Option<DayType> {
        self.overrides.remove(&date)
    }

    /// Number of overridden dates.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Return `true` if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Iterate over the overrides in date order.
    pub fn overrides(&self) -> impl Iterator<Item = (Date, DayType)> + '_ {
        self.overrides.iter().map(|(&d, &t)| (d, t))
    }
}

impl Calendar for OverrideCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn override_for(&self, date: Date) -> Option<DayType> {
        self.overrides.get(&date).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_is_weekends_only() {
        let cal = OverrideCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        assert!(cal.is_workday(date(2024, 1, 8)));
        assert!(cal.is_weekend(date(2024, 1, 6)));
        assert!(cal.is_empty());
    }

    #[test]
    fn overrides_take_precedence() {
        let mut cal = OverrideCalendar::new("Custom");
        let saturday = date(2020, 1, 4);
        let tuesday = date(2020, 1, 7);

        cal.set_override(saturday, DayType::Workday);
        cal.set_override(tuesday, DayType::Festival);
        assert!(cal.is_workday(saturday));
        assert!(cal.is_festival(tuesday));
        assert_eq!(cal.override_count(), 2);

        assert_eq!(cal.remove_override(saturday), Some(DayType::Workday));
        assert!(cal.is_weekend(saturday));
        assert_eq!(cal.override_count(), 1);
    }

    #[test]
    fn later_pairs_win() {
        let d = date(2021, 10, 1);
        let cal = OverrideCalendar::from_overrides(
            "Dup",
            [(d, DayType::Workday), (d, DayType::Festival)],
        );
        assert_eq!(cal.override_count(), 1);
        assert_eq!(cal.day_type(d), DayType::Festival);
        assert_eq!(cal.overrides().collect::<Vec<_>>(), [(d, DayType::Festival)]);
    }
}
