//! `YearIndex`: the precomputed day types and prefix-sum counters of one
//! calendar year.
//!
//! For every day `D` of the year, the cumulative tables store the number of
//! weekend (resp. festival) days in `[Jan 1, D)`, i.e. strictly before `D`.
//! The count over the whole year is kept separately as the year total, so the
//! number of days of a type in `[D1, D2)` within one year is always
//! `cumulative(D2) - cumulative(D1)`, with [`YearBound::End`] standing for the
//! day after December 31st.
//!
//! Workdays are never stored: they are the days left over once weekends and
//! festivals are removed.

use dc_core::errors::Result;
use dc_time::date::days_in_year;
use dc_time::{Calendar, Date, DayType};

/// One end of a range inside a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearBound {
    /// The start of the given day (the day itself is not yet counted).
    Day(Date),
    /// The end of the year, just after December 31st.
    End,
}

/// Prefix-sum counter of one day type over one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeCounts {
    daily: Vec<u32>,
    year_total: u32,
}

impl CumulativeCounts {
    /// Count of matching days strictly before the day at `offset`
    /// (0 = January 1st).
    pub fn before(&self, offset: usize) -> Option<u32> {
        self.daily.get(offset).copied()
    }

    /// Count of matching days over the whole year.
    pub fn year_total(&self) -> u32 {
        self.year_total
    }

    /// Per-day values, indexed by day-of-year offset.
    pub fn daily(&self) -> &[u32] {
        &self.daily
    }
}

/// Day types and cumulative counters for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearIndex {
    year: u16,
    first_day: Date,
    day_types: Vec<DayType>,
    weekend: CumulativeCounts,
    festival: CumulativeCounts,
}

impl YearIndex {
    /// Classify every day of `year` with `calendar` and accumulate the
    /// weekend and festival counters.
    ///
    /// ```
    /// use dc_index::YearIndex;
    /// use dc_time::{DayType, WeekendsOnly};
    ///
    /// let idx = YearIndex::build(2020, &WeekendsOnly).unwrap();
    /// assert_eq!(idx.len(), 366);
    /// assert_eq!(idx.total(DayType::Weekend), 104);
    /// assert_eq!(idx.total(DayType::Workday), 262);
    /// ```
    pub fn build(year: u16, calendar: &dyn Calendar) -> Result<Self> {
        let first_day = Date::first_of_year(year)?;
        let len = usize::from(days_in_year(year)?);

        let mut day_types = Vec::with_capacity(len);
        let mut weekend_daily = Vec::with_capacity(len);
        let mut festival_daily = Vec::with_capacity(len);
        let mut weekend_so_far = 0u32;
        let mut festival_so_far = 0u32;

        for offset in 0..len {
            let date = first_day + offset as i32;

            // Strictly before `date`
            weekend_daily.push(weekend_so_far);
            festival_daily.push(festival_so_far);

            let day_type = calendar.day_type(date);
            match day_type {
                DayType::Weekend => weekend_so_far += 1,
                DayType::Festival => festival_so_far += 1,
                DayType::Workday => {}
            }
            day_types.push(day_type);
        }

        Ok(Self {
            year,
            first_day,
            day_types,
            weekend: CumulativeCounts {
                daily: weekend_daily,
                year_total: weekend_so_far,
            },
            festival: CumulativeCounts {
                daily: festival_daily,
                year_total: festival_so_far,
            },
        })
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// The calendar year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// January 1st.
    pub fn first_day(&self) -> Date {
        self.first_day
    }

    /// December 31st.
    pub fn last_day(&self) -> Date {
        self.first_day + (self.len() as i32 - 1)
    }

    /// Number of days in the year (365 or 366).
    pub fn len(&self) -> usize {
        self.day_types.len()
    }

    /// Always `false`: a built year has at least 365 days.
    pub fn is_empty(&self) -> bool {
        self.day_types.is_empty()
    }

    /// Day-of-year offset of `date` (0 = January 1st), or `None` if `date`
    /// belongs to another year.
    pub fn offset_of(&self, date: Date) -> Option<usize> {
        let offset = usize::try_from(date - self.first_day).ok()?;
        (offset < self.len()).then_some(offset)
    }

    /// Type of `date`, or `None` if `date` belongs to another year.
    pub fn day_type(&self, date: Date) -> Option<DayType> {
        self.day_types.get(self.offset_of(date)?).copied()
    }

    /// Iterate over every `(date, type)` of the year in calendar order.
    pub fn day_types(&self) -> impl Iterator<Item = (Date, DayType)> + '_ {
        let first = self.first_day;
        self.day_types
            .iter()
            .enumerate()
            .map(move |(i, &t)| (first + i as i32, t))
    }

    /// The stored cumulative table for `kind`.  `None` for
    /// [`DayType::Workday`], which is always derived.
    pub fn cumulative(&self, kind: DayType) -> Option<&CumulativeCounts> {
        match kind {
            DayType::Weekend => Some(&self.weekend),
            DayType::Festival => Some(&self.festival),
            DayType::Workday => None,
        }
    }

    /// Count of days of `kind` over the whole year.
    pub fn total(&self, kind: DayType) -> u32 {
        match self.cumulative(kind) {
            Some(counts) => counts.year_total(),
            None => self.len() as u32 - self.weekend.year_total - self.festival.year_total,
        }
    }

    // ── Range counting ───────────────────────────────────────────────────

    /// Count of days of `kind` from January 1st up to `bound` (exclusive).
    ///
    /// Returns `None` if `bound` names a date of another year.
    pub fn count_to(&self, kind: DayType, bound: YearBound) -> Option<u32> {
        let offset = match bound {
            YearBound::Day(date) => self.offset_of(date)?,
            YearBound::End => self.len(),
        };
        Some(match self.cumulative(kind) {
            Some(counts) if offset == self.len() => counts.year_total(),
            Some(counts) => counts.before(offset)?,
            None => {
                offset as u32
                    - self.count_to(DayType::Weekend, bound)?
                    - self.count_to(DayType::Festival, bound)?
            }
        })
    }

    /// Count of days of `kind` in `[lower, upper)`.
    ///
    /// Returns `None` if either bound names a date of another year, or if
    /// `lower` lies after `upper`.
    pub fn count_between(&self, kind: DayType, lower: YearBound, upper: YearBound) -> Option<u32> {
        self.count_to(kind, upper)?
            .checked_sub(self.count_to(kind, lower)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_time::{OverrideCalendar, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn year_lengths() {
        assert_eq!(YearIndex::build(2019, &WeekendsOnly).unwrap().len(), 365);
        assert_eq!(YearIndex::build(2020, &WeekendsOnly).unwrap().len(), 366);
        assert_eq!(YearIndex::build(1900, &WeekendsOnly).unwrap().len(), 365);
    }

    #[test]
    fn cumulative_excludes_the_day_itself() {
        let idx = YearIndex::build(2020, &WeekendsOnly).unwrap();
        let weekend = idx.cumulative(DayType::Weekend).unwrap();
        // 2020-01-04 is the first Saturday of the year
        assert_eq!(weekend.before(0), Some(0));
        assert_eq!(weekend.before(3), Some(0));
        assert_eq!(weekend.before(4), Some(1));
        assert_eq!(weekend.before(5), Some(2));
        assert_eq!(weekend.before(366), None);
        assert_eq!(weekend.daily().len(), 366);
    }

    #[test]
    fn year_total_equals_count_after_last_day() {
        let idx = YearIndex::build(2019, &WeekendsOnly).unwrap();
        let weekend = idx.cumulative(DayType::Weekend).unwrap();
        let last = idx.last_day();
        assert_eq!(last, date(2019, 12, 31));
        // 2019-12-31 is a Tuesday, so the total equals the value recorded for it
        assert_eq!(weekend.year_total(), weekend.before(364).unwrap());
        assert_eq!(weekend.year_total(), 104);
    }

    #[test]
    fn overrides_shift_counters() {
        let mut cal = OverrideCalendar::new("test");
        cal.set_override(date(2020, 1, 4), DayType::Workday); // Saturday
        cal.set_override(date(2020, 1, 7), DayType::Festival); // Tuesday
        let idx = YearIndex::build(2020, &cal).unwrap();

        assert_eq!(idx.day_type(date(2020, 1, 4)), Some(DayType::Workday));
        assert_eq!(idx.day_type(date(2020, 1, 7)), Some(DayType::Festival));
        assert_eq!(idx.total(DayType::Weekend), 103);
        assert_eq!(idx.total(DayType::Festival), 1);
        assert_eq!(idx.total(DayType::Workday), 262);

        let jan1 = YearBound::Day(date(2020, 1, 1));
        let jan8 = YearBound::Day(date(2020, 1, 8));
        assert_eq!(idx.count_between(DayType::Weekend, jan1, jan8), Some(1));
        assert_eq!(idx.count_between(DayType::Festival, jan1, jan8), Some(1));
        assert_eq!(idx.count_between(DayType::Workday, jan1, jan8), Some(5));
    }

    #[test]
    fn bounds_outside_the_year() {
        let idx = YearIndex::build(2020, &WeekendsOnly).unwrap();
        let other = YearBound::Day(date(2021, 1, 1));
        assert_eq!(idx.count_to(DayType::Weekend, other), None);
        assert_eq!(idx.day_type(date(2019, 12, 31)), None);
        assert_eq!(
            idx.count_between(DayType::Weekend, YearBound::End, YearBound::Day(date(2020, 6, 1))),
            None
        );
        assert_eq!(
            idx.count_between(DayType::Workday, YearBound::Day(date(2020, 1, 1)), YearBound::End),
            Some(262)
        );
    }

    #[test]
    fn day_types_in_order() {
        let idx = YearIndex::build(2021, &WeekendsOnly).unwrap();
        let days: Vec<_> = idx.day_types().take(3).collect();
        // 2021-01-01 is a Friday
        assert_eq!(
            days,
            [
                (date(2021, 1, 1), DayType::Workday),
                (date(2021, 1, 2), DayType::Weekend),
                (date(2021, 1, 3), DayType::Weekend),
            ]
        );
    }
}
