//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch, which
//! makes "days between" an exact integer subtraction with no time-of-day
//! component to get wrong.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! The canonical text form is the compact `YYYYMMDD` string used in override
//! files and query parameters; [`Date::parse_compact`] and the `Display` impl
//! convert to and from it.

use std::str::FromStr;

use chrono::Datelike;
use dc_core::errors::{Error, Result};
use dc_core::settings::Settings;
use dc_core::utilities::data_formatters::format_compact_date;
use dc_core::utilities::data_parsers::parse_compact_date;

use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    /// First representable year.
    pub const MIN_YEAR: u16 = 1900;

    /// Last representable year.
    pub const MAX_YEAR: u16 = 2199;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial falls outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a compact `YYYYMMDD` string.
    ///
    /// Anything that is not exactly eight ASCII digits naming a real calendar
    /// day in the representable range is an [`Error::Parse`].
    ///
    /// ```
    /// use dc_time::Date;
    ///
    /// let d = Date::parse_compact("20200229").unwrap();
    /// assert_eq!((d.year(), d.month(), d.day_of_month()), (2020, 2, 29));
    /// assert!(Date::parse_compact("20190229").is_err());
    /// ```
    pub fn parse_compact(s: &str) -> Result<Self> {
        let (year, month, day) = parse_compact_date(s)?;
        Date::from_ymd(year, month, day).map_err(|e| match e {
            Error::Date(reason) => Error::parse(s, reason),
            other => other,
        })
    }

    /// January 1st of `year`.
    pub fn first_of_year(year: u16) -> Result<Self> {
        Date::from_ymd(year, 1, 1)
    }

    /// December 31st of `year`.
    pub fn last_of_year(year: u16) -> Result<Self> {
        Date::from_ymd(year, 12, 31)
    }

    /// Today's date according to the local system clock.
    pub fn todays_date() -> Result<Self> {
        let today = chrono::Local::now().date_naive();
        let year = u16::try_from(today.year())
            .map_err(|_| Error::Date(format!("system year {} out of range", today.year())))?;
        Date::from_ymd(year, today.month() as u8, today.day() as u8)
    }

    /// The evaluation date pinned in [`Settings`], or today's date if none is
    /// set.
    pub fn evaluation_date() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Date::from_serial(serial),
            None => Date::todays_date(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Format as a compact `YYYYMMDD` string.
    pub fn to_compact_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format_compact_date(y, m, d)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_serial(self.0 + n)
            .map_err(|_| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// The following day, or `None` after [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then(|| Date(self.0 + 1))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Iterate over the half-open range `[self, end)` in calendar order.
    ///
    /// ```
    /// use dc_time::Date;
    ///
    /// let start = Date::parse_compact("20200227").unwrap();
    /// let end = Date::parse_compact("20200302").unwrap();
    /// let days: Vec<_> = start.until(end).map(|d| d.to_compact_string()).collect();
    /// assert_eq!(days, ["20200227", "20200228", "20200229", "20200301"]);
    /// ```
    pub fn until(self, end: Date) -> impl Iterator<Item = Date> {
        (self.0..end.0.max(self.0)).map(Date)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Conversions / display ─────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_compact(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}{m:02}{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of days in `year`, taken as the day-of-year of its last day.
pub fn days_in_year(year: u16) -> Result<u16> {
    Ok(Date::last_of_year(year)?.day_of_year())
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1901, year); 1900 itself is not a leap year
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until serial falls within it
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d, Date::MIN);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2016, 1, 1),
            (2019, 12, 31),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2020-01-01 is a Wednesday, 2020-02-01 a Saturday
        assert_eq!(Date::from_ymd(2020, 1, 1).unwrap().weekday(), Weekday::Wednesday);
        assert_eq!(Date::from_ymd(2020, 2, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(2024, 1, 6).unwrap().weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2019).unwrap(), 365);
        assert_eq!(days_in_year(2020).unwrap(), 366);
        assert_eq!(days_in_year(1900).unwrap(), 365);
        assert_eq!(days_in_year(2000).unwrap(), 366);
        assert_eq!(days_in_year(2100).unwrap(), 365);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(Date::from_ymd(2020, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(Date::from_ymd(2020, 3, 1).unwrap().day_of_year(), 61);
        assert_eq!(Date::from_ymd(2019, 3, 1).unwrap().day_of_year(), 60);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2019, 12, 30).unwrap();
        assert_eq!(d + 3, Date::from_ymd(2020, 1, 2).unwrap());
        assert_eq!(Date::from_ymd(2020, 3, 1).unwrap() - Date::from_ymd(2020, 2, 1).unwrap(), 29);
        assert_eq!(d.days_between(d - 30), -30);
        assert!(Date::MAX.add_days(1).is_err());
        assert_eq!(Date::MAX.succ(), None);
    }

    #[test]
    fn test_parse_compact() {
        let d = Date::parse_compact("20191230").unwrap();
        assert_eq!(d, Date::from_ymd(2019, 12, 30).unwrap());
        assert_eq!(d.to_compact_string(), "20191230");
        assert_eq!(d.to_string(), "20191230");
        assert_eq!(format!("{d:?}"), "Date(2019-12-30)");

        assert!(matches!(Date::parse_compact("20190229"), Err(Error::Parse { .. })));
        assert!(matches!(Date::parse_compact("18991231"), Err(Error::Parse { .. })));
        assert!(matches!(Date::parse_compact("2019-1-1"), Err(Error::Parse { .. })));
        assert!("20200101".parse::<Date>().is_ok());
    }

    #[test]
    fn test_until_is_half_open() {
        let d = Date::from_ymd(2020, 1, 1).unwrap();
        assert_eq!(d.until(d).count(), 0);
        assert_eq!(d.until(d + 31).count(), 31);
        assert_eq!((d + 5).until(d).count(), 0);
    }
}
