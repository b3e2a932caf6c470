//! Data parsing helpers for the compact, separator-free date strings used in
//! keys and query parameters: `YYYYMMDD`, `YYYYMM`, and `YYYY`.
//!
//! These only check the shape (digit count, month in 1–12, day in 1–31).
//! Calendar validity (e.g. February 30) is checked when a `Date` is built.

use crate::errors::{Error, Result};

/// Parse an exactly-`N`-digit ASCII decimal field.
fn digits<const N: usize>(input: &str, field: &str) -> Result<u32> {
    if input.len() != N || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(input, format!("{field} must be exactly {N} digits")));
    }
    // All bytes are ASCII digits and N <= 8, so this cannot overflow.
    Ok(input
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0')))
}

/// Parse a `YYYY` year string.
pub fn parse_compact_year(s: &str) -> Result<u16> {
    let year = digits::<4>(s, "year")?;
    Ok(year as u16)
}

/// Parse a `YYYYMM` month string into `(year, month)`.
pub fn parse_compact_month(s: &str) -> Result<(u16, u8)> {
    if s.len() != 6 || !s.is_ascii() {
        return Err(Error::parse(s, "month must be exactly 6 digits (YYYYMM)"));
    }
    let year = parse_compact_year(&s[..4]).map_err(|_| Error::parse(s, "bad year digits"))?;
    let month = digits::<2>(&s[4..], "month").map_err(|_| Error::parse(s, "bad month digits"))?;
    if !(1..=12).contains(&month) {
        return Err(Error::parse(s, format!("month {month} out of range [1, 12]")));
    }
    Ok((year, month as u8))
}

/// Parse a `YYYYMMDD` date string into `(year, month, day)`.
///
/// # Example
/// ```
/// use dc_core::utilities::data_parsers::parse_compact_date;
/// assert_eq!(parse_compact_date("20200229").unwrap(), (2020, 2, 29));
/// assert!(parse_compact_date("2020-02-29").is_err());
/// ```
pub fn parse_compact_date(s: &str) -> Result<(u16, u8, u8)> {
    if s.len() != 8 || !s.is_ascii() {
        return Err(Error::parse(s, "date must be exactly 8 digits (YYYYMMDD)"));
    }
    let (year, month) = parse_compact_month(&s[..6]).map_err(|e| match e {
        Error::Parse { reason, .. } => Error::parse(s, reason),
        other => other,
    })?;
    let day = digits::<2>(&s[6..], "day").map_err(|_| Error::parse(s, "bad day digits"))?;
    if !(1..=31).contains(&day) {
        return Err(Error::parse(s, format!("day {day} out of range [1, 31]")));
    }
    Ok((year, month, day as u8))
}
