//! `DayType`: the workday / weekend / festival classification of a date.

use std::str::FromStr;

use dc_core::errors::{Error, Result};

/// Classification of a calendar date.
///
/// The numeric codes (0, 1, 2) are the ones used in override files.  The
/// variants carry no meaningful order; they are tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DayType {
    /// An ordinary working day (code 0).
    Workday = 0,
    /// A regular weekend day (code 1).
    Weekend = 1,
    /// A public holiday or other festival (code 2).
    Festival = 2,
}

impl DayType {
    /// All day types, in code order.
    pub const ALL: [DayType; 3] = [DayType::Workday, DayType::Weekend, DayType::Festival];

    /// Construct from the numeric code used in override files.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(DayType::Workday),
            1 => Some(DayType::Weekend),
            2 => Some(DayType::Festival),
            _ => None,
        }
    }

    /// Return the numeric code.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for weekends and festivals.
    pub fn is_rest_day(&self) -> bool {
        !matches!(self, DayType::Workday)
    }

    /// Lower-case tag (`"workday"`, `"weekend"`, `"festival"`).
    pub fn tag(&self) -> &'static str {
        match self {
            DayType::Workday => "workday",
            DayType::Weekend => "weekend",
            DayType::Festival => "festival",
        }
    }
}

impl FromStr for DayType {
    type Err = Error;

    /// Accepts the tags case-insensitively, or a numeric code.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u64>() {
            return DayType::from_code(code)
                .ok_or_else(|| Error::parse(s, format!("unknown day type code {code}")));
        }
        DayType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::parse(s, "expected workday, weekend or festival"))
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
