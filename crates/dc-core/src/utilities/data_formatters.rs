//! Data formatting helpers producing the compact `YYYYMMDD` / `YYYYMM`
//! strings used as map keys and in query parameters.

/// Format a date as `YYYYMMDD`.
pub fn format_compact_date(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}{month:02}{day:02}")
}

/// Format a month as `YYYYMM`.
pub fn format_compact_month(year: u16, month: u8) -> String {
    format!("{year:04}{month:02}")
}
