//! Miscellaneous utilities.

/// Compact date-string formatting helpers.
pub mod data_formatters;

/// Compact date-string parsing helpers.
pub mod data_parsers;
