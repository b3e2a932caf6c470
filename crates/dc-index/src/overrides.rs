//! Loading festival / workday overrides from JSON.
//!
//! The override file is a single JSON object mapping `YYYYMMDD` date strings
//! to a day type, either as its numeric code (`0` workday, `1` weekend,
//! `2` festival) or as its tag (`"festival"`):
//!
//! ```json
//! { "20200101": 2, "20200119": 0, "20201001": "festival" }
//! ```
//!
//! Only dates that deviate from the weekday default need to appear.  A bad
//! entry is logged and skipped; it never aborts the load.

use std::path::Path;

use dc_core::errors::{Error, Result};
use dc_time::{Date, DayType, OverrideCalendar};
use serde_json::{Map, Value};

/// Where the service looks for overrides unless configured otherwise.
pub const DEFAULT_OVERRIDES_PATH: &str = "custom/festival.json";

const CALENDAR_NAME: &str = "Overrides";

/// Parse an override document.
///
/// # Errors
/// [`Error::ConfigRead`] if the document is not a JSON object.  Individual
/// malformed entries are skipped with a warning instead.
pub fn parse_overrides(json: &str) -> Result<OverrideCalendar> {
    let entries: Map<String, Value> = serde_json::from_str(json)
        .map_err(|e| Error::ConfigRead(format!("override document is not a JSON object: {e}")))?;

    let mut calendar = OverrideCalendar::new(CALENDAR_NAME);
    let mut skipped = 0usize;
    for (key, value) in &entries {
        match parse_entry(key, value) {
            Ok((date, day_type)) => {
                calendar.set_override(date, day_type);
            }
            Err(e) => {
                skipped += 1;
                log::warn!("skipping override: {e}");
            }
        }
    }

    if skipped > 0 {
        log::warn!(
            "{skipped} of {} override entries were malformed",
            entries.len()
        );
    }
    Ok(calendar)
}

/// Decode one `"YYYYMMDD": type` entry.
pub fn parse_entry(key: &str, value: &Value) -> Result<(Date, DayType)> {
    let malformed = |reason: String| Error::MalformedOverride {
        key: key.to_string(),
        reason,
    };

    let date = Date::parse_compact(key).map_err(|e| malformed(e.to_string()))?;
    let day_type = match value {
        Value::Number(n) => n.as_u64().and_then(DayType::from_code),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
    .ok_or_else(|| malformed(format!("unknown day type {value}")))?;

    Ok((date, day_type))
}

/// Read and parse the override file at `path`.
///
/// # Errors
/// [`Error::ConfigRead`] if the file cannot be read (including when it does
/// not exist) or is not a JSON object.
pub fn read_overrides(path: impl AsRef<Path>) -> Result<OverrideCalendar> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::ConfigRead(format!("{}: {e}", path.display())))?;
    parse_overrides(&text)
}

/// Load overrides, degrading to an empty set on any failure.
///
/// `None` and a missing file both mean "weekday defaults only".  An
/// unreadable or malformed file is logged and treated the same way.
pub fn load_overrides(path: Option<&Path>) -> OverrideCalendar {
    let Some(path) = path else {
        return OverrideCalendar::new(CALENDAR_NAME);
    };

    match std::fs::read_to_string(path) {
        Ok(text) => match parse_overrides(&text) {
            Ok(calendar) => {
                log::info!(
                    "loaded {} overrides from {}",
                    calendar.override_count(),
                    path.display()
                );
                calendar
            }
            Err(e) => {
                log::warn!("{}: {e}; using weekday defaults", path.display());
                OverrideCalendar::new(CALENDAR_NAME)
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no override file at {}; using weekday defaults", path.display());
            OverrideCalendar::new(CALENDAR_NAME)
        }
        Err(e) => {
            log::warn!("cannot read {}: {e}; using weekday defaults", path.display());
            OverrideCalendar::new(CALENDAR_NAME)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_time::Calendar;

    fn date(s: &str) -> Date {
        Date::parse_compact(s).unwrap()
    }

    #[test]
    fn codes_and_tags() {
        let cal = parse_overrides(r#"{"20200101": 2, "20200119": 0, "20201001": "Festival"}"#)
            .unwrap();
        assert_eq!(cal.override_count(), 3);
        assert_eq!(cal.day_type(date("20200101")), DayType::Festival);
        assert_eq!(cal.day_type(date("20200119")), DayType::Workday);
        assert_eq!(cal.day_type(date("20201001")), DayType::Festival);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let cal = parse_overrides(
            r#"{
                "20200101": 2,
                "2020-01-02": 2,
                "20200230": 2,
                "20200103": 7,
                "20200104": -1,
                "20200105": null,
                "20200106": "rest"
            }"#,
        )
        .unwrap();
        assert_eq!(cal.overrides().collect::<Vec<_>>(), [(date("20200101"), DayType::Festival)]);
    }

    #[test]
    fn entry_errors_name_the_key() {
        let err = parse_entry("20200103", &Value::from(9)).unwrap_err();
        match err {
            Error::MalformedOverride { key, reason } => {
                assert_eq!(key, "20200103");
                assert!(reason.contains('9'), "{reason}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_object_documents() {
        assert!(matches!(parse_overrides("[1, 2]"), Err(Error::ConfigRead(_))));
        assert!(matches!(parse_overrides("{"), Err(Error::ConfigRead(_))));
        assert!(parse_overrides("{}").unwrap().is_empty());
    }

    #[test]
    fn missing_file_means_no_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("festival.json");
        assert!(load_overrides(Some(&path)).is_empty());
        assert!(load_overrides(None).is_empty());
        assert!(matches!(read_overrides(&path), Err(Error::ConfigRead(_))));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("festival.json");
        std::fs::write(&path, r#"{"20201001": 2, "20200927": 0}"#).unwrap();
        let cal = load_overrides(Some(&path));
        assert_eq!(cal.override_count(), 2);
        assert_eq!(read_overrides(&path).unwrap(), cal);

        std::fs::write(&path, "not json").unwrap();
        assert!(load_overrides(Some(&path)).is_empty());
    }
}
