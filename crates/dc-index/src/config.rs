use std::path::{Path, PathBuf};

use dc_core::errors::{Error, Result};
use dc_time::Date;
use serde::Deserialize;

use crate::overrides::DEFAULT_OVERRIDES_PATH;

/// Year span and override source of a calendar service.
///
/// ```json
/// { "start_year": 2016, "end_year": 2024, "overrides_path": "custom/festival.json" }
/// ```
///
/// Every field is optional.  `end_year` defaults to the current year and
/// `overrides_path` may be `null` to disable overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// First year to load.
    #[serde(default = "default_start_year")]
    pub start_year: u16,

    /// Last year to load (inclusive).  `None` means the current year.
    #[serde(default)]
    pub end_year: Option<u16>,

    /// Override file.  `None` means weekday defaults only.
    #[serde(default = "default_overrides_path")]
    pub overrides_path: Option<PathBuf>,
}

fn default_start_year() -> u16 {
    2016
}
fn default_overrides_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_OVERRIDES_PATH))
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: None,
            overrides_path: default_overrides_path(),
        }
    }
}

impl IndexConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::ConfigRead(format!("invalid index configuration: {e}")))
    }

    /// Read a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigRead(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Set the first year to load.
    pub fn with_start_year(mut self, year: u16) -> Self {
        self.start_year = year;
        self
    }

    /// Set the last year to load.
    pub fn with_end_year(mut self, year: u16) -> Self {
        self.end_year = Some(year);
        self
    }

    /// Set (or clear) the override file.
    pub fn with_overrides_path(mut self, path: Option<PathBuf>) -> Self {
        self.overrides_path = path;
        self
    }

    /// The last year to load: the configured one, or the year of the
    /// evaluation date.
    pub fn resolve_end_year(&self) -> Result<u16> {
        match self.end_year {
            Some(year) => Ok(year),
            None => Ok(Date::evaluation_date()?.year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::settings::ScopedEvaluationDate;

    #[test]
    fn defaults() {
        let config = IndexConfig::from_json_str("{}").unwrap();
        assert_eq!(config, IndexConfig::default());
        assert_eq!(config.start_year, 2016);
        assert_eq!(
            config.overrides_path.as_deref(),
            Some(Path::new("custom/festival.json"))
        );
    }

    #[test]
    fn explicit_fields() {
        let config = IndexConfig::from_json_str(
            r#"{"start_year": 2019, "end_year": 2021, "overrides_path": null}"#,
        )
        .unwrap();
        assert_eq!(config.start_year, 2019);
        assert_eq!(config.resolve_end_year().unwrap(), 2021);
        assert_eq!(config.overrides_path, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = IndexConfig::from_json_str(r#"{"start": 2019}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigRead(_)));
    }

    #[test]
    fn end_year_follows_evaluation_date() {
        let pinned = Date::from_ymd(2023, 6, 15).unwrap();
        let _guard = ScopedEvaluationDate::new(pinned.serial());
        assert_eq!(IndexConfig::default().resolve_end_year().unwrap(), 2023);
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daycal.json");
        std::fs::write(&path, r#"{"start_year": 2020, "end_year": 2020}"#).unwrap();
        let config = IndexConfig::from_json_file(&path).unwrap();
        assert_eq!(config.start_year, 2020);

        let missing = IndexConfig::from_json_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(Error::ConfigRead(_))));
    }
}
