//! Tunables, layered from an optional file and `HOANGDAO__*` environment
//! variables over the built-in defaults.

use std::path::Path;

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::hoang_dao::Subject;
use crate::lunar::vietnamese::VietnameseCalendar;

pub const ENV_PREFIX: &str = "HOANGDAO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacConfig {
    /// UTC offset of the reference lunar calendar, in hours.
    pub timezone_offset_hours: f64,
    /// Hours scoring strictly above this are "very good".
    pub very_good_hour_threshold: u32,
    /// Days scoring at least this make the month's auspicious list.
    pub auspicious_day_threshold: u32,
    /// Whom hours are scored for when no profile is given.
    pub default_subject: Subject,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            timezone_offset_hours: 7.0,
            very_good_hour_threshold: 80,
            auspicious_day_threshold: 70,
            default_subject: Subject::default(),
        }
    }
}

impl AlmanacConfig {
    /// Reads `path` (any format the `config` crate knows by extension), then
    /// the environment, e.g. `HOANGDAO__VERY_GOOD_HOUR_THRESHOLD=85`.
    /// Missing keys keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Parses TOML text over the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    /// Reference calendar at the configured offset.
    pub fn calendar(&self) -> VietnameseCalendar {
        VietnameseCalendar::new(self.timezone_offset_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::{Chi, Element};

    #[test]
    fn defaults() {
        let config = AlmanacConfig::default();
        assert_eq!(7.0, config.timezone_offset_hours);
        assert_eq!(80, config.very_good_hour_threshold);
        assert_eq!(70, config.auspicious_day_threshold);
        assert_eq!(Subject::default(), config.default_subject);
        assert_eq!(7.0, config.calendar().tz_offset_hours());
    }

    #[test]
    fn empty_sources_keep_defaults() {
        assert_eq!(AlmanacConfig::default(), AlmanacConfig::from_toml("").unwrap());
    }

    #[test]
    fn partial_file() {
        let config = AlmanacConfig::from_toml(
            r#"
            timezone_offset_hours = 8.0
            very_good_hour_threshold = 85

            [default_subject]
            chi = "Ngọ"
            element = "Thổ"
            "#,
        )
        .unwrap();
        assert_eq!(8.0, config.timezone_offset_hours);
        assert_eq!(85, config.very_good_hour_threshold);
        assert_eq!(70, config.auspicious_day_threshold);
        assert_eq!(
            Subject {
                chi: Chi::Ngo,
                element: Element::Earth
            },
            config.default_subject
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AlmanacConfig::from_toml("very_good_hour_threshold = \"high\"").is_err());
        assert!(AlmanacConfig::from_toml("[default_subject]\nchi = \"Cat\"\nelement = \"Kim\"").is_err());
    }
}
