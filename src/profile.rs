//! Birth profile of the person a reading is for.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::date::Date;
use crate::error::{AlmanacError, Result};
use crate::selector;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Nam,
    #[serde(rename = "Nữ")]
    Nu,
}

/// Identity fields are opaque seed material; only the birth date and time
/// are ever parsed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub gender: Gender,
    /// `YYYY-MM-DD` or `YYYY/MM/DD`
    pub dob_solar: String,
    /// `HH:MM`
    pub birth_time: String,
    pub birth_place: String,
}

impl UserProfile {
    /// Parsed birth date.
    ///
    /// # Example
    ///
    /// ```
    /// use hoangdao::profile::{Gender, UserProfile};
    ///
    /// let profile = UserProfile {
    ///     full_name: "Lê Minh Tuấn".into(),
    ///     gender: Gender::Nam,
    ///     dob_solar: "1990/05/12".into(),
    ///     birth_time: "08:30".into(),
    ///     birth_place: "Hà Nội".into(),
    /// };
    /// assert_eq!("1990-05-12", profile.birth_date().unwrap().iso_gregorian());
    /// ```
    pub fn birth_date(&self) -> Result<Date> {
        let text = self.dob_solar.trim();
        ["%Y-%m-%d", "%Y/%m/%d"]
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            .and_then(Date::from_naive)
            .ok_or_else(|| AlmanacError::MalformedProfile {
                field: "dobSolar",
                value: self.dob_solar.clone(),
            })
    }

    /// Parsed birth time.
    pub fn birth_time(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(self.birth_time.trim(), "%H:%M").map_err(|_| {
            AlmanacError::MalformedProfile {
                field: "birthTime",
                value: self.birth_time.clone(),
            }
        })
    }

    /// Clock hour of birth, `0..=23`. An unreadable time counts as midnight,
    /// which falls in the Tý hour.
    pub fn birth_hour(&self) -> u32 {
        match self.birth_time() {
            Ok(time) => time.hour(),
            Err(err) => {
                warn!(%err, "unreadable birth time, using the Tý hour");
                0
            }
        }
    }

    /// `name|dob|time|place`, the seed of every profile-keyed pick.
    pub fn seed(&self) -> String {
        selector::seed([
            &self.full_name,
            &self.dob_solar,
            &self.birth_time,
            &self.birth_place,
        ])
    }

    /// [`UserProfile::seed`] followed by the ISO date of `date`.
    pub fn seed_for(&self, date: Date) -> String {
        format!("{}|{}", self.seed(), date.iso_gregorian())
    }
}

#[cfg(test)]
pub(crate) fn sample() -> UserProfile {
    UserProfile {
        full_name: "Lê Minh Tuấn".into(),
        gender: Gender::Nam,
        dob_solar: "1990-05-12".into(),
        birth_time: "08:30".into(),
        birth_place: "Hà Nội".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_dates() {
        let dataset = [
            ("1990-05-12", Some("1990-05-12")),
            ("1990/05/12", Some("1990-05-12")),
            (" 2000-01-02 ", Some("2000-01-02")),
            ("12-05-1990", None),
            ("1990-02-30", None),
            ("", None),
        ];
        for (text, std) in dataset {
            let profile = UserProfile {
                dob_solar: text.into(),
                ..sample()
            };
            match std {
                Some(std) => assert_eq!(std, profile.birth_date().unwrap().iso_gregorian()),
                None => assert!(
                    matches!(
                        profile.birth_date(),
                        Err(AlmanacError::MalformedProfile { field: "dobSolar", .. })
                    ),
                    "{text:?}"
                ),
            }
        }
    }

    #[test]
    fn birth_hours() {
        for (text, std) in [("08:30", 8), ("23:59", 23), ("00:05", 0), ("noon", 0), ("25:00", 0)] {
            let profile = UserProfile {
                birth_time: text.into(),
                ..sample()
            };
            assert_eq!(std, profile.birth_hour(), "{text:?}");
        }
    }

    #[test]
    fn seeds() {
        let profile = sample();
        assert_eq!("Lê Minh Tuấn|1990-05-12|08:30|Hà Nội", profile.seed());
        let date = Date::from_gregorian(2026, 10, 19).unwrap();
        assert_eq!(
            "Lê Minh Tuấn|1990-05-12|08:30|Hà Nội|2026-10-19",
            profile.seed_for(date)
        );
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{"fullName":"A","gender":"Nữ","dobSolar":"2001-01-01","birthTime":"12:00","birthPlace":"Huế"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(Gender::Nu, profile.gender);
        assert_eq!(12, profile.birth_hour());
    }
}
