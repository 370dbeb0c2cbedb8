//! Lunar calendar boundary.
//!
//! Conversion between solar and lunar dates, together with the textual year,
//! month and day pillars, comes from a [`LunarDateProvider`]. Everything else
//! in the crate consumes its output. [`vietnamese::VietnameseCalendar`] is
//! the built-in provider.

use serde::Serialize;
use tracing::debug;

use crate::date::Date;
use crate::error::{AlmanacError, Result};
use crate::sexagenary::{CanChi, Chi};

pub mod vietnamese;

/// A date in the lunar calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    /// `1..=30`
    pub day: u32,
    /// `1..=12`
    pub month: u32,
    pub year: i32,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day,
            month,
            year,
            is_leap_month: false,
        }
    }
    /// Same date in the leap month following month `self.month`.
    pub fn leap(self) -> Self {
        Self {
            is_leap_month: true,
            ..self
        }
    }
}

/// What a provider knows about one solar day.
///
/// Pillars are `"<Can> <Chi>"` strings exactly as the provider spells them;
/// accessors parse them on demand and fail on unknown symbols.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarInfo {
    pub lunar_date: LunarDate,
    pub year_can_chi: String,
    pub month_can_chi: String,
    pub day_can_chi: String,
}

impl LunarInfo {
    pub fn year_pillar(&self) -> Result<CanChi> {
        CanChi::parse(&self.year_can_chi)
    }
    pub fn month_pillar(&self) -> Result<CanChi> {
        CanChi::parse(&self.month_can_chi)
    }
    pub fn day_pillar(&self) -> Result<CanChi> {
        CanChi::parse(&self.day_can_chi)
    }
    /// Branch of the year, the zodiac animal.
    pub fn year_chi(&self) -> Result<Chi> {
        chi_of(&self.year_can_chi)
    }
    pub fn day_chi(&self) -> Result<Chi> {
        chi_of(&self.day_can_chi)
    }
}

/// Branch of a `"<Can> <Chi>"` string: the text after the last space.
///
/// ```
/// use hoangdao::lunar::chi_of;
/// use hoangdao::sexagenary::Chi;
///
/// assert_eq!(Chi::Ngo, chi_of("Canh Ngọ").unwrap());
/// assert!(chi_of("Canh").is_err());
/// ```
pub fn chi_of(can_chi: &str) -> Result<Chi> {
    let trimmed = can_chi.trim();
    match trimmed.rsplit_once(' ') {
        Some((_, chi)) => chi.parse(),
        None => Err(AlmanacError::invalid_symbol(trimmed)),
    }
}

/// Source of lunar dates and base pillars.
///
/// Implementations must be pure: the same input always gives the same
/// answer, so callers may query in parallel and never retry.
pub trait LunarDateProvider: Send + Sync {
    /// Lunar date and pillars of a solar (Gregorian) date.
    fn from_solar(&self, day: u32, month: u32, year: i32) -> Result<LunarInfo>;
    /// Solar date of a lunar date.
    fn from_lunar(&self, lunar: LunarDate) -> Result<Date>;
}

/// Queries `provider` for `date`.
pub fn lunar_info(provider: &dyn LunarDateProvider, date: Date) -> Result<LunarInfo> {
    let (y, m, d) = date.gregorian();
    let info = provider.from_solar(d as u32, m as u32, y)?;
    debug!(
        date = %date.iso_gregorian(),
        lunar_day = info.lunar_date.day,
        lunar_month = info.lunar_date.month,
        leap = info.lunar_date.is_leap_month,
        day_can_chi = %info.day_can_chi,
        "lunar lookup"
    );
    Ok(info)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::sexagenary::Can;

    #[test]
    fn pillars() {
        let info = Fixed::new(18, 4, "Canh Ngọ", "Tân Tỵ", "Đinh Sửu").0;
        assert_eq!(Can::Canh, info.year_pillar().unwrap().can());
        assert_eq!(Chi::Ngo, info.year_chi().unwrap());
        assert_eq!(Chi::Ti, info.month_pillar().unwrap().chi());
        assert_eq!(Chi::Suu, info.day_chi().unwrap());
    }

    #[test]
    fn unknown_symbols_fail() {
        let info = Fixed::new(1, 1, "Năm Canh Ngọ", "Tân", "Đinh Mèo").0;
        assert!(info.year_pillar().is_ok());
        for result in [info.month_pillar().map(|_| ()), info.day_chi().map(|_| ())] {
            assert!(matches!(result, Err(AlmanacError::InvalidSymbol { .. })));
        }
    }

    #[test]
    fn provider_failure_propagates() {
        let date = Date::from_gregorian(2024, 2, 10).unwrap();
        assert!(matches!(
            lunar_info(&Unavailable, date),
            Err(AlmanacError::ProviderUnavailable { .. })
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let info = Fixed::new(1, 1, "Giáp Thìn", "Bính Dần", "Giáp Thìn").0;
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(1, json["lunarDate"]["day"]);
        assert_eq!(false, json["lunarDate"]["isLeapMonth"]);
        assert_eq!("Giáp Thìn", json["yearCanChi"]);
    }
}
