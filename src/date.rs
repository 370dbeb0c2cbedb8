//! Solar dates as Julian day numbers.

use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

/// JDN of the day before 0001-01-01, chrono's `num_days_from_ce` origin.
const CE_EPOCH_JDN: i32 = 1_721_425;
/// JDN of 1970-01-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// A solar date, stored as its Julian day number.
///
/// Every date entering the almanac goes through this type, so stepping to the
/// previous day or laying out a 42-cell grid is integer arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }

    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Proleptic Gregorian date to `Date`.
    ///
    /// Returns `None` for a triple that is not a real calendar day, or one
    /// before the Julian period (4713 BC).
    ///
    /// ```
    /// use hoangdao::Date;
    ///
    /// assert_eq!(2460351, Date::from_gregorian(2024, 2, 10).unwrap().jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// assert_eq!(None, Date::from_gregorian(2024, 0, 1));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let month = u32::try_from(month).ok()?;
        let day = u32::try_from(day).ok()?;
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    /// `(year, month, day)` in the proleptic Gregorian calendar, with
    /// astronomical year numbering.
    pub fn gregorian(&self) -> (i32, i32, i32) {
        // Days counted from 0000-03-01, so the leap day ends each 400-year era.
        let z = self.jdn as i64 - UNIX_EPOCH_JDN + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + (month <= 2) as i64;
        (year as i32, month as i32, day as i32)
    }

    /// `YYYY-MM-DD`. Hash seeds embed dates in this form.
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{y:04}-{m:02}-{d:02}")
    }

    /// ISO day of week, `1..=7` for Monday through Sunday.
    ///
    /// ```
    /// use hoangdao::Date;
    ///
    /// assert_eq!(1, Date::from_gregorian(2026, 10, 19).unwrap().day_of_week());
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }

    pub fn is_weekend(&self) -> bool {
        self.day_of_week() >= 6
    }

    /// Position of the day in the sexagenary cycle, `1` (Giáp Tý) through
    /// `60` (Quý Hợi).
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60 + 1
    }

    /// Returns `None` before the Julian period.
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        u32::try_from(date.num_days_from_ce() + CE_EPOCH_JDN)
            .ok()
            .map(Self::from_jdn)
    }

    /// Returns `None` past chrono's year range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let days = i32::try_from(self.jdn).ok()? - CE_EPOCH_JDN;
        NaiveDate::from_num_days_from_ce_opt(days)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, days: i32) -> Date {
        Date::from_jdn(self.jdn.saturating_add_signed(days))
    }
}

/// Signed day count. Exact whenever the gap fits in an `i32`, wherever the
/// two JDNs lie.
impl Sub for Date {
    type Output = i32;
    fn sub(self, earlier: Date) -> i32 {
        self.jdn.wrapping_sub(earlier.jdn) as i32
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso_gregorian())
    }
}

/// Length of a Gregorian month, `0` when `month` is outside `1..=12`.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    let next = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        Date::from_gregorian(year, month, 1),
        Date::from_gregorian(next.0, next.1, 1),
    ) {
        (Some(first), Some(following)) => following - first,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: [((i32, i32, i32), u32, i32, u32); 5] = [
        ((1970, 1, 1), 2440588, 4, 18),
        ((1990, 5, 12), 2448024, 6, 14),
        ((2024, 2, 10), 2460351, 6, 41),
        ((2026, 10, 18), 2461332, 7, 2),
        ((2026, 10, 19), 2461333, 1, 3),
    ];

    #[test]
    fn gregorian_both_ways() {
        for ((y, m, d), jdn, _, _) in DATASET {
            assert_eq!(Some(Date::from_jdn(jdn)), Date::from_gregorian(y, m, d));
            assert_eq!((y, m, d), Date::from_jdn(jdn).gregorian(), "{jdn}");
        }
        assert_eq!((-4713, 11, 24), Date::from_jdn(0).gregorian());
    }

    #[test]
    fn rejects_impossible_days() {
        for (y, m, d) in [(2023, 2, 29), (2024, 13, 1), (2024, 4, 31), (2024, 1, 0), (2024, -1, 5), (-4714, 1, 1)] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekday_and_cycle() {
        for ((y, m, d), _, dow, cycle) in DATASET {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(dow, date.day_of_week(), "{}", date.iso_gregorian());
            assert_eq!(cycle, date.sexagenary(), "{}", date.iso_gregorian());
            assert_eq!(dow >= 6, date.is_weekend());
        }
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 3, 1).unwrap();
        assert_eq!("2024-02-29", (date + -1).iso_gregorian());
        assert_eq!("2024-03-31", (date + 30).iso_gregorian());
        assert_eq!(
            366,
            Date::from_gregorian(2025, 1, 1).unwrap() - Date::from_gregorian(2024, 1, 1).unwrap()
        );
        assert_eq!(Date::from_jdn(0), Date::from_jdn(3) + -10);
        let high = Date::from_jdn(i32::MAX as u32 + 10);
        let low = Date::from_jdn(i32::MAX as u32 - 10);
        assert_eq!(20, high - low);
        assert_eq!(-20, low - high);
    }

    #[test]
    fn month_lengths() {
        for ((y, m), std) in [((2023, 2), 28), ((2024, 2), 29), ((1900, 2), 28), ((2000, 2), 29), ((2024, 4), 30), ((2024, 12), 31), ((2024, 13), 0), ((2024, 0), 0)] {
            assert_eq!(std, days_in_month(y, m), "{y:04}-{m:02}");
        }
    }

    #[test]
    fn chrono_bridge() {
        let naive = NaiveDate::from_ymd_opt(1990, 5, 12).unwrap();
        let date = Date::from_naive(naive).unwrap();
        assert_eq!("1990-05-12", date.iso_gregorian());
        assert_eq!(Some(naive), date.to_naive());
        assert_eq!(None, Date::from_jdn(u32::MAX).to_naive());
    }

    #[test]
    fn serializes_as_iso() {
        let date = Date::from_gregorian(2026, 10, 19).unwrap();
        assert_eq!("\"2026-10-19\"", serde_json::to_string(&date).unwrap());
    }
}
