//! The Vietnamese lunisolar calendar, computed.
//!
//! Months start on the local day of the new moon. Month 11 is the month
//! containing the winter solstice; a year of 13 months between two months 11
//! gets a leap month, which is the first month that contains no major solar
//! term (no 30° crossing of the Sun's longitude). Everything is evaluated at
//! a fixed UTC offset, UTC+7 for Vietnam, which is why the calendar
//! sometimes disagrees with the Chinese one (UTC+8) by a day or a month.

use crate::astro::{self, JulianDate};
use crate::date::Date;
use crate::error::{AlmanacError, Result};
use crate::lunar::{LunarDate, LunarDateProvider, LunarInfo};
use crate::sexagenary::{Can, CanChi, Chi};

/// Solar years the series are trusted for.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1800..=2199;

const SYNODIC_MONTH: f64 = 29.530588853;
const EPOCH_NEW_MOON: f64 = 2415021.076998695;

/// Built-in [`LunarDateProvider`].
///
/// # Example
///
/// ```
/// use hoangdao::lunar::{LunarDate, LunarDateProvider, vietnamese::VietnameseCalendar};
///
/// let calendar = VietnameseCalendar::default();
/// let info = calendar.from_solar(10, 2, 2024).unwrap(); // Tết Giáp Thìn
/// assert_eq!(LunarDate::new(1, 1, 2024), info.lunar_date);
/// assert_eq!("Giáp Thìn", info.year_can_chi);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VietnameseCalendar {
    tz_offset_hours: f64,
}

impl Default for VietnameseCalendar {
    fn default() -> Self {
        Self::new(7.0)
    }
}

impl VietnameseCalendar {
    /// Calendar computed at `tz_offset_hours` east of UTC.
    pub fn new(tz_offset_hours: f64) -> Self {
        Self { tz_offset_hours }
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    /// Local day of the `k`-th new moon since 1900-01-01.
    fn new_moon_day(&self, k: i32) -> Date {
        astro::new_moon(k).date_in_timezone(self.tz_offset_hours)
    }

    /// 30° sector `0..=11` of the Sun's longitude at local midnight.
    fn sun_sector(&self, date: Date) -> u32 {
        let jd = JulianDate::local_midnight(date, self.tz_offset_hours);
        (astro::sun_longitude(jd) / 30.0).floor() as u32 % 12
    }

    /// First day of month 11 of lunar year `year`.
    fn month11(&self, year: i32) -> Result<Date> {
        let dec31 = solar(year, 12, 31)?;
        let k = ((dec31.jdn() as f64 - 2415021.0) / SYNODIC_MONTH).floor() as i32;
        let start = self.new_moon_day(k);
        // Still in the sector before the solstice: the month ending the year
        // began a lunation earlier.
        if self.sun_sector(start) >= 9 {
            Ok(self.new_moon_day(k - 1))
        } else {
            Ok(start)
        }
    }

    /// Offset, counted in months from month 11 starting at `a11`, of the
    /// leap month of a 13-month year.
    fn leap_month_offset(&self, a11: Date) -> i32 {
        let k = ((a11.jdn() as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH + 0.5).floor() as i32;
        let mut i = 1;
        let mut arc = self.sun_sector(self.new_moon_day(k + i));
        loop {
            let last = arc;
            i += 1;
            arc = self.sun_sector(self.new_moon_day(k + i));
            if arc == last || i >= 14 {
                return i - 1;
            }
        }
    }

    /// Lunar date of a solar date.
    ///
    /// # Example
    ///
    /// ```
    /// use hoangdao::Date;
    /// use hoangdao::lunar::{LunarDate, vietnamese::VietnameseCalendar};
    ///
    /// let calendar = VietnameseCalendar::default();
    /// let date = Date::from_gregorian(2023, 3, 22).unwrap();
    /// assert_eq!(LunarDate::new(1, 2, 2023).leap(), calendar.lunar_date(date).unwrap());
    /// ```
    pub fn lunar_date(&self, date: Date) -> Result<LunarDate> {
        let year = date.gregorian().0;
        check_year(year)?;
        let k = astro::lunation(date.jdn() as f64);
        let mut month_start = self.new_moon_day(k + 1);
        if month_start > date {
            month_start = self.new_moon_day(k);
        }
        let (a11, b11, mut lunar_year) = {
            let m11 = self.month11(year)?;
            if m11 >= month_start {
                (self.month11(year - 1)?, m11, year)
            } else {
                (m11, self.month11(year + 1)?, year + 1)
            }
        };
        let day = (date - month_start + 1) as u32;
        let diff = (month_start - a11) / 29;
        let mut is_leap_month = false;
        let mut month = diff + 11;
        if b11 - a11 > 365 {
            let leap_offset = self.leap_month_offset(a11);
            if diff >= leap_offset {
                month = diff + 10;
                is_leap_month = diff == leap_offset;
            }
        }
        if month > 12 {
            month -= 12;
        }
        if month >= 11 && diff < 4 {
            lunar_year -= 1;
        }
        Ok(LunarDate {
            day,
            month: month as u32,
            year: lunar_year,
            is_leap_month,
        })
    }

    /// Solar date of a lunar date.
    ///
    /// Fails for a leap flag on a month that is not leap that year, and for
    /// a day past the end of the month.
    ///
    /// # Example
    ///
    /// ```
    /// use hoangdao::lunar::{LunarDate, vietnamese::VietnameseCalendar};
    ///
    /// let calendar = VietnameseCalendar::default();
    /// let leap = LunarDate::new(1, 2, 2023).leap();
    /// assert_eq!("2023-03-22", calendar.solar_date(leap).unwrap().iso_gregorian());
    /// assert!(calendar.solar_date(LunarDate::new(1, 3, 2023).leap()).is_err());
    /// ```
    pub fn solar_date(&self, lunar: LunarDate) -> Result<Date> {
        let LunarDate {
            day,
            month,
            year,
            is_leap_month,
        } = lunar;
        check_year(year)?;
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(AlmanacError::provider(format!(
                "no lunar date {day}/{month}/{year}"
            )));
        }
        let (a11, b11) = if month < 11 {
            (self.month11(year - 1)?, self.month11(year)?)
        } else {
            (self.month11(year)?, self.month11(year + 1)?)
        };
        let k = ((a11.jdn() as f64 - EPOCH_NEW_MOON) / SYNODIC_MONTH + 0.5).floor() as i32;
        let mut offset = (month as i32 - 11).rem_euclid(12);
        let mut leap_month = None;
        if b11 - a11 > 365 {
            let leap_offset = self.leap_month_offset(a11);
            leap_month = Some((leap_offset - 2).rem_euclid(12) as u32);
            if is_leap_month || offset >= leap_offset {
                offset += 1;
            }
        }
        if is_leap_month && leap_month != Some(month) {
            return Err(AlmanacError::provider(format!(
                "month {month} of {year} is not a leap month"
            )));
        }
        let start = self.new_moon_day(k + offset);
        let length = self.new_moon_day(k + offset + 1) - start;
        if day as i32 > length {
            return Err(AlmanacError::provider(format!(
                "lunar month {month}/{year} has {length} days"
            )));
        }
        Ok(start + (day as i32 - 1))
    }
}

impl LunarDateProvider for VietnameseCalendar {
    fn from_solar(&self, day: u32, month: u32, year: i32) -> Result<LunarInfo> {
        let date = solar(year, month as i32, day as i32)?;
        let lunar_date = self.lunar_date(date)?;
        let (y, m) = (lunar_date.year, lunar_date.month as i32);
        let year_pillar = pillar((y + 6).rem_euclid(10), (y + 8).rem_euclid(12))?;
        let month_pillar = pillar((y * 12 + m + 3).rem_euclid(10), (m + 1).rem_euclid(12))?;
        Ok(LunarInfo {
            lunar_date,
            year_can_chi: year_pillar.to_string(),
            month_can_chi: month_pillar.to_string(),
            day_can_chi: CanChi::from_cycle(date.sexagenary()).to_string(),
        })
    }

    fn from_lunar(&self, lunar: LunarDate) -> Result<Date> {
        self.solar_date(lunar)
    }
}

fn solar(year: i32, month: i32, day: i32) -> Result<Date> {
    Date::from_gregorian(year, month, day).ok_or(AlmanacError::InvalidDate { year, month, day })
}

fn check_year(year: i32) -> Result<()> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(AlmanacError::provider(format!(
            "year {year} outside {}..={}",
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )))
    }
}

fn pillar(can: i32, chi: i32) -> Result<CanChi> {
    let (can, chi) = (Can::from_index(can as u32), Chi::from_index(chi as u32));
    CanChi::new(can, chi).ok_or_else(|| AlmanacError::provider(format!("no pillar {can} {chi}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> VietnameseCalendar {
        VietnameseCalendar::default()
    }

    #[test]
    fn lunar_dates() {
        let dataset = [
            ((2024, 2, 10), (1, 1, 2024, false)),
            ((2000, 1, 1), (25, 11, 1999, false)),
            ((2023, 3, 21), (30, 2, 2023, false)),
            ((2023, 3, 22), (1, 2, 2023, true)),
            ((2025, 1, 29), (1, 1, 2025, false)),
            ((2026, 2, 17), (1, 1, 2026, false)),
            ((1990, 5, 12), (18, 4, 1990, false)),
            ((2026, 1, 27), (9, 12, 2025, false)),
            ((2026, 10, 19), (10, 9, 2026, false)),
            ((2024, 3, 1), (21, 1, 2024, false)),
        ];
        for ((y, m, d), (ld, lm, ly, leap)) in dataset {
            let date = Date::from_gregorian(y, m, d).unwrap();
            let std = LunarDate {
                day: ld,
                month: lm,
                year: ly,
                is_leap_month: leap,
            };
            assert_eq!(std, calendar().lunar_date(date).unwrap(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn pillars() {
        let dataset = [
            ((2024, 2, 10), ("Giáp Thìn", "Bính Dần", "Giáp Thìn")),
            ((2000, 1, 1), ("Kỷ Mão", "Bính Tý", "Mậu Ngọ")),
            ((2023, 3, 22), ("Quý Mão", "Ất Mão", "Kỷ Mão")),
            ((2026, 2, 17), ("Bính Ngọ", "Canh Dần", "Nhâm Tuất")),
            ((1990, 5, 12), ("Canh Ngọ", "Tân Tỵ", "Đinh Sửu")),
            ((2026, 10, 19), ("Bính Ngọ", "Mậu Tuất", "Bính Dần")),
        ];
        for ((y, m, d), (year, month, day)) in dataset {
            let info = calendar().from_solar(d, m, y).unwrap();
            assert_eq!(
                (year, month, day),
                (
                    info.year_can_chi.as_str(),
                    info.month_can_chi.as_str(),
                    info.day_can_chi.as_str()
                ),
                "{y}-{m}-{d}"
            );
        }
        assert_eq!("Mậu Dần", calendar().from_solar(21, 3, 2023).unwrap().day_can_chi);
        assert_eq!("Giáp Tý", calendar().from_solar(1, 3, 2024).unwrap().day_can_chi);
    }

    #[test]
    fn round_trip() {
        let start = Date::from_gregorian(2022, 12, 1).unwrap();
        for offset in (0..800).step_by(3) {
            let date = start + offset;
            let lunar = calendar().lunar_date(date).unwrap();
            assert_eq!(date, calendar().solar_date(lunar).unwrap(), "{}", date.iso_gregorian());
        }
    }

    #[test]
    fn month_lengths() {
        let date = Date::from_gregorian(2024, 1, 1).unwrap();
        let mut run = 0;
        let mut last = calendar().lunar_date(date).unwrap();
        for offset in 1..400 {
            let lunar = calendar().lunar_date(date + offset).unwrap();
            if lunar.day == 1 {
                assert!((29..=30).contains(&last.day), "{last:?}");
                run += 1;
            } else {
                assert_eq!(last.day + 1, lunar.day);
            }
            last = lunar;
        }
        assert!(run >= 13);
    }

    #[test]
    fn rejects_bad_input() {
        for lunar in [
            LunarDate::new(1, 3, 2023).leap(),
            LunarDate::new(1, 5, 2024).leap(),
            LunarDate::new(0, 1, 2024),
            LunarDate::new(1, 13, 2024),
            LunarDate::new(1, 1, 1700),
        ] {
            assert!(
                matches!(calendar().solar_date(lunar), Err(AlmanacError::ProviderUnavailable { .. })),
                "{lunar:?}"
            );
        }
        assert!(matches!(
            calendar().from_solar(30, 2, 2024),
            Err(AlmanacError::InvalidDate { .. })
        ));
        assert!(matches!(
            calendar().from_solar(1, 1, 2300),
            Err(AlmanacError::ProviderUnavailable { .. })
        ));
    }

    #[test]
    fn timezone_shifts_month_starts() {
        // Tết 1985: the new moon of month 11 falls on different days in UTC+7
        // and UTC+8, so the two calendars number the following months apart.
        let date = Date::from_gregorian(1985, 1, 21).unwrap();
        let vn = calendar().lunar_date(date).unwrap();
        let cn = VietnameseCalendar::new(8.0).lunar_date(date).unwrap();
        assert_eq!(LunarDate::new(1, 1, 1985), vn);
        assert_eq!(LunarDate::new(1, 12, 1984), cn);
    }
}
