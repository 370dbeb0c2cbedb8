//! Julian dates and the low-order sun and moon series the lunisolar
//! calendar is built on.
//!
//! None of this is ephemeris grade; the series are accurate to a fraction of
//! a day over a few centuries around J2000, which is all a day-resolution
//! calendar needs.

use std::f64::consts::PI;

use crate::date::Date;

const DEG: f64 = PI / 180.0;
const J2000: f64 = 2451545.0;

/// A time point represented in Julian date (JD), in Universal Time.
///
/// Julian dates start at noon, so a civil day `Date` with JDN `n` covers
/// `[n - 0.5, n + 0.5)` at Greenwich.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate(pub f64);

impl JulianDate {
    /// Start of `date` in a timezone `tz_offset_hours` east of UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use hoangdao::Date;
    /// use hoangdao::astro::JulianDate;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(JulianDate(2451544.5), JulianDate::local_midnight(date, 0.0));
    /// ```
    pub fn local_midnight(date: Date, tz_offset_hours: f64) -> Self {
        JulianDate(date.jdn() as f64 - 0.5 - tz_offset_hours / 24.0)
    }
    /// Returns the date at the time point in a timezone ahead (east) of UTC
    /// by `tz_offset_hours` hours.
    ///
    /// For Vietnam (UTC+7), `tz_offset_hours` should be `7.0`.
    ///
    /// # Example
    ///
    /// ```
    /// use hoangdao::astro::JulianDate;
    ///
    /// let jd = JulianDate(2451544.3);
    /// assert_eq!((1999, 12, 31), jd.date_in_timezone(0.0).gregorian());
    /// assert_eq!((2000, 1, 1), jd.date_in_timezone(7.0).gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_hours: f64) -> Date {
        let jdn = (self.0 + 0.5 + tz_offset_hours / 24.0).floor() as u32;
        Date::from_jdn(jdn)
    }
    /// Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        (self.0 - J2000) / 36525.0
    }
}

/// Number of the mean lunation containing `jd`, counted from the new moon
/// of 1900-01-01.
pub fn lunation(jd: f64) -> i32 {
    ((jd - 2415021.076998695) / 29.530588853).floor() as i32
}

/// Instant of the `k`-th new moon after the one of 1900-01-01.
///
/// Mean new moon corrected by the main periodic terms of the Sun, the Moon
/// and the lunar node, then by an approximate ΔT.
pub fn new_moon(k: i32) -> JulianDate {
    let k = k as f64;
    let t = k / 1236.85;
    let (t2, t3) = (t * t, t * t * t);
    let mut jd = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DEG).sin();
    // Anomalies of the Sun and the Moon, and the Moon's argument of latitude
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;
    let sin = |x: f64| (x * DEG).sin();
    let c1 = (0.1734 - 0.000393 * t) * sin(m) + 0.0021 * sin(2.0 * m) - 0.4068 * sin(mpr)
        + 0.0161 * sin(2.0 * mpr)
        - 0.0004 * sin(3.0 * mpr)
        + 0.0104 * sin(2.0 * f)
        - 0.0051 * sin(m + mpr)
        - 0.0074 * sin(m - mpr)
        + 0.0004 * sin(2.0 * f + m)
        - 0.0004 * sin(2.0 * f - m)
        - 0.0006 * sin(2.0 * f + mpr)
        + 0.0010 * sin(2.0 * f - mpr)
        + 0.0005 * sin(2.0 * mpr + m);
    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };
    JulianDate(jd + c1 - delta_t)
}

/// Apparent geometric longitude of the Sun at `jd`, in degrees `[0, 360)`.
pub fn sun_longitude(jd: JulianDate) -> f64 {
    let t = jd.centuries();
    let t2 = t * t;
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (m * DEG).sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m * DEG).sin()
        + 0.000290 * (3.0 * m * DEG).sin();
    (l0 + dl).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timezones() {
        let date = Date::from_gregorian(2024, 2, 10).unwrap();
        for tz in [-5.0, 0.0, 7.0, 8.0] {
            let jd = JulianDate::local_midnight(date, tz);
            assert_eq!(date, jd.date_in_timezone(tz), "UTC{tz:+}");
            assert_eq!(date + -1, JulianDate(jd.0 - 1e-6).date_in_timezone(tz));
        }
    }

    #[test]
    fn new_moons() {
        // Local (UTC+7) dates of some well-known new moons
        let dataset = [
            ((2024, 2, 10), "2024-02-10"),
            ((2023, 3, 22), "2023-03-22"),
            ((2000, 1, 6), "2000-01-07"),
        ];
        for ((y, m, d), std) in dataset {
            let date = Date::from_gregorian(y, m, d).unwrap();
            let k = lunation(date.jdn() as f64);
            let found = [k - 1, k, k + 1]
                .into_iter()
                .map(|k| new_moon(k).date_in_timezone(7.0))
                .min_by_key(|found| (*found - date).abs())
                .unwrap();
            assert_eq!(std, found.iso_gregorian());
        }
    }

    #[test]
    fn equinoxes_and_solstices() {
        let dataset = [
            ((2024, 3, 20), 0.0),
            ((2024, 6, 21), 90.0),
            ((2024, 9, 22), 180.0),
            ((2024, 12, 21), 270.0),
        ];
        for ((y, m, d), std) in dataset {
            let date = Date::from_gregorian(y, m, d).unwrap();
            let lon = sun_longitude(JulianDate(date.jdn() as f64));
            let diff = (lon - std + 180.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 1.5, "{y}-{m}-{d}: {lon}");
        }
    }
}
