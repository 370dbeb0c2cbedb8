//! The 24 solar terms (Tiết Khí).
//!
//! Terms are 15° sectors of the Sun's true longitude, numbered from the
//! vernal equinox. The longitude comes from a low-order series evaluated at
//! 0h UT of each day, so a term start can be off by a day against an
//! ephemeris; this is accepted.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::astro::JulianDate;
use crate::date::Date;

/// Term names, index-aligned with [`term_index`]: 0 is Xuân Phân (0°),
/// 6 is Hạ Chí (90°), 18 is Đông Chí (270°).
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "Xuân Phân",
    "Thanh Minh",
    "Cốc Vũ",
    "Lập Hạ",
    "Tiểu Mãn",
    "Mang Chủng",
    "Hạ Chí",
    "Tiểu Thử",
    "Đại Thử",
    "Lập Thu",
    "Xử Thử",
    "Bạch Lộ",
    "Thu Phân",
    "Hàn Lộ",
    "Sương Giáng",
    "Lập Đông",
    "Tiểu Tuyết",
    "Đại Tuyết",
    "Đông Chí",
    "Tiểu Hàn",
    "Đại Hàn",
    "Lập Xuân",
    "Vũ Thủy",
    "Kinh Trập",
];

/// One of the 24 solar terms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SolarTerm(u32);

impl SolarTerm {
    /// Term at `index`, wrapping modulo 24.
    pub fn from_index(index: u32) -> Self {
        Self(index % 24)
    }
    pub fn index(&self) -> u32 {
        self.0
    }
    pub fn name(&self) -> &'static str {
        SOLAR_TERM_NAMES[self.0 as usize]
    }
    /// Longitude of the Sun at which the term begins, in degrees.
    pub fn longitude(&self) -> u32 {
        self.0 * 15
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SolarTerm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// True longitude of the Sun at 0h UT of `date`, in degrees `[0, 360)`.
pub fn true_longitude(date: Date) -> f64 {
    let t = JulianDate::local_midnight(date, 0.0).centuries();
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    // Equation of center
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    (l0 + c).rem_euclid(360.0)
}

/// Index `0..=23` of the term `date` falls in.
///
/// # Example
///
/// ```
/// use hoangdao::Date;
/// use hoangdao::solar_term::term_index;
///
/// let date = Date::from_gregorian(2024, 7, 1).unwrap();
/// assert_eq!(6, term_index(date)); // Hạ Chí
/// ```
pub fn term_index(date: Date) -> u32 {
    (true_longitude(date) / 15.0).floor() as u32 % 24
}

/// The term that begins on `date`, if any: a term begins on a day whose
/// term index differs from the previous day's.
///
/// # Example
///
/// ```
/// use hoangdao::Date;
/// use hoangdao::solar_term::term_start;
///
/// let date = Date::from_gregorian(2024, 3, 21).unwrap();
/// assert_eq!(Some("Xuân Phân"), term_start(date).map(|t| t.name()));
/// assert_eq!(None, term_start(date + 1));
/// ```
pub fn term_start(date: Date) -> Option<SolarTerm> {
    let index = term_index(date);
    (index != term_index(date + -1)).then_some(SolarTerm(index))
}

/// All term starts in `[from, from + days)`, in date order.
pub fn term_starts(from: Date, days: i32) -> Vec<(Date, SolarTerm)> {
    (0..days)
        .map(|i| from + i)
        .filter_map(|date| term_start(date).map(|term| (date, term)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn known_starts() {
        let dataset = [
            ((2024, 1, 6), "Tiểu Hàn"),
            ((2024, 3, 21), "Xuân Phân"),
            ((2025, 3, 21), "Xuân Phân"),
        ];
        for ((y, m, d), std) in dataset {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(Some(std), term_start(date).map(|t| t.name()), "{y}-{m}-{d}");
        }
        let jan1 = Date::from_gregorian(2024, 1, 1).unwrap();
        let starts = term_starts(jan1, 366);
        assert_eq!(19, starts[0].1.index());
        assert!(starts.iter().any(|&(date, term)| date - jan1 == 80 && term.index() == 0));
    }

    #[test]
    fn one_start_per_term_and_year() {
        for year in (1900..=2100).step_by(7) {
            let jan1 = Date::from_gregorian(year, 1, 1).unwrap();
            let starts = term_starts(jan1, 366);
            assert_eq!(24, starts.len(), "{year}");
            let names: HashSet<_> = starts.iter().map(|(_, term)| term.name()).collect();
            assert_eq!(24, names.len(), "{year}");
        }
    }

    #[test]
    fn any_window_covers_every_term() {
        let base = Date::from_gregorian(2023, 1, 1).unwrap();
        for offset in (0..730).step_by(11) {
            let starts = term_starts(base + offset, 366);
            let names: HashSet<_> = starts.iter().map(|(_, term)| term.index()).collect();
            assert_eq!(24, names.len(), "from {}", (base + offset).iso_gregorian());
            // A term can open a window and start again 365 days later on its last day.
            assert!((24..=25).contains(&starts.len()));
        }
    }

    #[test]
    fn terms_advance_in_order() {
        let jan1 = Date::from_gregorian(2026, 1, 1).unwrap();
        let starts = term_starts(jan1, 366);
        for pair in starts.windows(2) {
            assert_eq!((pair[0].1.index() + 1) % 24, pair[1].1.index());
            let gap = pair[1].0 - pair[0].0;
            assert!((13..=17).contains(&gap), "{gap} days");
        }
    }
}
