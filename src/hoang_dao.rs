//! Hoàng Đạo days and hours, and the 0-100 hour score.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::relations::{self, ChiRelation};
use crate::sexagenary::{self, fmt, Can, CanChi, Chi, Element};

/// Hoàng Đạo hour flags by `day_chi % 6` (Tý/Ngọ, Sửu/Mùi, Dần/Thân,
/// Mão/Dậu, Thìn/Tuất, Tỵ/Hợi); character `i` is hour `i`, Tý first.
pub const HOUR_PATTERNS: [&str; 6] = [
    "110100101100",
    "001101001011",
    "110011010010",
    "101100110100",
    "001011001101",
    "010010110011",
];

/// Hoàng Đạo day branches by `(lunar_month - 1) % 6`; months six apart
/// share a row.
pub const GOOD_DAY_CHI: [[Chi; 4]; 6] = {
    use Chi::*;
    [
        [Ty, Suu, Ti, Mui],
        [Dan, Mao, Mui, Dau],
        [Thin, Ti, Dau, Hoi],
        [Ngo, Mui, Suu, Dau],
        [Than, Dau, Suu, Mao],
        [Tuat, Hoi, Mao, Ti],
    ]
};

/// Day classification.
///
/// [`day_auspiciousness`] never produces `HacDao`; the variant is kept for
/// callers that score it (see [`crate::calendar::month_auspicious_days`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DayAuspiciousness {
    #[serde(rename = "Hoàng Đạo")]
    HoangDao,
    #[serde(rename = "Bình Thường")]
    BinhThuong,
    #[serde(rename = "Hắc Đạo")]
    HacDao,
}

/// Classifies a day by its lunar month and day branch. A day off the
/// month's list is neutral, never bad.
///
/// # Example
///
/// ```
/// use hoangdao::hoang_dao::{day_auspiciousness, DayAuspiciousness};
/// use hoangdao::sexagenary::Chi;
///
/// assert_eq!(DayAuspiciousness::HoangDao, day_auspiciousness(1, Chi::Ty));
/// assert_eq!(DayAuspiciousness::BinhThuong, day_auspiciousness(1, Chi::Mao));
/// ```
pub fn day_auspiciousness(lunar_month: u32, day_chi: Chi) -> DayAuspiciousness {
    if !(1..=12).contains(&lunar_month) {
        return DayAuspiciousness::BinhThuong;
    }
    if GOOD_DAY_CHI[((lunar_month - 1) % 6) as usize].contains(&day_chi) {
        DayAuspiciousness::HoangDao
    } else {
        DayAuspiciousness::BinhThuong
    }
}

/// `true` if hour `hour` (Tý = 0) is Hoàng Đạo on a day with branch
/// `day_chi`.
pub fn is_auspicious_hour(day_chi: Chi, hour: Chi) -> bool {
    HOUR_PATTERNS[day_chi.index() % 6].as_bytes()[hour.index()] == b'1'
}

/// One of the 12 two-hour brackets of a day.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourSlot {
    /// `"Giờ Tý"`
    pub name: String,
    pub chi: Chi,
    /// `"23:00 - 01:00"`
    pub time_range: String,
    pub start_hour: u32,
    pub end_hour: u32,
    /// 1 to 5 stars
    pub rating: u32,
    pub is_auspicious: bool,
}

impl HourSlot {
    fn new(day_chi: Chi, chi: Chi) -> Self {
        let is_auspicious = is_auspicious_hour(day_chi, chi);
        let rating = match (is_auspicious, chi) {
            (true, Chi::Ty | Chi::Thin | Chi::Ngo) => 5,
            (true, _) => 4,
            (false, _) => 2,
        };
        Self {
            name: format!("Giờ {chi}"),
            chi,
            time_range: fmt::time_range(chi.start_hour(), chi.end_hour()),
            start_hour: chi.start_hour(),
            end_hour: chi.end_hour(),
            rating,
            is_auspicious,
        }
    }

    /// `true` if clock hour `hour` falls in the slot. Tý wraps midnight.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour > self.end_hour {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            (self.start_hour..self.end_hour).contains(&hour)
        }
    }
}

/// The 12 slots of a day, Tý first.
pub fn hour_slots(day_chi: Chi) -> Vec<HourSlot> {
    Chi::ALL.iter().map(|&chi| HourSlot::new(day_chi, chi)).collect()
}

/// The Hoàng Đạo slots of a day.
pub fn auspicious_hours(day_chi: Chi) -> Vec<HourSlot> {
    hour_slots(day_chi)
        .into_iter()
        .filter(|slot| slot.is_auspicious)
        .collect()
}

/// The slot containing clock hour `hour`, `None` past 23.
///
/// ```
/// use hoangdao::hoang_dao::hour_status;
/// use hoangdao::sexagenary::Chi;
///
/// let slot = hour_status(Chi::Ty, 0).unwrap();
/// assert_eq!("Giờ Tý", slot.name);
/// assert!(slot.is_auspicious);
/// ```
pub fn hour_status(day_chi: Chi, hour: u32) -> Option<HourSlot> {
    (hour < 24).then(|| HourSlot::new(day_chi, sexagenary::hour_branch(hour)))
}

/// The person hours are scored for: a branch and an element.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub chi: Chi,
    pub element: Element,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            chi: Chi::Ty,
            element: Element::Metal,
        }
    }
}

/// Components of an hour score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    /// `0..=100`
    pub total: u32,
    pub base: i32,
    pub chi_score: i32,
    pub element_score: i32,
    /// Nạp Âm element of the hour pillar
    pub element: Element,
    pub can: Can,
}

/// Relation of an hour branch to the subject's branch, in points.
pub fn chi_score(hour: Chi, subject: Chi) -> i32 {
    match ChiRelation::between(hour, subject) {
        ChiRelation::TamHop => 15,
        ChiRelation::LucHop => 10,
        ChiRelation::LucXung => -15,
        ChiRelation::Neutral => 0,
    }
}

/// Relation of an hour element to the subject's element, in points.
pub fn element_score(hour: Element, subject: Element) -> i32 {
    if hour == subject {
        8
    } else if relations::generates(hour, subject) {
        15
    } else if relations::controls(hour, subject) {
        -15
    } else {
        0
    }
}

/// Scores hour `hour` of a day with stem `day_can`.
///
/// `50 + base + chi + element`, clamped to `0..=100`, where `base` is ±40
/// for a Hoàng Đạo or other hour.
pub fn hour_score(hour: Chi, is_hoang_dao: bool, day_can: Can, subject: Subject) -> ScoreDetails {
    let base = if is_hoang_dao { 40 } else { -40 };
    let chi_score = chi_score(hour, subject.chi);
    let can = sexagenary::hour_can(day_can, hour.index());
    let element = sexagenary::element_of(can, hour);
    let element_score = element_score(element, subject.element);
    let total = (50 + base + chi_score + element_score).clamp(0, 100) as u32;
    ScoreDetails {
        total,
        base,
        chi_score,
        element_score,
        element,
        can,
    }
}

/// Activities suggested by the parts of a score, at most three.
pub fn good_activities(details: &ScoreDetails) -> Vec<&'static str> {
    let mut activities = Vec::new();
    if details.chi_score >= 10 {
        activities.extend(["Ký kết", "Hợp tác", "Cưới hỏi"]);
    }
    if details.element_score > 0 {
        activities.extend(["Khai trương", "Cầu tài", "Giao dịch"]);
    }
    if details.total >= 90 {
        activities.extend(["Động thổ", "Nhập trạch"]);
    }
    let mut out: Vec<&'static str> = Vec::with_capacity(3);
    for activity in activities {
        if out.len() == 3 {
            break;
        }
        if !out.contains(&activity) {
            out.push(activity);
        }
    }
    out
}

/// An hour slot with its score for a subject.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredHour {
    #[serde(flatten)]
    pub slot: HourSlot,
    pub score: u32,
    pub score_details: ScoreDetails,
    pub good_for: Vec<&'static str>,
}

/// All 12 hours of day `day`, scored for `subject`.
pub fn scored_hours(day: CanChi, subject: Subject) -> Vec<ScoredHour> {
    hour_slots(day.chi())
        .into_iter()
        .map(|slot| {
            let details = hour_score(slot.chi, slot.is_auspicious, day.can(), subject);
            trace!(
                day = %day,
                hour = %slot.chi,
                base = details.base,
                chi = details.chi_score,
                element = details.element_score,
                total = details.total,
                "hour score"
            );
            ScoredHour {
                good_for: good_activities(&details),
                score: details.total,
                score_details: details,
                slot,
            }
        })
        .collect()
}

/// Hours scoring strictly above `threshold`. May be empty.
///
/// # Example
///
/// ```
/// use hoangdao::hoang_dao::{very_good_hours, Subject};
/// use hoangdao::sexagenary::CanChi;
///
/// let hours = very_good_hours(CanChi::from_cycle(1), Subject::default(), 80);
/// let names: Vec<_> = hours.iter().map(|h| h.slot.name.as_str()).collect();
/// assert_eq!(["Giờ Tý", "Giờ Sửu", "Giờ Ngọ", "Giờ Thân", "Giờ Dậu"], names[..]);
/// ```
pub fn very_good_hours(day: CanChi, subject: Subject, threshold: u32) -> Vec<ScoredHour> {
    scored_hours(day, subject)
        .into_iter()
        .filter(|hour| hour.score > threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn day_classification() {
        use Chi::*;
        use DayAuspiciousness::*;
        let dataset = [
            ((1, Ty), HoangDao),
            ((7, Ty), HoangDao),
            ((1, Mao), BinhThuong),
            ((2, Mao), HoangDao),
            ((6, Ti), HoangDao),
            ((12, Tuat), HoangDao),
            ((12, Ty), BinhThuong),
            ((0, Ty), BinhThuong),
            ((13, Ty), BinhThuong),
        ];
        for ((month, chi), std) in dataset {
            assert_eq!(std, day_auspiciousness(month, chi), "month {month}, {chi}");
        }
        for month in 1..=12 {
            for chi in Chi::ALL {
                assert_ne!(HacDao, day_auspiciousness(month, chi));
            }
        }
    }

    #[test]
    fn slots_align_with_branches() {
        let slots = hour_slots(Chi::Ty);
        assert_eq!(12, slots.len());
        let ranges = [
            (23, 1), (1, 3), (3, 5), (5, 7), (7, 9), (9, 11),
            (11, 13), (13, 15), (15, 17), (17, 19), (19, 21), (21, 23),
        ];
        for (i, (slot, (start, end))) in slots.iter().zip(ranges).enumerate() {
            assert_eq!(Chi::ALL[i], slot.chi);
            assert_eq!(format!("Giờ {}", fmt::CHI_NAMES[i]), slot.name);
            assert_eq!((start, end), (slot.start_hour, slot.end_hour));
            assert_eq!(fmt::time_range(start, end), slot.time_range);
            assert!(slot.contains(start) && slot.contains((start + 1) % 24));
            assert!(!slot.contains(end));
        }
        for hour in 0..24 {
            let found: Vec<_> = slots.iter().filter(|s| s.contains(hour)).collect();
            assert_eq!(1, found.len(), "{hour:02}:00");
            assert_eq!(found[0].chi, hour_status(Chi::Ty, hour).unwrap().chi);
        }
        assert_eq!(None, hour_status(Chi::Ty, 24));
    }

    #[test]
    fn patterns_and_ratings() {
        for pattern in HOUR_PATTERNS {
            assert_eq!(6, pattern.bytes().filter(|&b| b == b'1').count());
        }
        // Tý and Ngọ days share a pattern.
        assert_eq!(hour_slots(Chi::Ty), hour_slots(Chi::Ngo));
        let ratings: Vec<_> = hour_slots(Chi::Ty).iter().map(|s| s.rating).collect();
        assert_eq!(vec![5, 4, 2, 4, 2, 2, 5, 2, 4, 4, 2, 2], ratings);
        let names: Vec<_> = auspicious_hours(Chi::Suu).into_iter().map(|s| s.chi).collect();
        use Chi::*;
        assert_eq!(vec![Dan, Mao, Ti, Than, Tuat, Hoi], names);
    }

    #[test]
    fn scores() {
        use Chi::*;
        let subject = Subject::default();
        let hours = scored_hours(CanChi::from_cycle(1), subject);
        let dataset = [
            (Ty, 98, (40, 0, 8)),
            (Suu, 100, (40, 10, 8)),
            (Dan, 0, (-40, 0, -15)),
            (Mao, 75, (40, 0, -15)),
            (Thin, 25, (-40, 15, 0)),
            (Ngo, 90, (40, -15, 15)),
            (Mui, 25, (-40, 0, 15)),
            (Than, 100, (40, 15, 8)),
        ];
        for (chi, total, (base, c, e)) in dataset {
            let hour = &hours[chi.index()];
            let d = hour.score_details;
            assert_eq!((total, base, c, e), (d.total, d.base, d.chi_score, d.element_score), "{chi}");
        }
        assert_eq!(Can::Canh, hours[6].score_details.can);
        assert_eq!(Element::Earth, hours[6].score_details.element);
    }

    #[test]
    fn activities() {
        let hours = scored_hours(CanChi::from_cycle(1), Subject::default());
        assert_eq!(vec!["Khai trương", "Cầu tài", "Giao dịch"], hours[0].good_for);
        assert_eq!(vec!["Ký kết", "Hợp tác", "Cưới hỏi"], hours[1].good_for);
        assert!(hours[2].good_for.is_empty());
        // Đinh Sửu day for a Canh Ngọ (Thổ) subject: only the total qualifies.
        let subject = Subject {
            chi: Chi::Ngo,
            element: Element::Earth,
        };
        let day = CanChi::parse("Đinh Sửu").unwrap();
        let hours = scored_hours(day, subject);
        assert_eq!(90, hours[3].score);
        assert_eq!(vec!["Động thổ", "Nhập trạch"], hours[3].good_for);
        let very_good: Vec<_> = very_good_hours(day, subject, 80)
            .into_iter()
            .map(|h| h.slot.chi)
            .collect();
        use Chi::*;
        assert_eq!(vec![Dan, Mao, Ti, Than, Tuat, Hoi], very_good);
    }

    #[test]
    fn empty_when_threshold_is_high() {
        assert!(very_good_hours(CanChi::from_cycle(1), Subject::default(), 100).is_empty());
    }

    proptest! {
        #[test]
        fn scores_stay_in_range(day in 1u32..=60, chi in 0u32..12, element in 0usize..5) {
            let subject = Subject { chi: Chi::from_index(chi), element: Element::ALL[element] };
            for hour in scored_hours(CanChi::from_cycle(day), subject) {
                prop_assert!(hour.score <= 100);
                prop_assert!(hour.good_for.len() <= 3);
            }
        }
    }
}
