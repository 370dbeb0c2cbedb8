//! Bát Tự: the four pillars of birth, their five-element balance and the
//! Nạp Âm destiny name.

use serde::Serialize;
use tracing::debug;

use crate::error::{AlmanacError, Result};
use crate::lunar::{self, LunarDateProvider, LunarInfo};
use crate::profile::UserProfile;
use crate::selector;
use crate::sexagenary::{self, fmt, CanChi, Element};

/// Nạp Âm names, one per pair of consecutive pillars of the cycle:
/// entry `i` covers pillars `2i + 1` and `2i + 2`.
pub const NAP_AM_NAMES: [&str; 30] = [
    "Hải Trung Kim",
    "Lư Trung Hỏa",
    "Đại Lâm Mộc",
    "Lộ Bàng Thổ",
    "Kiếm Phong Kim",
    "Sơn Đầu Hỏa",
    "Giản Hạ Thủy",
    "Thành Đầu Thổ",
    "Bạch Lạp Kim",
    "Dương Liễu Mộc",
    "Tuyền Trung Thủy",
    "Ốc Thượng Thổ",
    "Tích Lịch Hỏa",
    "Tùng Bách Mộc",
    "Trường Lưu Thủy",
    "Sa Trung Kim",
    "Sơn Hạ Hỏa",
    "Bình Địa Mộc",
    "Bích Thượng Thổ",
    "Kim Bạch Kim",
    "Phúc Đăng Hỏa",
    "Thiên Hà Thủy",
    "Đại Trạch Thổ",
    "Thoa Xuyến Kim",
    "Tang Đố Mộc",
    "Đại Khê Thủy",
    "Sa Trung Thổ",
    "Thiên Thượng Hỏa",
    "Thạch Lựu Mộc",
    "Đại Hải Thủy",
];

/// Destiny name for a pillar text nobody recognises.
pub const FALLBACK_DESTINY: &str = "Bản Mệnh";

pub const PILLAR_LABELS: [&str; 4] = ["Trụ Năm", "Trụ Tháng", "Trụ Ngày", "Trụ Giờ"];

/// Nạp Âm name of a pillar.
pub fn nap_am(pillar: CanChi) -> &'static str {
    NAP_AM_NAMES[((pillar.cycle_number() - 1) / 2) as usize]
}

/// Destiny name of a year pillar as a provider spells it.
///
/// A leading "Năm" or "Tháng" is dropped and the last two words are matched
/// ignoring case and diacritics, so the common misspelling "Bình" reads as
/// "Bính".
/// Unknown text gives [`FALLBACK_DESTINY`].
///
/// # Example
///
/// ```
/// use hoangdao::bazi::destiny_name;
///
/// assert_eq!("Lộ Bàng Thổ", destiny_name("Canh Ngọ"));
/// assert_eq!("Lư Trung Hỏa", destiny_name("Năm Bình Dần"));
/// assert_eq!("Bản Mệnh", destiny_name("Giáp Sửu"));
/// ```
pub fn destiny_name(year_pillar: &str) -> &'static str {
    let mut words: Vec<&str> = year_pillar.split_whitespace().collect();
    if let Some(first) = words.first()
        && ["nam", "thang"].contains(&fmt::fold(first).as_str())
        && words.len() > 2
    {
        words.remove(0);
    }
    if words.len() < 2 {
        return FALLBACK_DESTINY;
    }
    let key = fmt::fold(&words[words.len() - 2..].join(" "));
    (1..=60)
        .map(CanChi::from_cycle)
        .find(|p| fmt::fold(&p.to_string()) == key)
        .map_or(FALLBACK_DESTINY, nap_am)
}

/// Year, month, day and hour pillars of a birth.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct FourPillars {
    pub year: CanChi,
    pub month: CanChi,
    pub day: CanChi,
    pub hour: CanChi,
}

impl FourPillars {
    /// Takes year, month and day from the provider, and derives the hour
    /// pillar from the day stem and the bracket of `birth_hour`.
    pub fn new(info: &LunarInfo, birth_hour: u32) -> Result<Self> {
        let day = info.day_pillar()?;
        let hour_chi = sexagenary::hour_branch(birth_hour);
        let hour_can = sexagenary::hour_can(day.can(), hour_chi.index());
        let hour = CanChi::new(hour_can, hour_chi)
            .ok_or_else(|| AlmanacError::invalid_symbol(format!("{hour_can} {hour_chi}")))?;
        Ok(Self {
            year: info.year_pillar()?,
            month: info.month_pillar()?,
            day,
            hour,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = CanChi> {
        [self.year, self.month, self.day, self.hour].into_iter()
    }
}

/// Percentages of each element, plus the harmony score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct FiveElements {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
    /// `75..=98`
    pub score: u32,
}

/// Harmony score of a profile seed, `75..=98`.
pub fn harmony_score(seed: &str) -> u32 {
    75 + selector::hash(seed).unsigned_abs() % 24
}

/// Weighs each pillar's stem 1 and branch 1.5, by intrinsic element.
/// Percentages are rounded independently and need not sum to 100.
pub fn five_elements(pillars: &FourPillars, seed: &str) -> FiveElements {
    let mut counts = [0.0f64; 5];
    for pillar in pillars.iter() {
        counts[pillar.can().element().index()] += 1.0;
        counts[pillar.chi().element().index()] += 1.5;
    }
    let total: f64 = counts.iter().sum();
    let percent = |e: Element| (counts[e.index()] / total * 100.0).round() as u32;
    FiveElements {
        wood: percent(Element::Wood),
        fire: percent(Element::Fire),
        earth: percent(Element::Earth),
        metal: percent(Element::Metal),
        water: percent(Element::Water),
        score: harmony_score(seed),
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PillarInfo {
    pub label: &'static str,
    #[serde(rename = "val")]
    pub value: CanChi,
    /// Intrinsic element of the stem
    pub element: Element,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziResult {
    pub pillars: Vec<PillarInfo>,
    pub five_elements: FiveElements,
    pub destiny: &'static str,
    /// `"d/m - <year pillar>"`
    pub lunar_equivalent: String,
}

/// Reads the four pillars of `profile`.
///
/// An unreadable birth date is a [`MalformedProfile`] error; an unreadable
/// birth time falls back to the Tý hour.
///
/// [`MalformedProfile`]: crate::AlmanacError::MalformedProfile
pub fn calculate_bazi(provider: &dyn LunarDateProvider, profile: &UserProfile) -> Result<BaziResult> {
    let birth = profile.birth_date()?;
    let info = lunar::lunar_info(provider, birth)?;
    let pillars = FourPillars::new(&info, profile.birth_hour())?;
    let result = BaziResult {
        pillars: PILLAR_LABELS
            .iter()
            .zip(pillars.iter())
            .map(|(&label, value)| PillarInfo {
                label,
                value,
                element: value.can().element(),
            })
            .collect(),
        five_elements: five_elements(&pillars, &profile.seed()),
        destiny: destiny_name(&info.year_can_chi),
        lunar_equivalent: format!(
            "{} - {}",
            fmt::lunar_date(info.lunar_date.day, info.lunar_date.month),
            info.year_can_chi
        ),
    };
    debug!(hour = %pillars.hour, destiny = result.destiny, "bazi");
    Ok(result)
}
