//! Sexagenary cycle (Can Chi)
//!
//! Note: the Vietnamese terms (Can, Chi, Ngũ Hành, Nạp Âm, ...) are kept in
//! their own spelling, both in the docs and in the text this module produces.
//!
//! The ten Heavenly Stems ([`Can`]) and twelve Earthly Branches ([`Chi`])
//! pair up into the 60-term cycle ([`CanChi`]). Every table here is indexed
//! by the enum discriminant, so the cycle invariants can be checked
//! mechanically.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, Result};

pub mod fmt;

/// Heavenly Stem (Thiên Can).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Can {
    #[serde(rename = "Giáp")]
    Giap,
    #[serde(rename = "Ất")]
    At,
    #[serde(rename = "Bính")]
    Binh,
    #[serde(rename = "Đinh")]
    Dinh,
    #[serde(rename = "Mậu")]
    Mau,
    #[serde(rename = "Kỷ")]
    Ky,
    #[serde(rename = "Canh")]
    Canh,
    #[serde(rename = "Tân")]
    Tan,
    #[serde(rename = "Nhâm")]
    Nham,
    #[serde(rename = "Quý")]
    Quy,
}

/// Earthly Branch (Địa Chi), also the zodiac animal of a year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Chi {
    #[serde(rename = "Tý")]
    Ty,
    #[serde(rename = "Sửu")]
    Suu,
    #[serde(rename = "Dần")]
    Dan,
    #[serde(rename = "Mão")]
    Mao,
    #[serde(rename = "Thìn")]
    Thin,
    #[serde(rename = "Tỵ")]
    Ti,
    #[serde(rename = "Ngọ")]
    Ngo,
    #[serde(rename = "Mùi")]
    Mui,
    #[serde(rename = "Thân")]
    Than,
    #[serde(rename = "Dậu")]
    Dau,
    #[serde(rename = "Tuất")]
    Tuat,
    #[serde(rename = "Hợi")]
    Hoi,
}

/// Ngũ Hành, the five elements.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "Kim")]
    Metal,
    #[serde(rename = "Thủy")]
    Water,
    #[serde(rename = "Hỏa")]
    Fire,
    #[serde(rename = "Thổ")]
    Earth,
    #[serde(rename = "Mộc")]
    Wood,
}

impl Can {
    pub const ALL: [Can; 10] = {
        use Can::*;
        [Giap, At, Binh, Dinh, Mau, Ky, Canh, Tan, Nham, Quy]
    };

    /// Stem at position `index` of the cycle, wrapping modulo 10.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 10) as usize]
    }
    pub fn index(self) -> usize {
        self as usize
    }
    pub fn name(self) -> &'static str {
        fmt::CAN_NAMES[self.index()]
    }
    /// Intrinsic element of the stem (Giáp/Ất Mộc, Bính/Đinh Hỏa, ...).
    pub fn element(self) -> Element {
        CAN_ELEMENTS[self.index()]
    }
}

impl Chi {
    pub const ALL: [Chi; 12] = {
        use Chi::*;
        [Ty, Suu, Dan, Mao, Thin, Ti, Ngo, Mui, Than, Dau, Tuat, Hoi]
    };

    /// Branch at position `index` of the cycle, wrapping modulo 12.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 12) as usize]
    }
    pub fn index(self) -> usize {
        self as usize
    }
    pub fn name(self) -> &'static str {
        fmt::CHI_NAMES[self.index()]
    }
    /// Intrinsic element of the branch.
    pub fn element(self) -> Element {
        CHI_ELEMENTS[self.index()]
    }
    /// Zodiac icon of the branch.
    pub fn icon(self) -> &'static str {
        fmt::ZODIAC_ICONS[self.index()]
    }
    /// First clock hour of the two-hour "Giờ" ruled by this branch. Tý starts
    /// at 23:00 of the previous civil day.
    pub fn start_hour(self) -> u32 {
        (2 * self.index() as u32 + 23) % 24
    }
    /// Clock hour at which the "Giờ" ends.
    pub fn end_hour(self) -> u32 {
        (2 * self.index() as u32 + 1) % 24
    }
}

impl Element {
    pub const ALL: [Element; 5] = {
        use Element::*;
        [Metal, Water, Fire, Earth, Wood]
    };

    pub fn index(self) -> usize {
        self as usize
    }
    pub fn name(self) -> &'static str {
        fmt::ELEMENT_NAMES[self.index()]
    }
}

const CAN_ELEMENTS: [Element; 10] = {
    use Element::*;
    [Wood, Wood, Fire, Fire, Earth, Earth, Metal, Metal, Water, Water]
};

const CHI_ELEMENTS: [Element; 12] = {
    use Element::*;
    [
        Water, Earth, Wood, Wood, Earth, Fire, Fire, Earth, Metal, Metal, Earth, Water,
    ]
};

/// Nạp Âm stem values: two consecutive stems share a value.
const CAN_VALUES: [u32; 10] = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5];
/// Nạp Âm branch values: four branches share each value.
const CHI_VALUES: [u32; 12] = [0, 0, 1, 1, 2, 2, 0, 0, 1, 1, 2, 2];
/// Nạp Âm sum `1..=5` (index `sum - 1`) to element. Sum 4 is Earth and 5 is
/// Wood: Canh Ngọ sums to 4 + 0 and is Lộ Bàng Thổ.
const SUM_ELEMENTS: [Element; 5] = {
    use Element::*;
    [Metal, Water, Fire, Earth, Wood]
};

/// Stem that opens the Tý hour, by day stem ("Ngũ Tý Độn").
const TY_HOUR_START: [Can; 10] = {
    use Can::*;
    [Giap, Binh, Mau, Canh, Nham, Giap, Binh, Mau, Canh, Nham]
};

/// Nạp Âm element of a stem-branch pair.
///
/// # Example
///
/// ```
/// use hoangdao::sexagenary::{element_of, Can, Chi, Element};
///
/// assert_eq!(Element::Metal, element_of(Can::Giap, Chi::Ty)); // Hải Trung Kim
/// assert_eq!(Element::Earth, element_of(Can::Canh, Chi::Ngo)); // Lộ Bàng Thổ
/// ```
pub fn element_of(can: Can, chi: Chi) -> Element {
    let mut sum = CAN_VALUES[can.index()] + CHI_VALUES[chi.index()];
    if sum > 5 {
        sum -= 5;
    }
    SUM_ELEMENTS[(sum - 1) as usize]
}

/// [`element_of`] over the textual names handed out by a lunar provider.
pub fn element_of_names(can: &str, chi: &str) -> Result<Element> {
    Ok(element_of(can.parse()?, chi.parse()?))
}

/// Stem of the hour at `hour_chi_index` (0 = Tý .. 11 = Hợi) on a day with
/// stem `day_can`.
///
/// The hour stem always follows from the day stem; it is never looked up on
/// its own.
///
/// # Example
///
/// ```
/// use hoangdao::sexagenary::{hour_can, Can};
///
/// assert_eq!(Can::Giap, hour_can(Can::Ky, 0));
/// assert_eq!(Can::Dinh, hour_can(Can::At, 1));
/// ```
pub fn hour_can(day_can: Can, hour_chi_index: usize) -> Can {
    let start = TY_HOUR_START[day_can.index()].index();
    Can::ALL[(start + hour_chi_index) % 10]
}

/// Branch of the two-hour bracket containing clock hour `hour` (`0..=23`):
/// 23:00-00:59 is Tý, 01:00-02:59 is Sửu, and so on.
pub fn hour_branch(hour: u32) -> Chi {
    Chi::from_index((hour + 1) / 2)
}

/// One pillar: a stem-branch pair at some position of the 60-term cycle.
///
/// Only pairs of equal parity exist in the cycle; the constructors reject
/// the others.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CanChi {
    can: Can,
    chi: Chi,
}

impl CanChi {
    /// Returns `None` for a pair that does not occur in the cycle (e.g.
    /// Giáp Sửu).
    pub fn new(can: Can, chi: Chi) -> Option<Self> {
        (can.index() % 2 == chi.index() % 2).then_some(Self { can, chi })
    }
    /// Pillar numbered `num` in the cycle, 1 (Giáp Tý) to 60 (Quý Hợi),
    /// wrapping.
    pub fn from_cycle(num: u32) -> Self {
        let pos = (num + 59) % 60;
        Self {
            can: Can::from_index(pos),
            chi: Chi::from_index(pos),
        }
    }
    /// Inverse of [`CanChi::from_cycle`].
    pub fn cycle_number(&self) -> u32 {
        let (c, b) = (self.can.index() as i32, self.chi.index() as i32);
        (6 * c - 5 * b).rem_euclid(60) as u32 + 1
    }
    pub fn can(&self) -> Can {
        self.can
    }
    pub fn chi(&self) -> Chi {
        self.chi
    }
    /// Nạp Âm element of the pillar.
    pub fn element(&self) -> Element {
        element_of(self.can, self.chi)
    }
    /// Parses `"<Can> <Chi>"`, taking the last two words so that prefixes
    /// such as `"Năm Giáp Tý"` are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (rest, chi) = text
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| AlmanacError::invalid_symbol(text))?;
        let can = rest.split_whitespace().last().unwrap_or(rest);
        let (can, chi) = (can.parse()?, chi.parse()?);
        Self::new(can, chi).ok_or_else(|| AlmanacError::invalid_symbol(text))
    }
}

impl Display for CanChi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.can.name(), self.chi.name())
    }
}

impl Serialize for CanChi {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for CanChi {
    type Err = AlmanacError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for Can {
    type Err = AlmanacError;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        fmt::CAN_NAMES
            .iter()
            .position(|&n| n == s)
            .map(|i| Can::ALL[i])
            .ok_or_else(|| AlmanacError::invalid_symbol(s))
    }
}

impl FromStr for Chi {
    type Err = AlmanacError;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        fmt::CHI_NAMES
            .iter()
            .position(|&n| n == s)
            .map(|i| Chi::ALL[i])
            .ok_or_else(|| AlmanacError::invalid_symbol(s))
    }
}

impl Display for Can {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Chi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
