//! Text forms of the cycle and of dates, in Vietnamese.

/// Stem names, indexed by [`Can`](super::Can).
pub const CAN_NAMES: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// Branch names, indexed by [`Chi`](super::Chi).
pub const CHI_NAMES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Element names, indexed by [`Element`](super::Element).
pub const ELEMENT_NAMES: [&str; 5] = ["Kim", "Thủy", "Hỏa", "Thổ", "Mộc"];

pub(crate) const ZODIAC_ICONS: [&str; 12] = [
    "🐭", "🐮", "🐯", "🐱", "🐲", "🐍", "🐴", "🐐", "🐵", "🐔", "🐶", "🐷",
];

/// Weekday names, `0..=6` for Sunday through Saturday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Chủ Nhật", "Thứ Hai", "Thứ Ba", "Thứ Tư", "Thứ Năm", "Thứ Sáu", "Thứ Bảy",
];

/// Short weekday names, `0..=6` for Sunday through Saturday.
pub const WEEKDAY_SHORT: [&str; 7] = ["CN", "T2", "T3", "T4", "T5", "T6", "T7"];

/// Weekday name for an ISO day of week (`1..=7`, Monday through Sunday).
pub fn weekday(day_of_week: i32) -> &'static str {
    WEEKDAY_NAMES[day_of_week.rem_euclid(7) as usize]
}

/// Short weekday name for an ISO day of week.
pub fn weekday_short(day_of_week: i32) -> &'static str {
    WEEKDAY_SHORT[day_of_week.rem_euclid(7) as usize]
}

/// Short lunar date, `"day/month"`.
///
/// ```
/// use hoangdao::sexagenary::fmt;
///
/// assert_eq!("18/4", fmt::lunar_date(18, 4));
/// ```
pub fn lunar_date(day: u32, month: u32) -> String {
    format!("{day}/{month}")
}

/// Lunar date with the year pillar.
///
/// ```
/// use hoangdao::sexagenary::fmt;
///
/// assert_eq!("18/4 Âm Lịch - Năm Canh Ngọ", fmt::full_lunar_date(18, 4, "Canh Ngọ"));
/// ```
pub fn full_lunar_date(day: u32, month: u32, year_can_chi: &str) -> String {
    format!("{day}/{month} Âm Lịch - Năm {year_can_chi}")
}

/// `"HH:00 - HH:00"` clock range of a two-hour bracket.
pub fn time_range(start_hour: u32, end_hour: u32) -> String {
    format!("{start_hour:02}:00 - {end_hour:02}:00")
}

/// Folds case and Vietnamese diacritics, so that `"Bính Dần"`, `"bính dần"`
/// and `"BINH DAN"` compare equal. Combining marks left by decomposed input
/// are dropped too.
pub fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| match c {
            'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ'
            | 'ẩ' | 'ẫ' | 'ậ' => 'a',
            'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
            'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
            'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ'
            | 'ở' | 'ỡ' | 'ợ' => 'o',
            'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
            'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
            'đ' => 'd',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday() {
        for (std, short, dow) in [("Thứ Hai", "T2", 1), ("Thứ Bảy", "T7", 6), ("Chủ Nhật", "CN", 7)] {
            assert_eq!(std, weekday(dow));
            assert_eq!(short, weekday_short(dow));
        }
    }

    #[test]
    fn test_time_range() {
        assert_eq!("23:00 - 01:00", time_range(23, 1));
        assert_eq!("07:00 - 09:00", time_range(7, 9));
    }

    #[test]
    fn test_fold() {
        for (std, text) in [
            ("binh dan", "Bính Dần"),
            ("binh dan", "BÌNH DẦN"),
            ("dinh ty", "Đinh Tỵ"),
            ("giap ty", "Gia\u{0301}p Ty\u{0301}"),
            ("quy hoi", "Quý Hợi"),
        ] {
            assert_eq!(std, fold(text), "{text}");
        }
    }
}
