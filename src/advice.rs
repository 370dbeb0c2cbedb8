//! Daily advice and poetic day descriptions.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AlmanacError, Result};
use crate::selector::{self, Selector};

const BACKGROUND_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1518176258769-f227c798150e?q=80&w=2670&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1532693322450-2cb5c511067d?q=80&w=2670&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?q=80&w=2670&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=2670&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?q=80&w=2670&auto=format&fit=crop",
];

const EARLY_QUOTES: [&str; 5] = [
    "Một ngày mới mang đến cơ hội mới, hãy nắm bắt và hành động.",
    "Khởi đầu thuận lợi cho mọi dự định lớn.",
    "Thời điểm tốt để gieo hạt giống cho tương lai.",
    "Năng lượng tích cực đang bao quanh bạn.",
    "Hãy tự tin bước ra khỏi vùng an toàn.",
];

const MID_QUOTES: [&str; 5] = [
    "Một ngày thuận lợi cho sự phát triển và những khởi đầu mới.",
    "Công việc đang tiến triển tốt, hãy kiên trì.",
    "Mọi nỗ lực của bạn sẽ được đền đáp xứng đáng.",
    "Thời điểm thích hợp để mở rộng quan hệ xã hội.",
    "Sự nghiệp đang trên đà thăng tiến.",
];

const FULL_QUOTES: [&str; 4] = [
    "Ngày trăng tròn - thời điểm của sự viên mãn và hoàn thiện.",
    "Mọi việc sẽ đạt đến đỉnh cao, hãy tận hưởng thành quả.",
    "Năng lượng dồi dào, thuận lợi cho mọi hoạt động.",
    "Tình cảm và các mối quan hệ được bồi đắp.",
];

const LATE_QUOTES: [&str; 5] = [
    "Thời điểm để hoàn thành những việc còn dang dở.",
    "Hãy dành thời gian suy ngẫm và lên kế hoạch.",
    "Tĩnh lặng và cân bằng là chìa khóa của ngày hôm nay.",
    "Hãy chăm sóc bản thân trước khi giúp đỡ người khác.",
    "Chuẩn bị cho một chu kỳ mới đang đến.",
];

const GOOD_FOR: [[&str; 2]; 12] = [
    ["Khai trương", "Cưới hỏi"],
    ["Xuất hành", "Ký kết hợp đồng"],
    ["Động thổ", "Xây dựng"],
    ["Nhập trạch", "Dọn nhà"],
    ["Cầu tài", "Giao dịch"],
    ["Học hành", "Thi cử"],
    ["Họp mặt", "Tiệc tùng"],
    ["Đặt tên", "Khai sinh"],
    ["Mua sắm", "Trang trí"],
    ["Du lịch", "Nghỉ ngơi"],
    ["Cầu phúc", "Tế lễ"],
    ["Gieo trồng", "Thu hoạch"],
];

const AVOID: [[&str; 2]; 8] = [
    ["Khởi công", "Động thổ"],
    ["Xuất hành xa", "Đầu tư lớn"],
    ["Tranh chấp", "Kiện tụng"],
    ["Mai táng", "Tang lễ"],
    ["Phá dỡ", "Đập bỏ"],
    ["Vay nợ", "Cho vay"],
    ["Cắt may", "Sửa chữa lớn"],
    ["Chuyển nhà", "Di dời"],
];

/// Part of the lunar month a day falls in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Days 1 to 7
    Early,
    /// Days 8 to 14
    Mid,
    /// Days 15 and 16
    Full,
    /// Days 17 to 30
    Late,
}

impl Phase {
    pub fn of(lunar_day: u32) -> Self {
        match lunar_day {
            ..=7 => Self::Early,
            8..=14 => Self::Mid,
            15 | 16 => Self::Full,
            _ => Self::Late,
        }
    }

    pub fn quotes(self) -> &'static [&'static str] {
        match self {
            Self::Early => &EARLY_QUOTES,
            Self::Mid => &MID_QUOTES,
            Self::Full => &FULL_QUOTES,
            Self::Late => &LATE_QUOTES,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAdvice {
    pub quote: &'static str,
    pub good_for: [&'static str; 2],
    pub avoid: [&'static str; 2],
    pub background_image: &'static str,
}

/// Advice for a lunar day, keyed by `day|month|dayCanChi`.
///
/// # Example
///
/// ```
/// use hoangdao::advice::daily_advice;
///
/// let advice = daily_advice(18, 4, "Đinh Sửu");
/// assert_eq!("Chuẩn bị cho một chu kỳ mới đang đến.", advice.quote);
/// assert_eq!(["Đặt tên", "Khai sinh"], advice.good_for);
/// ```
pub fn daily_advice(lunar_day: u32, lunar_month: u32, day_can_chi: &str) -> DailyAdvice {
    let sel = Selector::new(&format!("{lunar_day}|{lunar_month}|{day_can_chi}"));
    DailyAdvice {
        quote: *sel.pick(Phase::of(lunar_day).quotes()),
        good_for: *sel.pick_offset(&GOOD_FOR, lunar_day),
        avoid: *sel.pick_offset(&AVOID, lunar_month),
        background_image: *sel.pick(&BACKGROUND_IMAGES),
    }
}

/// One line of advice: the phase pool indexed by the day itself.
pub fn quick_advice(lunar_day: u32) -> &'static str {
    *selector::pick(Phase::of(lunar_day).quotes(), lunar_day)
}

/// Kind of undertaking a good day is suited to. Declared in priority
/// order: when a day has several tags the first listed here names it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Category {
    KhaiTruong,
    LamNha,
    CuoiHoi,
    XuatHanh,
    CungLe,
    GiaoDich,
}

impl Category {
    pub const ALL: [Category; 6] = {
        use Category::*;
        [KhaiTruong, LamNha, CuoiHoi, XuatHanh, CungLe, GiaoDich]
    };

    pub fn tag(self) -> &'static str {
        match self {
            Self::KhaiTruong => "Khai trương",
            Self::LamNha => "Làm nhà",
            Self::CuoiHoi => "Cưới hỏi",
            Self::XuatHanh => "Xuất hành",
            Self::CungLe => "Cúng lễ",
            Self::GiaoDich => "Giao dịch",
        }
    }

    fn quotes(self) -> &'static [&'static str] {
        match self {
            Self::CuoiHoi => &[
                "Duyên cầm sắt hài hòa, trăm năm hạnh phúc bền lâu.",
                "Lương duyên trời định, sắc son một lòng.",
                "Loan phượng hòa minh, gia đạo hưng long.",
                "Trầu cau thắm tình, phu thê vẹn nghĩa.",
                "Giai ngẫu tự thiên thành, phúc lộc song toàn.",
                "Tình thắm duyên nồng, con cháu đầy đàn.",
                "Hôn nhân đại sự, vạn sự cát tường.",
                "Đồng vợ đồng chồng, tát biển Đông cũng cạn.",
            ],
            Self::KhaiTruong => &[
                "Khai trương hồng phát, tài lộc dồi dào tựa nước sông.",
                "Đại cát đại lợi, buôn may bán đắt, vạn sự hanh thông.",
                "Tài khí hưng vượng, khách đến như mây, tiền vào như nước.",
                "Thiên thời địa lợi, thương vụ phát đạt, tấn tài tấn lộc.",
                "Khởi đầu nan sự vẹn toàn, công danh sự nghiệp vững bền.",
                "Cửa hàng mở rộng, phúc khí tràn đầy, danh tiếng vang xa.",
                "Kinh doanh thuận lợi, tài nguyên quảng tiến.",
                "Vạn sự khởi đầu nan, gian nan đừng nản, thành công sẽ tới.",
            ],
            Self::XuatHanh => &[
                "Đường xa vạn dặm bình an, quý nhân phù trợ mọi đàng.",
                "Ra đi gặp may, trở về mang lộc, vạn sự như ý.",
                "Chân cứng đá mềm, vượt ngàn trùng khơi, thành công rực rỡ.",
                "Xuất hành cát lợi, bốn phương hội tụ, tài lộc theo về.",
                "Mây trời lồng lộng, chí lớn vươn xa, thỏa chí tang bồng.",
                "Ngựa xe như nước, bình an vô sự, đại cát đại lợi.",
                "Đi một ngày đàng, học một sàng khôn.",
                "Thuận buồm xuôi gió, đi đến nơi về đến chốn.",
            ],
            Self::LamNha => &[
                "An cư lạc nghiệp, nền móng vững bền, gia đạo an khang.",
                "Đất lành chim đậu, phong thủy hữu tình, phúc lộc trường tồn.",
                "Xây dựng cơ đồ, vững chãi ngàn năm, con cháu hưởng phước.",
                "Thượng lương đại cát, gia chủ phát tài, vạn sự bình an.",
                "Động thổ khai móng, thần linh chứng giám, công trình thuận lợi.",
                "Nhà cao cửa rộng, đón gió xuân sang, tài lộc ngập tràn.",
                "Tân gia đại cát, phúc khí mãn đường.",
                "Móng vững tường cao, che mưa chắn gió, ấm êm muôn đời.",
            ],
            Self::CungLe => &[
                "Thành tâm cầu nguyện, sở cầu như ý, sở nguyện tòng tâm.",
                "Tâm thành tất ứng, thần phật chứng tri, gia đạo bình an.",
                "Hương khói lan tỏa, tổ tiên phù hộ, con cháu hiếu thảo.",
                "Lễ mọn tâm thành, trời cao soi xét, ban phước ban lộc.",
                "Uống nước nhớ nguồn, ăn quả nhớ kẻ trồng cây.",
                "Đèn nhang rực rỡ, lòng thành kính dâng, vạn sự cát tường.",
                "Cầu được ước thấy, phúc đức vô lượng.",
                "Tâm sáng như gương, đức độ bao dung, quỷ thần kính phục.",
            ],
            Self::GiaoDich => &[
                "Thuận mua vừa bán, đôi bên cùng có lợi.",
                "Ký kết thành công, hợp tác trường tồn, tương lai rạng rỡ.",
                "Chữ tín làm đầu, vàng mười không đổi, danh tiếng vang xa.",
                "Thời cơ chín muồi, quyết đoán ắt thắng, lợi nhuận gia tăng.",
                "Gặp người tri kỷ, hợp tác bền lâu, cùng nhau phát triển.",
                "Vận trù trong trướng, quyết thắng ngàn dặm.",
                "Hợp đồng vững chắc, niềm tin trọn vẹn.",
                "Tài lộc gõ cửa, cơ hội trao tay, nắm bắt ngay kẻo lỡ.",
            ],
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| AlmanacError::invalid_symbol(s))
    }
}

const GENERAL: &str = "General";

const GENERAL_QUOTES: [&str; 10] = [
    "Thời vận hanh thông, mưu sự ắt thành.",
    "Thiên thời địa lợi nhân hòa, vạn sự như ý.",
    "Cát tinh chiếu mệnh, hung tinh lùi xa.",
    "Ngày lành tháng tốt, phúc khí tràn đầy.",
    "Tâm an vạn sự an, lòng thiện phúc sẽ đến.",
    "Gieo nhân lành gặt quả ngọt, tích đức phùng hung hóa cát.",
    "Vận khí đang lên, hãy nắm bắt cơ hội.",
    "Trời quang mây tạnh, lòng người phơi phới, vạn sự tốt lành.",
    "Họa phúc khôn lường, giữ tâm bất biến giữa dòng đời vạn biến.",
    "Nhân chi sơ tính bản thiện, hãy giữ lấy sơ tâm.",
];

/// Highest-priority category among `tags`. Unknown tags are ignored.
pub fn category_of<S: AsRef<str>>(tags: &[S]) -> Option<Category> {
    tags.iter().filter_map(|t| t.as_ref().parse().ok()).min()
}

/// A line of verse for a day tagged with `tags`, chosen by
/// `hash(seed + category)`. Days with no known tag get a general line.
///
/// ```
/// use hoangdao::advice::poetic_description;
///
/// let line = poetic_description(&["Cúng lễ", "Khai trương"], "2026-10-19");
/// assert_eq!("Khai trương hồng phát, tài lộc dồi dào tựa nước sông.", line);
/// ```
pub fn poetic_description<S: AsRef<str>>(tags: &[S], seed: &str) -> &'static str {
    match category_of(tags) {
        Some(category) => {
            *selector::pick(category.quotes(), Selector::new(&format!("{seed}{category}")).value())
        }
        None => *selector::pick(&GENERAL_QUOTES, Selector::new(&format!("{seed}{GENERAL}")).value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases() {
        use Phase::*;
        let dataset = [
            (1, Early),
            (7, Early),
            (8, Mid),
            (14, Mid),
            (15, Full),
            (16, Full),
            (17, Late),
            (30, Late),
        ];
        for (day, std) in dataset {
            assert_eq!(std, Phase::of(day), "day {day}");
        }
    }

    #[test]
    fn advice() {
        let dataset = [
            ((18, 4, "Đinh Sửu"), (LATE_QUOTES[4], GOOD_FOR[7], AVOID[1], BACKGROUND_IMAGES[4])),
            ((1, 1, "Giáp Thìn"), (EARLY_QUOTES[3], GOOD_FOR[8], AVOID[0], BACKGROUND_IMAGES[3])),
            ((15, 8, "Canh Ngọ"), (FULL_QUOTES[0], GOOD_FOR[11], AVOID[0], BACKGROUND_IMAGES[0])),
        ];
        for ((day, month, can_chi), (quote, good_for, avoid, image)) in dataset {
            let advice = daily_advice(day, month, can_chi);
            assert_eq!(quote, advice.quote);
            assert_eq!(good_for, advice.good_for);
            assert_eq!(avoid, advice.avoid);
            assert_eq!(image, advice.background_image);
            assert_eq!(advice, daily_advice(day, month, can_chi));
        }
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(daily_advice(18, 4, "Đinh Sửu")).unwrap();
        assert_eq!(LATE_QUOTES[4], json["quote"]);
        assert_eq!(BACKGROUND_IMAGES[4], json["backgroundImage"]);
        assert_eq!(serde_json::json!(GOOD_FOR[7]), json["goodFor"]);
    }

    #[test]
    fn quick() {
        assert_eq!(EARLY_QUOTES[1], quick_advice(1));
        assert_eq!(MID_QUOTES[4], quick_advice(14));
        assert_eq!(FULL_QUOTES[3], quick_advice(15));
        assert_eq!(LATE_QUOTES[0], quick_advice(30));
    }

    #[test]
    fn priority() {
        use Category::*;
        let dataset: [(&[&str], Option<Category>); 5] = [
            (&["Cúng lễ", "Khai trương"], Some(KhaiTruong)),
            (&["Xuất hành", "Cưới hỏi", "Làm nhà"], Some(LamNha)),
            (&["Giao dịch"], Some(GiaoDich)),
            (&["Học hành", "Xuất hành"], Some(XuatHanh)),
            (&["Học hành"], None),
        ];
        for (tags, std) in dataset {
            assert_eq!(std, category_of(tags), "{tags:?}");
        }
    }

    #[test]
    fn descriptions() {
        let none: [&str; 0] = [];
        assert_eq!(GENERAL_QUOTES[3], poetic_description(&none, "2026-10-19"));
        assert_eq!(GENERAL_QUOTES[3], poetic_description(&["Học hành"], "2026-10-19"));
        assert_eq!(
            Category::CungLe.quotes()[4],
            poetic_description(&["Cúng lễ"], "2024-02-10")
        );
        assert_eq!(
            Category::CuoiHoi.quotes()[6],
            poetic_description(&["Cúng lễ", "Cưới hỏi"], "2024-02-10")
        );
    }

    #[test]
    fn tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(category, category.tag().parse().unwrap());
            assert_eq!(8, category.quotes().len());
        }
        assert!("General".parse::<Category>().is_err());
    }
}
