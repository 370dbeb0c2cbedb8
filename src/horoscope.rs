//! Daily horoscope for a birth profile.
//!
//! Scores and picks are keyed by `name|dob|time|place|date`, so one person
//! gets the same reading for a day however often it is asked for. The love
//! score follows the branch relation between the birth year and the day;
//! work and wealth follow the Nạp Âm elements of both.

use serde::Serialize;
use tracing::{debug, warn};

use crate::date::Date;
use crate::error::Result;
use crate::lunar::{self, LunarDateProvider};
use crate::profile::UserProfile;
use crate::relations::{self, ChiRelation};
use crate::selector::Selector;
use crate::sexagenary::{CanChi, Chi, Element};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct LuckyColor {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn color(name: &'static str, hex: &'static str) -> LuckyColor {
    LuckyColor { name, hex }
}

const GREEN: LuckyColor = color("Xanh Lá", "#10B981");
const BLUE: LuckyColor = color("Xanh Biển", "#3B82F6");
const RED: LuckyColor = color("Đỏ", "#EF4444");
const YELLOW: LuckyColor = color("Vàng", "#F59E0B");
const WHITE: LuckyColor = color("Trắng", "#F8FAFC");
const BLACK: LuckyColor = color("Đen", "#1E293B");

/// Lucky colours by element, indexed like [`Element::ALL`].
pub const LUCKY_COLORS: [[LuckyColor; 2]; 5] = [
    [WHITE, YELLOW],
    [BLACK, WHITE],
    [RED, GREEN],
    [YELLOW, RED],
    [GREEN, BLUE],
];

pub const DIRECTIONS: [&str; 8] = [
    "Đông", "Tây", "Nam", "Bắc", "Đông Nam", "Tây Nam", "Đông Bắc", "Tây Bắc",
];

/// Readings with `{}` standing for the user's branch.
const READINGS: [&str; 10] = [
    "Hôm nay là một ngày vô cùng thuận lợi đối với người tuổi {}. Bản mệnh được quý nhân phù trợ để đón nhận các cơ hội mới.",
    "Ngày hôm nay mang đến những điều bất ngờ tích cực cho tuổi {}. Hãy mở lòng đón nhận những may mắn đang đến gần.",
    "Người tuổi {} nên giữ tâm thế bình tĩnh trong ngày hôm nay. Sự kiên nhẫn sẽ mang lại kết quả tốt đẹp.",
    "Hôm nay là thời điểm tốt để tuổi {} thể hiện bản thân. Năng lượng tích cực đang bao quanh bạn.",
    "Ngày hôm nay khuyên người tuổi {} nên tĩnh tâm và lắng nghe trực giác. Câu trả lời đang ở trong bạn.",
    "Tuổi {} sẽ gặp nhiều thuận lợi trong công việc hôm nay. Đây là lúc để bạn tỏa sáng.",
    "Hôm nay là ngày tốt để người tuổi {} chăm sóc các mối quan hệ. Tình cảm được củng cố vững chắc.",
    "Ngày hôm nay mang đến cơ hội mới cho tuổi {}. Hãy dũng cảm nắm bắt những gì đến với bạn.",
    "Người tuổi {} nên dành thời gian suy ngẫm hôm nay. Sự tĩnh lặng sẽ mang lại sự minh mẫn.",
    "Hôm nay là ngày đầy năng lượng cho tuổi {}. Hãy tận dụng sức mạnh này để hoàn thành mục tiêu.",
];

/// Readings for a day when nothing is known about the reader.
const GENERIC_READINGS: [&str; 5] = [
    "Hôm nay là ngày {}, khí trời điều hòa. Hãy bắt đầu mọi việc với tâm thế nhẹ nhàng.",
    "Ngày {} thích hợp để sắp xếp lại công việc và hoàn tất những việc còn dang dở.",
    "Năng lượng ngày {} khá ổn định. Giữ sự kiên nhẫn sẽ mang lại kết quả tốt.",
    "Ngày {} nên dành thời gian cho gia đình và những người thân yêu.",
    "Ngày {} là dịp tốt để lắng nghe bản thân và chăm sóc sức khỏe.",
];

pub const MESSAGES: [&str; 10] = [
    "Sự nghiệp đang trên đà thăng tiến. Hãy tự tin tỏa sáng!",
    "Tình duyên hanh thông, hạnh phúc đang chờ đón bạn phía trước.",
    "Tài lộc hanh thông, cơ hội kinh doanh đang rộng mở.",
    "Sức khỏe dồi dào, năng lượng tích cực tràn đầy.",
    "Hãy dành thời gian chăm sóc bản thân và lắng nghe tiếng nói nội tâm.",
    "Đây là thời điểm tốt để học hỏi và phát triển bản thân.",
    "Hãy tin tưởng vào khả năng của mình, thành công đang đến gần.",
    "Sự kiên trì của bạn sẽ được đền đáp xứng đáng.",
    "Hãy mở lòng với những điều mới mẻ, may mắn đang chờ bạn.",
    "Giữ vững niềm tin, mọi khó khăn sẽ qua đi.",
];

const MIN_SCORE: i32 = 45;
const MAX_SCORE: i32 = 98;

/// Four aspect scores, each `45..=98`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Scores {
    pub work: u32,
    pub love: u32,
    pub wealth: u32,
    pub health: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct LuckyFactors {
    pub color: LuckyColor,
    /// `1..=9`
    pub number: u32,
    pub direction: &'static str,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHoroscope {
    pub date: Date,
    pub zodiac_name: String,
    pub zodiac_icon: &'static str,
    pub scores: Scores,
    pub lucky_factors: LuckyFactors,
    pub reading: String,
    pub message: &'static str,
    /// `false` for the date-only reading given when the profile is unreadable.
    pub is_personalized: bool,
}

/// What the scores are modulated by.
#[derive(Debug, Copy, Clone)]
struct Reader {
    chi: Chi,
    element: Element,
}

fn clamp(score: i32) -> u32 {
    score.clamp(MIN_SCORE, MAX_SCORE) as u32
}

fn scores(sel: &Selector, reader: Option<Reader>, day: CanChi) -> Scores {
    let base = |shift| 65 + sel.shifted(shift, 20) as i32;
    let (mut work, mut love, mut wealth, health) = (base(0), base(2), base(4), base(6));
    if let Some(reader) = reader {
        love += match ChiRelation::between(reader.chi, day.chi()) {
            ChiRelation::TamHop => 15,
            ChiRelation::LucHop => 10,
            ChiRelation::LucXung => -20,
            ChiRelation::Neutral => 0,
        };
        let day_element = day.element();
        if relations::generates(reader.element, day_element) {
            work += 8;
        }
        if relations::generates(day_element, reader.element) {
            wealth += 8;
        }
        if relations::controls(reader.element, day_element) {
            wealth -= 12;
        }
    }
    Scores {
        work: clamp(work),
        love: clamp(love),
        wealth: clamp(wealth),
        health: clamp(health),
    }
}

fn lucky_factors(sel: &Selector, element: Element) -> LuckyFactors {
    let number = match sel.value() % 10 {
        0 => 9,
        n => n,
    };
    LuckyFactors {
        color: *sel.pick(&LUCKY_COLORS[element.index()]),
        number,
        direction: *sel.pick(&DIRECTIONS),
    }
}

/// Horoscope of `profile` for `date`.
///
/// A birth date that cannot be read does not fail: the reading falls back
/// to [`generic_horoscope`] for the date. Provider failures and unknown
/// pillar symbols do.
pub fn daily_horoscope(
    provider: &dyn LunarDateProvider,
    profile: &UserProfile,
    date: Date,
) -> Result<DailyHoroscope> {
    let birth = match profile.birth_date() {
        Ok(birth) => birth,
        Err(err) => {
            warn!(%err, "unreadable profile, giving a generic horoscope");
            return Ok(generic_horoscope(date));
        }
    };
    let year = lunar::lunar_info(provider, birth)?.year_pillar()?;
    let day = lunar::lunar_info(provider, date)?.day_pillar()?;
    let reader = Reader {
        chi: year.chi(),
        element: year.element(),
    };
    let sel = Selector::new(&profile.seed_for(date));
    let horoscope = DailyHoroscope {
        date,
        zodiac_name: format!("Tuổi {}", reader.chi),
        zodiac_icon: reader.chi.icon(),
        scores: scores(&sel, Some(reader), day),
        lucky_factors: lucky_factors(&sel, reader.element),
        reading: sel.pick(&READINGS).replace("{}", reader.chi.name()),
        message: *sel.pick_reversed(&MESSAGES),
        is_personalized: true,
    };
    debug!(date = %date.iso_gregorian(), %day, scores = ?horoscope.scores, "horoscope");
    Ok(horoscope)
}

/// Date-only horoscope, keyed by the ISO date. Needs no provider: the day
/// pillar comes straight from the day number.
pub fn generic_horoscope(date: Date) -> DailyHoroscope {
    let day = CanChi::from_cycle(date.sexagenary());
    let sel = Selector::new(&date.iso_gregorian());
    DailyHoroscope {
        date,
        zodiac_name: format!("Ngày {day}"),
        zodiac_icon: day.chi().icon(),
        scores: scores(&sel, None, day),
        lucky_factors: lucky_factors(&sel, day.element()),
        reading: sel.pick(&GENERIC_READINGS).replace("{}", &day.to_string()),
        message: *sel.pick_reversed(&MESSAGES),
        is_personalized: false,
    }
}
