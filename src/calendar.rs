//! Calendar view models: day records, the month grid, the selected day and
//! the month's auspicious days.
//!
//! Days are independent of each other, so whole months are evaluated on the
//! rayon pool. The output does not depend on evaluation order.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::advice::{self, Category, DailyAdvice};
use crate::config::AlmanacConfig;
use crate::date::{self, Date};
use crate::error::{AlmanacError, Result};
use crate::hoang_dao::{self, DayAuspiciousness, ScoredHour};
use crate::lunar::{self, LunarDateProvider};
use crate::moon::{self, MoonPhase};
use crate::sexagenary::{fmt, CanChi, Chi};
use crate::solar_term::{self, SolarTerm};

/// Cells in a month grid: six Monday-first weeks.
pub const GRID_CELLS: i32 = 42;

/// Everything shown for one solar day.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: Date,
    /// Day of the solar month
    pub day: u32,
    pub lunar_day: u32,
    pub lunar_month: u32,
    pub lunar_year: i32,
    pub is_leap_month: bool,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    pub day_can_chi: String,
    pub month_can_chi: String,
    pub year_can_chi: String,
    pub auspiciousness: DayAuspiciousness,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_term: Option<SolarTerm>,
}

impl CalendarDay {
    /// `"d/m Âm Lịch - Năm <year pillar>"`
    pub fn full_lunar_date(&self) -> String {
        fmt::full_lunar_date(self.lunar_day, self.lunar_month, &self.year_can_chi)
    }

    pub fn day_pillar(&self) -> Result<CanChi> {
        CanChi::parse(&self.day_can_chi)
    }
}

/// Builds the record of `date`. `is_current_month` is the caller's call.
pub fn calendar_day(
    provider: &dyn LunarDateProvider,
    date: Date,
    today: Date,
    is_current_month: bool,
) -> Result<CalendarDay> {
    let info = lunar::lunar_info(provider, date)?;
    let auspiciousness = hoang_dao::day_auspiciousness(info.lunar_date.month, info.day_chi()?);
    Ok(CalendarDay {
        date,
        day: date.gregorian().2 as u32,
        lunar_day: info.lunar_date.day,
        lunar_month: info.lunar_date.month,
        lunar_year: info.lunar_date.year,
        is_leap_month: info.lunar_date.is_leap_month,
        is_current_month,
        is_today: date == today,
        is_weekend: date.is_weekend(),
        day_can_chi: info.day_can_chi,
        month_can_chi: info.month_can_chi,
        year_can_chi: info.year_can_chi,
        auspiciousness,
        solar_term: solar_term::term_start(date),
    })
}

fn first_of_month(year: i32, month: i32) -> Result<Date> {
    Date::from_gregorian(year, month, 1).ok_or(AlmanacError::InvalidDate { year, month, day: 1 })
}

/// The 42-cell grid of a solar month, Monday first, padded with the
/// trailing days of the previous month and the leading days of the next.
///
/// # Example
///
/// ```
/// use hoangdao::Date;
/// use hoangdao::calendar::month_grid;
/// use hoangdao::lunar::vietnamese::VietnameseCalendar;
///
/// let today = Date::from_gregorian(2026, 10, 19).unwrap();
/// let grid = month_grid(&VietnameseCalendar::default(), 2026, 10, today).unwrap();
/// assert_eq!(42, grid.len());
/// assert_eq!("2026-09-28", grid[0].date.iso_gregorian());
/// assert!(grid[21].is_today);
/// ```
pub fn month_grid(
    provider: &dyn LunarDateProvider,
    year: i32,
    month: i32,
    today: Date,
) -> Result<Vec<CalendarDay>> {
    let first = first_of_month(year, month)?;
    let start = first + (1 - first.day_of_week());
    let grid = (0..GRID_CELLS)
        .into_par_iter()
        .map(|i| {
            let date = start + i;
            calendar_day(provider, date, today, date.gregorian().1 == month)
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(year, month, first = %start.iso_gregorian(), "month grid");
    Ok(grid)
}

/// A day opened in detail.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedDateInfo {
    #[serde(flatten)]
    pub day: CalendarDay,
    pub weekday_name: &'static str,
    pub moon_phase: MoonPhase,
    /// Only the very good hours; may be empty.
    pub hoang_dao_hours: Vec<ScoredHour>,
    pub advice: DailyAdvice,
}

/// Details of `date`, with hours scored for the configured default subject.
pub fn selected_date_info(
    provider: &dyn LunarDateProvider,
    config: &AlmanacConfig,
    date: Date,
    today: Date,
) -> Result<SelectedDateInfo> {
    let day = calendar_day(provider, date, today, true)?;
    let pillar = day.day_pillar()?;
    let hours = hoang_dao::very_good_hours(pillar, config.default_subject, config.very_good_hour_threshold);
    Ok(SelectedDateInfo {
        weekday_name: fmt::weekday(date.day_of_week()),
        moon_phase: moon::moon_phase(day.lunar_day),
        hoang_dao_hours: hours,
        advice: advice::daily_advice(day.lunar_day, day.lunar_month, &day.day_can_chi),
        day,
    })
}

/// A day on the month's auspicious list.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthAuspiciousDay {
    pub date: Date,
    pub day: u32,
    /// Short weekday, `"T2"` to `"CN"`
    pub weekday: &'static str,
    /// `"d/m - <day pillar>"`
    pub lunar_date: String,
    pub day_can_chi: String,
    #[serde(rename = "type")]
    pub kind: DayAuspiciousness,
    /// `0..=100`
    pub score: u32,
    pub description: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_term: Option<SolarTerm>,
    pub good_for: Vec<Category>,
}

/// Score of a day, `0..=100`.
pub fn day_score(
    auspiciousness: DayAuspiciousness,
    lunar_day: u32,
    has_solar_term: bool,
    is_weekend: bool,
) -> u32 {
    let mut score = 50;
    score += match auspiciousness {
        DayAuspiciousness::HoangDao => 30,
        DayAuspiciousness::BinhThuong => 0,
        DayAuspiciousness::HacDao => -20,
    };
    if lunar_day == 1 || lunar_day == 15 {
        score += 10;
    }
    if has_solar_term {
        score += 15;
    }
    if is_weekend {
        score -= 5;
    }
    score.clamp(0, 100) as u32
}

/// Display colour of a day score.
pub fn score_color(score: u32) -> &'static str {
    if score >= 80 {
        "#22c55e"
    } else if score >= 60 {
        "#f59e0b"
    } else if score < 40 {
        "#ef4444"
    } else {
        "#64748b"
    }
}

const WEDDING_DAYS: [u32; 12] = [2, 4, 6, 8, 10, 12, 16, 18, 20, 22, 24, 26];
/// Tam Nương days.
const BAD_TRAVEL_DAYS: [u32; 6] = [3, 7, 13, 18, 22, 27];
/// Nguyệt Kỵ days.
const BUILDING_TABOO_DAYS: [u32; 3] = [5, 14, 23];

/// What a day suits, in a fixed order: weddings, openings, travel,
/// building, offerings.
pub fn suitable_for(day: &CalendarDay, day_chi: Chi, score: u32) -> Vec<Category> {
    let hoang_dao = day.auspiciousness == DayAuspiciousness::HoangDao;
    let workday = !day.is_weekend;
    let lunar_day = day.lunar_day;
    let mut tags = Vec::new();
    if hoang_dao && WEDDING_DAYS.contains(&lunar_day) {
        tags.push(Category::CuoiHoi);
    }
    // yang branches
    if hoang_dao && workday && day_chi.index() % 2 == 0 {
        tags.push(Category::KhaiTruong);
    }
    if score >= 65 && workday && !BAD_TRAVEL_DAYS.contains(&lunar_day) {
        tags.push(Category::XuatHanh);
    }
    if hoang_dao
        && matches!(day_chi, Chi::Dan | Chi::Mao | Chi::Thin | Chi::Ti)
        && !BUILDING_TABOO_DAYS.contains(&lunar_day)
    {
        tags.push(Category::LamNha);
    }
    if lunar_day == 1 || lunar_day == 15 {
        tags.push(Category::CungLe);
    }
    tags
}

fn auspicious_day(day: CalendarDay) -> Result<MonthAuspiciousDay> {
    let day_chi = day.day_pillar()?.chi();
    let score = day_score(day.auspiciousness, day.lunar_day, day.solar_term.is_some(), day.is_weekend);
    let good_for = suitable_for(&day, day_chi, score);
    let tags: Vec<&str> = good_for.iter().map(|c| c.tag()).collect();
    Ok(MonthAuspiciousDay {
        weekday: fmt::weekday_short(day.date.day_of_week()),
        lunar_date: format!("{} - {}", fmt::lunar_date(day.lunar_day, day.lunar_month), day.day_can_chi),
        description: advice::poetic_description(&tags, &day.date.iso_gregorian()),
        color: score_color(score),
        score,
        good_for,
        date: day.date,
        day: day.day,
        kind: day.auspiciousness,
        solar_term: day.solar_term,
        day_can_chi: day.day_can_chi,
    })
}

/// Days of a solar month scoring at least the configured threshold, in
/// day order.
pub fn month_auspicious_days(
    provider: &dyn LunarDateProvider,
    config: &AlmanacConfig,
    year: i32,
    month: i32,
) -> Result<Vec<MonthAuspiciousDay>> {
    let first = first_of_month(year, month)?;
    let mut days = (0..date::days_in_month(year, month))
        .into_par_iter()
        .map(|i| auspicious_day(calendar_day(provider, first + i, first, true)?))
        .collect::<Result<Vec<_>>>()?;
    days.retain(|d| d.score >= config.auspicious_day_threshold);
    days.sort_by_key(|d| d.day);
    debug!(year, month, count = days.len(), "auspicious days");
    Ok(days)
}
