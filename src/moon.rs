//! Moon phase from the lunar day.

use serde::Serialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// Vietnamese label. Waxing and waning shapes share a label.
    pub fn label(&self) -> &'static str {
        use PhaseName::*;
        match self {
            New => "Trăng Non",
            WaxingCrescent | WaningCrescent => "Trăng Lưỡi Liềm",
            FirstQuarter | LastQuarter => "Bán Nguyệt",
            WaxingGibbous | WaningGibbous => "Trăng Khuyết",
            Full => "Trăng Tròn",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhase {
    pub phase: PhaseName,
    pub label: &'static str,
    /// `0..=100`
    pub illumination: u32,
    pub is_waxing: bool,
}

/// Phase of the moon on lunar day `lunar_day`, clamped to `1..=30`.
///
/// Illumination rises linearly from day 1 to 100% on day 15, then falls
/// back to 0 on day 30.
///
/// # Example
///
/// ```
/// use hoangdao::moon::{moon_phase, PhaseName};
///
/// let full = moon_phase(16);
/// assert_eq!(PhaseName::Full, full.phase);
/// assert_eq!(93, full.illumination);
/// assert!(!full.is_waxing);
/// ```
pub fn moon_phase(lunar_day: u32) -> MoonPhase {
    use PhaseName::*;
    let day = lunar_day.clamp(1, 30);
    let lit = if day <= 15 {
        (day - 1) as f64 / 14.0
    } else {
        (30 - day) as f64 / 15.0
    };
    let illumination = (lit * 100.0).round() as u32;
    let phase = match day {
        1 => New,
        2..=6 => WaxingCrescent,
        7..=9 => FirstQuarter,
        10..=14 => WaxingGibbous,
        15 | 16 => Full,
        17..=21 => WaningGibbous,
        22..=24 => LastQuarter,
        _ => WaningCrescent,
    };
    MoonPhase {
        phase,
        label: phase.label(),
        illumination,
        is_waxing: day <= 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        use PhaseName::*;
        let dataset = [
            (1, (New, 0, true)),
            (7, (FirstQuarter, 43, true)),
            (15, (Full, 100, true)),
            (16, (Full, 93, false)),
            (22, (LastQuarter, 53, false)),
            (30, (WaningCrescent, 0, false)),
            (0, (New, 0, true)),
            (45, (WaningCrescent, 0, false)),
        ];
        for (day, (phase, illumination, is_waxing)) in dataset {
            let m = moon_phase(day);
            assert_eq!((phase, illumination, is_waxing), (m.phase, m.illumination, m.is_waxing), "day {day}");
            assert_eq!(phase.label(), m.label);
        }
    }

    #[test]
    fn illumination_peaks_at_full_moon() {
        for day in 1..15 {
            assert!(moon_phase(day).illumination < moon_phase(day + 1).illumination);
        }
        for day in 15..30 {
            assert!(moon_phase(day).illumination > moon_phase(day + 1).illumination);
        }
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_value(moon_phase(3)).unwrap();
        assert_eq!("waxing_crescent", json["phase"]);
        assert_eq!("Trăng Lưỡi Liềm", json["label"]);
        assert_eq!(true, json["isWaxing"]);
    }
}
