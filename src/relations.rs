//! Chi harmonies and clashes, and the five-element cycles.
//!
//! All relations hold between two *different* branches; a branch is never in
//! harmony or clash with itself.

use crate::sexagenary::{Chi, Element};

/// Tam Hợp triads, indexed by `chi % 4`: Thân-Tý-Thìn, Tỵ-Dậu-Sửu,
/// Dần-Ngọ-Tuất, Hợi-Mão-Mùi.
pub const TAM_HOP: [[Chi; 3]; 4] = {
    use Chi::*;
    [
        [Than, Ty, Thin],
        [Ti, Dau, Suu],
        [Dan, Ngo, Tuat],
        [Hoi, Mao, Mui],
    ]
};

/// Lục Hợp partner of each branch (Tý-Sửu, Dần-Hợi, Mão-Tuất, Thìn-Dậu,
/// Tỵ-Thân, Ngọ-Mùi).
pub const LUC_HOP: [Chi; 12] = {
    use Chi::*;
    [Suu, Ty, Hoi, Tuat, Dau, Than, Mui, Ngo, Ti, Thin, Mao, Dan]
};

/// Element generated (sinh) by each element, indexed by [`Element`].
const GENERATES: [Element; 5] = {
    use Element::*;
    // Kim -> Thủy -> Mộc -> Hỏa -> Thổ -> Kim
    [Water, Wood, Earth, Metal, Fire]
};

/// Element controlled (khắc) by each element, indexed by [`Element`].
const CONTROLS: [Element; 5] = {
    use Element::*;
    // Kim -> Mộc -> Thổ -> Thủy -> Hỏa -> Kim
    [Wood, Fire, Metal, Water, Earth]
};

/// Relation between two branches, strongest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChiRelation {
    TamHop,
    LucHop,
    LucXung,
    Neutral,
}

impl ChiRelation {
    /// Classifies two branches. Tam Hợp wins over Lục Hợp, which wins over
    /// Lục Xung.
    ///
    /// # Example
    ///
    /// ```
    /// use hoangdao::relations::ChiRelation;
    /// use hoangdao::sexagenary::Chi;
    ///
    /// assert_eq!(ChiRelation::TamHop, ChiRelation::between(Chi::Than, Chi::Thin));
    /// assert_eq!(ChiRelation::LucXung, ChiRelation::between(Chi::Ty, Chi::Ngo));
    /// assert_eq!(ChiRelation::Neutral, ChiRelation::between(Chi::Ty, Chi::Ty));
    /// ```
    pub fn between(a: Chi, b: Chi) -> Self {
        if a == b {
            Self::Neutral
        } else if is_tam_hop(a, b) {
            Self::TamHop
        } else if is_luc_hop(a, b) {
            Self::LucHop
        } else if is_luc_xung(a, b) {
            Self::LucXung
        } else {
            Self::Neutral
        }
    }
}

pub fn is_tam_hop(a: Chi, b: Chi) -> bool {
    a != b && a.index() % 4 == b.index() % 4
}

pub fn is_luc_hop(a: Chi, b: Chi) -> bool {
    a != b && LUC_HOP[a.index()] == b
}

pub fn is_luc_xung(a: Chi, b: Chi) -> bool {
    (a.index() + 6) % 12 == b.index()
}

/// `true` if `a` generates `b` in the sinh cycle.
pub fn generates(a: Element, b: Element) -> bool {
    GENERATES[a.index()] == b
}

/// `true` if `a` controls `b` in the khắc cycle.
pub fn controls(a: Element, b: Element) -> bool {
    CONTROLS[a.index()] == b
}
