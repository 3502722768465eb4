//! Price tiers shown as won-sign symbols

use std::fmt;

/// Five-step price tier, `₩` through `₩₩₩₩₩`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceTier {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl PriceTier {
    /// Tier used for cafes when the places API has no price level
    pub const CAFE_FALLBACK: PriceTier = PriceTier::Two;

    /// Map a places API `price_level` (0-4). Missing or out-of-range is `None`.
    pub fn from_price_level(level: Option<i64>) -> Option<Self> {
        match level? {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            2 => Some(Self::Three),
            3 => Some(Self::Four),
            4 => Some(Self::Five),
            _ => None,
        }
    }

    /// Tier implied by the user's budget in won
    pub fn from_budget(budget: i64) -> Self {
        match budget {
            b if b <= 10_000 => Self::One,
            b if b <= 15_000 => Self::Two,
            b if b <= 20_000 => Self::Three,
            _ => Self::Four,
        }
    }

    /// External price level first, budget second
    pub fn resolve(level: Option<i64>, budget: i64) -> Self {
        Self::from_price_level(level).unwrap_or_else(|| Self::from_budget(budget))
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::One => "₩",
            Self::Two => "₩₩",
            Self::Three => "₩₩₩",
            Self::Four => "₩₩₩₩",
            Self::Five => "₩₩₩₩₩",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
