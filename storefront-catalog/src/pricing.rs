use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Customer tiers that earn a discount. Any other label earns nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiscountTier {
    Gold,
    Silver,
    Bronze,
}

impl DiscountTier {
    pub const ALL: [DiscountTier; 3] = [DiscountTier::Gold, DiscountTier::Silver, DiscountTier::Bronze];

    /// Exact, case-sensitive match on the tier label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "gold" => Some(DiscountTier::Gold),
            "silver" => Some(DiscountTier::Silver),
            "bronze" => Some(DiscountTier::Bronze),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountTier::Gold => "gold",
            DiscountTier::Silver => "silver",
            DiscountTier::Bronze => "bronze",
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            DiscountTier::Gold => 0.20,
            DiscountTier::Silver => 0.10,
            DiscountTier::Bronze => 0.05,
        }
    }
}

/// Label -> rate lookup. Unknown labels resolve to a zero rate, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountSchedule {
    /// Multiplicative discount rate per tier label (e.g., "gold" => 0.20)
    pub tier_rates: HashMap<String, f64>,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            tier_rates: DiscountTier::ALL
                .iter()
                .map(|tier| (tier.label().to_string(), tier.rate()))
                .collect(),
        }
    }
}

impl DiscountSchedule {
    pub fn new(tier_rates: HashMap<String, f64>) -> Self {
        Self { tier_rates }
    }

    pub fn rate_for(&self, tier: &str) -> f64 {
        self.tier_rates.get(tier).copied().unwrap_or(0.0)
    }

    /// Discount amount for `price`. The price is not validated; negative
    /// prices yield negative discounts.
    pub fn discount(&self, price: f64, tier: &str) -> f64 {
        let rate = self.rate_for(tier);
        if rate == 0.0 {
            tracing::trace!(tier, "No discount for tier");
        }
        price * rate
    }
}

/// Discount amount for `price` at the built-in tier rates.
pub fn calculate_discount(price: f64, tier: &str) -> f64 {
    DiscountTier::from_label(tier).map_or(0.0, |t| price * t.rate())
}
