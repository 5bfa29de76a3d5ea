//! Classification policies: tier thresholds and staleness rules.

use serde::{Deserialize, Serialize};

/// Sales-performance tier (Pareto-style bucket).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        };
        f.write_str(s)
    }
}

/// Tier thresholds on cumulative revenue share, inclusive upper bounds.
///
/// `cumshare <= a_max` → A, `a_max < cumshare <= b_max` → B, above → C.
/// Note the literal consequence at the low boundary: a cumshare of exactly
/// 0 (zero total revenue) still satisfies `0 <= a_max` and tiers as A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPolicy {
    pub a_max: f64,
    pub b_max: f64,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            a_max: 0.80,
            b_max: 0.95,
        }
    }
}

impl TierPolicy {
    pub fn tier_for(&self, cumshare: f64) -> Tier {
        if cumshare <= self.a_max {
            Tier::A
        } else if cumshare <= self.b_max {
            Tier::B
        } else {
            Tier::C
        }
    }
}

/// When a SKU counts as stale (dead stock).
///
/// A SKU is stale when its oldest listing predates `age_months` calendar
/// months before the run date AND it has no order in `recent_year`, no
/// delivered order ever, and zero review/rating engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StalenessPolicy {
    /// Calendar months (not days) back from the run date.
    pub age_months: u32,
    /// "Recently transacted" is a hard calendar-year filter, not a rolling
    /// window.
    pub recent_year: i32,
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self {
            age_months: 5,
            recent_year: 2025,
        }
    }
}

/// Full classification policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyPolicy {
    pub tiers: TierPolicy,
    pub staleness: StalenessPolicy,
    /// Order-status label marking a completed, fulfilled sale. The source
    /// marketplace emits Russian lifecycle labels.
    pub delivered_status: String,
}

impl Default for ClassifyPolicy {
    fn default() -> Self {
        Self {
            tiers: TierPolicy::default(),
            staleness: StalenessPolicy::default(),
            delivered_status: "Доставлен".to_string(),
        }
    }
}
