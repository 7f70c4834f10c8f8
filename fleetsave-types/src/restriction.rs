use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A charging policy restriction a fleet manager can enable.
///
/// `MonthlyBudget` and `PriceCap` are mutually exclusive: a selection holding
/// one of them must never offer the other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionKind {
    #[serde(alias = "monthly_charging_budget")]
    MonthlyBudget,
    #[serde(alias = "kwh_price_cap")]
    PriceCap,
    CountryRestriction,
    FastCharging,
}

impl RestrictionKind {
    /// Every kind, in canonical display order.
    pub const ALL: [RestrictionKind; 4] = [
        RestrictionKind::MonthlyBudget,
        RestrictionKind::PriceCap,
        RestrictionKind::CountryRestriction,
        RestrictionKind::FastCharging,
    ];

    /// Wire name used in config files, CLI flags and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            RestrictionKind::MonthlyBudget => "monthly_budget",
            RestrictionKind::PriceCap => "price_cap",
            RestrictionKind::CountryRestriction => "country_restriction",
            RestrictionKind::FastCharging => "fast_charging",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RestrictionKind::MonthlyBudget => "Monthly charging budget",
            RestrictionKind::PriceCap => "Price cap per kWh",
            RestrictionKind::CountryRestriction => "Country restriction",
            RestrictionKind::FastCharging => "Block fast charging",
        }
    }

    /// The other half of the mutually exclusive pair, if this kind has one.
    pub fn conflicts_with(self) -> Option<RestrictionKind> {
        match self {
            RestrictionKind::MonthlyBudget => Some(RestrictionKind::PriceCap),
            RestrictionKind::PriceCap => Some(RestrictionKind::MonthlyBudget),
            RestrictionKind::CountryRestriction | RestrictionKind::FastCharging => None,
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown restriction '{input}' (expected one of: monthly_budget, price_cap, country_restriction, fast_charging)")]
pub struct ParseRestrictionKindError {
    pub input: String,
}

impl FromStr for RestrictionKind {
    type Err = ParseRestrictionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "monthly_budget" | "monthly_charging_budget" => Ok(RestrictionKind::MonthlyBudget),
            "price_cap" | "kwh_price_cap" => Ok(RestrictionKind::PriceCap),
            "country_restriction" => Ok(RestrictionKind::CountryRestriction),
            "fast_charging" => Ok(RestrictionKind::FastCharging),
            _ => Err(ParseRestrictionKindError {
                input: s.to_string(),
            }),
        }
    }
}
