use crate::restriction::RestrictionKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A restriction as offered to the selector, with its current availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionOption {
    pub kind: RestrictionKind,

    #[serde(default)]
    pub disabled: bool,
}

/// Availability of every restriction kind, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionAvailability(pub Vec<RestrictionOption>);

impl OptionAvailability {
    /// Every kind enabled.
    pub fn all_enabled() -> Self {
        Self(
            RestrictionKind::ALL
                .into_iter()
                .map(|kind| RestrictionOption {
                    kind,
                    disabled: false,
                })
                .collect(),
        )
    }

    pub fn options(&self) -> &[RestrictionOption] {
        &self.0
    }

    pub fn is_enabled(&self, kind: RestrictionKind) -> bool {
        self.0.iter().any(|o| o.kind == kind && !o.disabled)
    }

    pub fn disabled(&self) -> impl Iterator<Item = RestrictionKind> + '_ {
        self.0.iter().filter(|o| o.disabled).map(|o| o.kind)
    }
}

impl Default for OptionAvailability {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// An extra input the host has to collect because of the selected restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpInput {
    MonthlyChargingBudget,
    KwhPriceCap,
    AllowedCountries,
    /// Not a field: the host only informs the user that fast charging will be blocked.
    FastChargingNotice,
}

impl FollowUpInput {
    pub fn prompt(self) -> &'static str {
        match self {
            FollowUpInput::MonthlyChargingBudget => "Monthly charging budget per car (EUR)",
            FollowUpInput::KwhPriceCap => "Maximum price per kWh (EUR, at most 0.65)",
            FollowUpInput::AllowedCountries => "Countries where charging is allowed",
            FollowUpInput::FastChargingNotice => "Fast charging will be blocked for all cars",
        }
    }
}

/// Result of resolving a requested restriction set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    pub resolved: BTreeSet<RestrictionKind>,
    pub options: OptionAvailability,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_ups: Vec<FollowUpInput>,
}
