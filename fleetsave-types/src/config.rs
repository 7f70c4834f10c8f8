use crate::country::CountryCode;
use crate::restriction::RestrictionKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable fleet snapshot handed to the savings engine.
///
/// A fresh value is built for every evaluation. `monthly_charging_budget` is only read when
/// `MonthlyBudget` is selected and `kwh_price_cap` only when `PriceCap` is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetConfiguration {
    pub car_count: u32,
    pub yearly_mileage_allowed: f64,

    #[serde(default)]
    pub restrictions: BTreeSet<RestrictionKind>,

    #[serde(default)]
    pub country_restrictions: Vec<CountryCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_charging_budget: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwh_price_cap: Option<f64>,
}

impl FleetConfiguration {
    pub fn new(car_count: u32, yearly_mileage_allowed: f64) -> Self {
        Self {
            car_count,
            yearly_mileage_allowed,
            restrictions: BTreeSet::new(),
            country_restrictions: Vec::new(),
            monthly_charging_budget: None,
            kwh_price_cap: None,
        }
    }

    pub fn with_restriction(mut self, kind: RestrictionKind) -> Self {
        self.restrictions.insert(kind);
        self
    }

    pub fn with_countries(mut self, countries: Vec<CountryCode>) -> Self {
        self.country_restrictions = countries;
        self
    }

    pub fn with_monthly_budget(mut self, budget: f64) -> Self {
        self.monthly_charging_budget = Some(budget);
        self
    }

    pub fn with_price_cap(mut self, cap: f64) -> Self {
        self.kwh_price_cap = Some(cap);
        self
    }

    pub fn has(&self, kind: RestrictionKind) -> bool {
        self.restrictions.contains(&kind)
    }

    /// True when the only allowed country is Belgium.
    pub fn restricted_to_belgium_only(&self) -> bool {
        matches!(self.country_restrictions.as_slice(), [only] if only.is_belgium())
    }
}

/// Host-side form state: any field may still be missing.
///
/// A draft turns into a [`FleetConfiguration`] once fleet size and mileage are both present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_mileage_allowed: Option<f64>,

    pub restrictions: BTreeSet<RestrictionKind>,

    pub country_restrictions: Vec<CountryCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_charging_budget: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kwh_price_cap: Option<f64>,
}

impl From<FleetConfiguration> for FleetDraft {
    fn from(cfg: FleetConfiguration) -> Self {
        Self {
            car_count: Some(cfg.car_count),
            yearly_mileage_allowed: Some(cfg.yearly_mileage_allowed),
            restrictions: cfg.restrictions,
            country_restrictions: cfg.country_restrictions,
            monthly_charging_budget: cfg.monthly_charging_budget,
            kwh_price_cap: cfg.kwh_price_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        s.parse().unwrap()
    }

    #[test]
    fn belgium_only_requires_exactly_one_entry() {
        let base = FleetConfiguration::new(1, 1.0);
        assert!(!base.restricted_to_belgium_only());
        assert!(
            base.clone()
                .with_countries(vec![code("BE")])
                .restricted_to_belgium_only()
        );
        assert!(
            !base
                .clone()
                .with_countries(vec![code("BE"), code("NL")])
                .restricted_to_belgium_only()
        );
        assert!(
            !base
                .with_countries(vec![code("FR")])
                .restricted_to_belgium_only()
        );
    }

    #[test]
    fn draft_from_configuration_keeps_values() {
        let cfg = FleetConfiguration::new(3, 12000.0)
            .with_restriction(RestrictionKind::PriceCap)
            .with_price_cap(0.4);
        let draft = FleetDraft::from(cfg);
        assert_eq!(draft.car_count, Some(3));
        assert_eq!(draft.yearly_mileage_allowed, Some(12000.0));
        assert!(draft.restrictions.contains(&RestrictionKind::PriceCap));
        assert_eq!(draft.kwh_price_cap, Some(0.4));
        assert!(draft.monthly_charging_budget.is_none());
    }
}
