//! Input validation for hosts.
//!
//! The engine never re-validates: it zeroes contributions whose optional values are missing or
//! non-positive. Hosts call these checks before evaluating so users see why a value was refused.

use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::{FleetConfiguration, FleetDraft};
use fleetsave_types::country::CountryCode;
use fleetsave_types::restriction::RestrictionKind;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("car count must be at least 1 (got {0})")]
    CarCountTooLow(u32),

    #[error("yearly mileage allowed must be a number of at least 1 (got {0})")]
    MileageTooLow(f64),

    #[error("yearly mileage allowed must be at most {max} (got {value})")]
    MileageTooHigh { value: f64, max: f64 },

    #[error("monthly charging budget must be greater than 0 (got {0})")]
    BudgetNotPositive(f64),

    #[error("kWh price cap must be greater than 0 and at most {max} (got {value})")]
    PriceCapOutOfRange { value: f64, max: f64 },

    #[error("restrictions monthly_budget and price_cap cannot be combined")]
    ConflictingRestrictions,

    #[error("restriction {0} requires a value")]
    MissingValue(RestrictionKind),

    #[error("country {0} is not selectable")]
    UnsupportedCountry(CountryCode),

    #[error("country {0} is listed more than once")]
    DuplicateCountry(CountryCode),

    #[error("assumption {name} must be {requirement} (got {value})")]
    InvalidAssumption {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

/// Upper bound of a kWh price cap; lowered further when the reference price is overridden below it.
pub const PRICE_CAP_MAX: f64 = 0.65;

/// Upper bound of the yearly mileage per car.
pub const MAX_YEARLY_MILEAGE: f64 = 1_000_000.0;

/// Assumptions used as divisors; everything else only has to be non-negative.
const DIVISOR_ASSUMPTIONS: [&str; 3] = [
    "reference_kwh_price",
    "cars_per_working_day",
    "savings_per_complaint",
];

/// Checks overridden model constants before they reach the engine.
///
/// All values must be finite and non-negative; divisors and the reference price must be
/// strictly positive.
pub fn validate_assumptions(assumptions: &Assumptions) -> Result<(), ValidationError> {
    for (name, value) in assumptions.named_values() {
        let strict = DIVISOR_ASSUMPTIONS.contains(&name);
        let ok = value.is_finite() && if strict { value > 0.0 } else { value >= 0.0 };
        if !ok {
            return Err(ValidationError::InvalidAssumption {
                name,
                value,
                requirement: if strict {
                    "a finite number greater than 0"
                } else {
                    "a finite number of at least 0"
                },
            });
        }
    }
    Ok(())
}

/// Checks a complete snapshot. Returns the first problem found.
pub fn validate_configuration(
    cfg: &FleetConfiguration,
    assumptions: &Assumptions,
) -> Result<(), ValidationError> {
    if cfg.car_count < 1 {
        return Err(ValidationError::CarCountTooLow(cfg.car_count));
    }
    check_mileage(cfg.yearly_mileage_allowed)?;
    check_optional_inputs(
        &cfg.restrictions,
        &cfg.country_restrictions,
        cfg.monthly_charging_budget,
        cfg.kwh_price_cap,
        assumptions,
    )
}

/// Checks whatever a draft already holds; missing mandatory numbers are not an error.
pub fn validate_draft(draft: &FleetDraft, assumptions: &Assumptions) -> Result<(), ValidationError> {
    if let Some(cars) = draft.car_count
        && cars < 1
    {
        return Err(ValidationError::CarCountTooLow(cars));
    }
    if let Some(mileage) = draft.yearly_mileage_allowed {
        check_mileage(mileage)?;
    }
    check_optional_inputs(
        &draft.restrictions,
        &draft.country_restrictions,
        draft.monthly_charging_budget,
        draft.kwh_price_cap,
        assumptions,
    )
}

fn check_mileage(mileage: f64) -> Result<(), ValidationError> {
    if !mileage.is_finite() || mileage < 1.0 {
        return Err(ValidationError::MileageTooLow(mileage));
    }
    if mileage > MAX_YEARLY_MILEAGE {
        return Err(ValidationError::MileageTooHigh {
            value: mileage,
            max: MAX_YEARLY_MILEAGE,
        });
    }
    Ok(())
}

fn check_optional_inputs(
    restrictions: &BTreeSet<RestrictionKind>,
    countries: &[CountryCode],
    budget: Option<f64>,
    price_cap: Option<f64>,
    assumptions: &Assumptions,
) -> Result<(), ValidationError> {
    let has_budget = restrictions.contains(&RestrictionKind::MonthlyBudget);
    let has_cap = restrictions.contains(&RestrictionKind::PriceCap);

    if has_budget && has_cap {
        return Err(ValidationError::ConflictingRestrictions);
    }

    if has_budget {
        match budget {
            None => return Err(ValidationError::MissingValue(RestrictionKind::MonthlyBudget)),
            Some(b) if !b.is_finite() || b <= 0.0 => {
                return Err(ValidationError::BudgetNotPositive(b));
            }
            Some(_) => {}
        }
    }

    if has_cap {
        let max = PRICE_CAP_MAX.min(assumptions.reference_kwh_price);
        match price_cap {
            None => return Err(ValidationError::MissingValue(RestrictionKind::PriceCap)),
            Some(c) if !c.is_finite() || c <= 0.0 || c > max => {
                return Err(ValidationError::PriceCapOutOfRange { value: c, max });
            }
            Some(_) => {}
        }
    }

    let mut seen = BTreeSet::new();
    for code in countries {
        if !code.is_selectable() {
            return Err(ValidationError::UnsupportedCountry(code.clone()));
        }
        if !seen.insert(code) {
            return Err(ValidationError::DuplicateCountry(code.clone()));
        }
    }

    Ok(())
}
