//! Domain logic: turn a fleet configuration into a deterministic savings breakdown.
//!
//! This crate owns *what* is saved and why. It does not own how values are collected or shown;
//! that's the host (`fleetsave-cli`) and `fleetsave-render`.

mod engine;
mod rules;
mod selection;
mod validate;

pub use engine::{SavingsEngine, compute_savings, evaluate_draft, ready_snapshot};
pub use rules::{
    BudgetRule, CountryRule, FastChargingRule, FraudRule, PriceCapRule, RuleOutcome, SavingsRule,
    builtin_rules,
};
pub use selection::{RestrictionSelector, option_availability, required_inputs};
pub use validate::{
    MAX_YEARLY_MILEAGE, PRICE_CAP_MAX, ValidationError, validate_assumptions,
    validate_configuration, validate_draft,
};
