use crate::rules::{self, SavingsRule};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::{FleetConfiguration, FleetDraft};
use fleetsave_types::savings::SavingsBreakdown;
use tracing::debug;

/// Pure savings calculator.
///
/// Holds only immutable data (assumptions and rules); [`SavingsEngine::compute`] is
/// deterministic and never mutates its input, so hosts can call it after every edit.
pub struct SavingsEngine {
    assumptions: Assumptions,
    rules: Vec<Box<dyn SavingsRule>>,
}

impl Default for SavingsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SavingsEngine {
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default())
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            rules: rules::builtin_rules(),
        }
    }

    pub fn with_rules(assumptions: Assumptions, rules: Vec<Box<dyn SavingsRule>>) -> Self {
        Self { assumptions, rules }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn compute(&self, cfg: &FleetConfiguration) -> SavingsBreakdown {
        let mut breakdown = SavingsBreakdown::default();

        for rule in &self.rules {
            let outcome = rule.evaluate(cfg, &self.assumptions);
            debug!(
                component = ?outcome.component,
                applied = outcome.applied,
                amount = outcome.amount,
                "rule evaluated"
            );
            breakdown.set_component(outcome.component, outcome.amount);
        }

        let a = &self.assumptions;
        let cars = f64::from(cfg.car_count);
        breakdown.total_savings = breakdown.component_sum();
        breakdown.spared_working_days_approx = cars / a.cars_per_working_day;
        breakdown.return_on_investment_approx = breakdown.total_savings
            - a.subscription_per_car_month * Assumptions::MONTHS_PER_YEAR * cars;
        breakdown.avoided_complaints_approx = breakdown.total_savings / a.savings_per_complaint;

        debug!(
            car_count = cfg.car_count,
            total = breakdown.total_savings,
            "computed savings breakdown"
        );
        breakdown
    }

    /// Applies the readiness rule before computing.
    ///
    /// Returns `None` ("nothing to show") rather than a zero breakdown when fleet size or
    /// mileage is missing.
    pub fn evaluate_draft(&self, draft: &FleetDraft) -> Option<SavingsBreakdown> {
        let Some(cfg) = ready_snapshot(draft) else {
            debug!("draft not ready: fleet size and yearly mileage are required");
            return None;
        };
        Some(self.compute(&cfg))
    }
}

/// Builds the engine snapshot from a draft once both mandatory numbers are present.
///
/// Zero, negative or non-finite mileage and a zero fleet size count as missing.
pub fn ready_snapshot(draft: &FleetDraft) -> Option<FleetConfiguration> {
    let car_count = draft.car_count.filter(|n| *n >= 1)?;
    let mileage = draft
        .yearly_mileage_allowed
        .filter(|m| m.is_finite() && *m > 0.0)?;

    Some(FleetConfiguration {
        car_count,
        yearly_mileage_allowed: mileage,
        restrictions: draft.restrictions.clone(),
        country_restrictions: draft.country_restrictions.clone(),
        monthly_charging_budget: draft.monthly_charging_budget,
        kwh_price_cap: draft.kwh_price_cap,
    })
}

/// Computes a breakdown with the default assumptions.
pub fn compute_savings(cfg: &FleetConfiguration) -> SavingsBreakdown {
    SavingsEngine::new().compute(cfg)
}

/// Readiness-checked evaluation with the default assumptions.
pub fn evaluate_draft(draft: &FleetDraft) -> Option<SavingsBreakdown> {
    SavingsEngine::new().evaluate_draft(draft)
}
