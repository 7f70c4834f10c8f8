use super::{RuleOutcome, SavingsRule, positive};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetConfiguration;
use fleetsave_types::restriction::RestrictionKind;
use fleetsave_types::savings::SavingsComponent;

/// Savings from refusing sessions priced above a per-kWh cap.
pub struct PriceCapRule;

impl SavingsRule for PriceCapRule {
    fn component(&self) -> SavingsComponent {
        SavingsComponent::PriceCap
    }

    fn evaluate(&self, cfg: &FleetConfiguration, assumptions: &Assumptions) -> RuleOutcome {
        // A monthly budget takes precedence; both are never computed together.
        if !cfg.has(RestrictionKind::PriceCap) || cfg.has(RestrictionKind::MonthlyBudget) {
            return RuleOutcome::inactive(self.component());
        }
        let Some(cap) = positive(cfg.kwh_price_cap) else {
            return RuleOutcome::inactive(self.component());
        };

        let amount = (assumptions.reference_kwh_price - cap)
            * cfg.yearly_mileage_allowed
            * assumptions.kwh_per_distance
            * f64::from(cfg.car_count);
        RuleOutcome::applied(self.component(), amount)
    }
}
