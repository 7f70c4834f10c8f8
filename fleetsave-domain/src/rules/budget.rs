use super::{RuleOutcome, SavingsRule, positive};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetConfiguration;
use fleetsave_types::restriction::RestrictionKind;
use fleetsave_types::savings::SavingsComponent;

/// Savings from capping each car's charging spend at a monthly budget.
pub struct BudgetRule;

impl BudgetRule {
    /// Yearly per-car saving, clamped at zero before scaling to the fleet.
    fn per_car(mileage: f64, budget: f64, a: &Assumptions) -> f64 {
        let unrestricted = mileage * a.kwh_per_distance * a.unrestricted_kwh_price;
        let budgeted = Assumptions::MONTHS_PER_YEAR * budget;
        (unrestricted - budgeted).max(0.0)
    }
}

impl SavingsRule for BudgetRule {
    fn component(&self) -> SavingsComponent {
        SavingsComponent::Budget
    }

    fn evaluate(&self, cfg: &FleetConfiguration, assumptions: &Assumptions) -> RuleOutcome {
        if !cfg.has(RestrictionKind::MonthlyBudget) {
            return RuleOutcome::inactive(self.component());
        }
        let Some(budget) = positive(cfg.monthly_charging_budget) else {
            return RuleOutcome::inactive(self.component());
        };

        let per_car = Self::per_car(cfg.yearly_mileage_allowed, budget, assumptions);
        RuleOutcome::applied(self.component(), per_car * f64::from(cfg.car_count))
    }
}
