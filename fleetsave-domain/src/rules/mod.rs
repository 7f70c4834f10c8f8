use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetConfiguration;
use fleetsave_types::savings::SavingsComponent;

mod budget;
mod country;
mod fast_charging;
mod fraud;
mod price_cap;

pub use budget::BudgetRule;
pub use country::CountryRule;
pub use fast_charging::FastChargingRule;
pub use fraud::FraudRule;
pub use price_cap::PriceCapRule;

/// One additive contribution to the savings breakdown.
///
/// Rules are total: an inactive restriction or a missing value yields [`RuleOutcome::inactive`],
/// never an error.
pub trait SavingsRule: Send + Sync {
    fn component(&self) -> SavingsComponent;

    fn evaluate(&self, cfg: &FleetConfiguration, assumptions: &Assumptions) -> RuleOutcome;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    pub component: SavingsComponent,
    pub amount: f64,
    pub applied: bool,
}

impl RuleOutcome {
    pub fn applied(component: SavingsComponent, amount: f64) -> Self {
        Self {
            component,
            amount,
            applied: true,
        }
    }

    pub fn inactive(component: SavingsComponent) -> Self {
        Self {
            component,
            amount: 0.0,
            applied: false,
        }
    }
}

pub fn builtin_rules() -> Vec<Box<dyn SavingsRule>> {
    vec![
        Box::new(BudgetRule),
        Box::new(PriceCapRule),
        Box::new(CountryRule),
        Box::new(FastChargingRule),
        Box::new(FraudRule),
    ]
}

/// Optional inputs only count when strictly positive and finite.
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
