use super::{RuleOutcome, SavingsRule};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetConfiguration;
use fleetsave_types::savings::SavingsComponent;

/// Fraud savings apply to every fleet, regardless of restrictions.
pub struct FraudRule;

impl SavingsRule for FraudRule {
    fn component(&self) -> SavingsComponent {
        SavingsComponent::Fraud
    }

    fn evaluate(&self, cfg: &FleetConfiguration, a: &Assumptions) -> RuleOutcome {
        RuleOutcome::applied(
            self.component(),
            f64::from(cfg.car_count) * a.fraud_savings_per_car,
        )
    }
}
