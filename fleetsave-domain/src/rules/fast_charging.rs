use super::{RuleOutcome, SavingsRule};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetConfiguration;
use fleetsave_types::restriction::RestrictionKind;
use fleetsave_types::savings::SavingsComponent;

/// Savings from blocking the fast-charging premium.
pub struct FastChargingRule;

impl SavingsRule for FastChargingRule {
    fn component(&self) -> SavingsComponent {
        SavingsComponent::FastCharging
    }

    fn evaluate(&self, cfg: &FleetConfiguration, a: &Assumptions) -> RuleOutcome {
        if !cfg.has(RestrictionKind::FastCharging) {
            return RuleOutcome::inactive(self.component());
        }

        let amount = cfg.yearly_mileage_allowed
            * a.fast_charging_share
            * a.kwh_per_distance
            * a.fast_charging_premium
            * f64::from(cfg.car_count);
        RuleOutcome::applied(self.component(), amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_fast_charging_saves_premium() {
        let cfg =
            FleetConfiguration::new(5, 15000.0).with_restriction(RestrictionKind::FastCharging);
        let out = FastChargingRule.evaluate(&cfg, &Assumptions::default());
        assert!(out.applied);
        assert!((out.amount - 1800.0).abs() < 1e-6);
    }

    #[test]
    fn inactive_without_restriction() {
        let cfg = FleetConfiguration::new(5, 15000.0);
        assert!(!FastChargingRule.evaluate(&cfg, &Assumptions::default()).applied);
    }
}
