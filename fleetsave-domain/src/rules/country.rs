use super::{RuleOutcome, SavingsRule};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetConfiguration;
use fleetsave_types::savings::SavingsComponent;

/// Savings from keeping all charging inside Belgium.
///
/// Reads the country list only: the restriction flag itself is not consulted. Any list other
/// than exactly `["BE"]` yields zero.
pub struct CountryRule;

impl SavingsRule for CountryRule {
    fn component(&self) -> SavingsComponent {
        SavingsComponent::CountryRestriction
    }

    fn evaluate(&self, cfg: &FleetConfiguration, a: &Assumptions) -> RuleOutcome {
        if !cfg.restricted_to_belgium_only() {
            return RuleOutcome::inactive(self.component());
        }

        let amount = f64::from(cfg.car_count)
            * a.cross_border_distance_share
            * a.cross_border_distance
            * a.kwh_per_distance
            * a.cross_border_kwh_saving;
        RuleOutcome::applied(self.component(), amount)
    }
}
