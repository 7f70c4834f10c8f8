use fleetsave_types::restriction::RestrictionKind;
use fleetsave_types::selection::{
    FollowUpInput, OptionAvailability, RestrictionOption, SelectionOutcome,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Holds the current restriction selection and the options offered to the selector.
///
/// Each [`RestrictionSelector::apply_selection`] call replaces both wholesale; availability is
/// always re-derived from the requested set, never patched.
#[derive(Debug, Clone, Default)]
pub struct RestrictionSelector {
    selected: BTreeSet<RestrictionKind>,
    options: OptionAvailability,
}

impl RestrictionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a wholesale (multi-select) request.
    ///
    /// The requested set is kept as-is: conflicting pairs are prevented by disabling the other
    /// half of the pair, not by rejecting the request.
    pub fn apply_selection(&mut self, requested: BTreeSet<RestrictionKind>) -> SelectionOutcome {
        let options = option_availability(&requested);
        let follow_ups = required_inputs(&requested);

        self.selected = requested.clone();
        self.options = options.clone();

        SelectionOutcome {
            resolved: requested,
            options,
            follow_ups,
        }
    }

    pub fn selected(&self) -> &BTreeSet<RestrictionKind> {
        &self.selected
    }

    pub fn options(&self) -> &OptionAvailability {
        &self.options
    }
}

/// Which options the selector may offer for a given selection.
///
/// `MonthlyBudget` is checked first, so a set holding both halves of the pair disables
/// `PriceCap`.
pub fn option_availability(requested: &BTreeSet<RestrictionKind>) -> OptionAvailability {
    let blocked = if requested.contains(&RestrictionKind::MonthlyBudget) {
        Some(RestrictionKind::PriceCap)
    } else if requested.contains(&RestrictionKind::PriceCap) {
        Some(RestrictionKind::MonthlyBudget)
    } else {
        None
    };

    if let Some(kind) = blocked {
        debug!(disabled = %kind, "restriction option disabled by selection");
    }

    OptionAvailability(
        RestrictionKind::ALL
            .into_iter()
            .map(|kind| RestrictionOption {
                kind,
                disabled: Some(kind) == blocked,
            })
            .collect(),
    )
}

/// Extra inputs the host must collect for the selected restrictions, in canonical order.
pub fn required_inputs(selected: &BTreeSet<RestrictionKind>) -> Vec<FollowUpInput> {
    RestrictionKind::ALL
        .into_iter()
        .filter(|kind| selected.contains(kind))
        .map(|kind| match kind {
            RestrictionKind::MonthlyBudget => FollowUpInput::MonthlyChargingBudget,
            RestrictionKind::PriceCap => FollowUpInput::KwhPriceCap,
            RestrictionKind::CountryRestriction => FollowUpInput::AllowedCountries,
            RestrictionKind::FastCharging => FollowUpInput::FastChargingNotice,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(kinds: &[RestrictionKind]) -> BTreeSet<RestrictionKind> {
        kinds.iter().copied().collect()
    }

    fn disabled(avail: &OptionAvailability) -> Vec<RestrictionKind> {
        avail.disabled().collect()
    }

    #[test]
    fn monthly_budget_disables_price_cap() {
        let mut selector = RestrictionSelector::new();
        let out = selector.apply_selection(set(&[RestrictionKind::MonthlyBudget]));
        assert_eq!(disabled(&out.options), vec![RestrictionKind::PriceCap]);
        assert!(out.options.is_enabled(RestrictionKind::CountryRestriction));
        assert!(out.options.is_enabled(RestrictionKind::FastCharging));
        assert!(out.options.is_enabled(RestrictionKind::MonthlyBudget));
    }

    #[test]
    fn price_cap_disables_monthly_budget() {
        let avail = option_availability(&set(&[
            RestrictionKind::PriceCap,
            RestrictionKind::FastCharging,
        ]));
        assert_eq!(disabled(&avail), vec![RestrictionKind::MonthlyBudget]);
    }

    #[test]
    fn empty_selection_enables_everything() {
        let mut selector = RestrictionSelector::new();
        let out = selector.apply_selection(BTreeSet::new());
        assert_eq!(out.options, OptionAvailability::all_enabled());
        assert!(out.follow_ups.is_empty());
    }

    #[test]
    fn conflicting_request_is_kept_and_budget_wins() {
        let requested = set(&[RestrictionKind::MonthlyBudget, RestrictionKind::PriceCap]);
        let mut selector = RestrictionSelector::new();
        let out = selector.apply_selection(requested.clone());
        assert_eq!(out.resolved, requested);
        assert_eq!(disabled(&out.options), vec![RestrictionKind::PriceCap]);
    }

    #[test]
    fn deselecting_clears_stale_disabled_flags() {
        let mut selector = RestrictionSelector::new();
        selector.apply_selection(set(&[RestrictionKind::MonthlyBudget]));
        let out = selector.apply_selection(set(&[RestrictionKind::FastCharging]));
        assert_eq!(out.options, OptionAvailability::all_enabled());
        assert_eq!(selector.options(), &OptionAvailability::all_enabled());
        assert_eq!(selector.selected(), &set(&[RestrictionKind::FastCharging]));
    }

    #[test]
    fn follow_ups_follow_canonical_order() {
        let inputs = required_inputs(&set(&[
            RestrictionKind::FastCharging,
            RestrictionKind::CountryRestriction,
            RestrictionKind::PriceCap,
        ]));
        assert_eq!(
            inputs,
            vec![
                FollowUpInput::KwhPriceCap,
                FollowUpInput::AllowedCountries,
                FollowUpInput::FastChargingNotice,
            ]
        );
    }
}
