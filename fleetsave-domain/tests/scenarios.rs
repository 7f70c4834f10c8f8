//! End-to-end scenarios: selector → readiness → engine, the way a host drives them.

use fleetsave_domain::{RestrictionSelector, SavingsEngine, evaluate_draft, validate_draft};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetDraft;
use fleetsave_types::country::CountryCode;
use fleetsave_types::restriction::RestrictionKind;
use fleetsave_types::selection::{FollowUpInput, OptionAvailability};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn kinds(list: &[RestrictionKind]) -> BTreeSet<RestrictionKind> {
    list.iter().copied().collect()
}

#[test]
fn form_session_recomputes_after_each_edit() {
    let engine = SavingsEngine::new();
    let mut selector = RestrictionSelector::new();
    let mut draft = FleetDraft::default();

    // Nothing to show until both mandatory numbers are in.
    draft.car_count = Some(10);
    assert!(engine.evaluate_draft(&draft).is_none());

    draft.yearly_mileage_allowed = Some(20000.0);
    let b = engine.evaluate_draft(&draft).expect("ready");
    assert_close(b.total_savings, 780.0);

    let out = selector.apply_selection(kinds(&[RestrictionKind::MonthlyBudget]));
    assert!(!out.options.is_enabled(RestrictionKind::PriceCap));
    assert_eq!(out.follow_ups, vec![FollowUpInput::MonthlyChargingBudget]);
    draft.restrictions = out.resolved;

    // Budget selected but not yet entered: contribution stays zero.
    let b = engine.evaluate_draft(&draft).expect("ready");
    assert_eq!(b.budget_savings, 0.0);

    draft.monthly_charging_budget = Some(50.0);
    let b = engine.evaluate_draft(&draft).expect("ready");
    assert_close(b.budget_savings, 12000.0);
    assert_close(b.total_savings, 12780.0);

    // Leftover budget value is ignored once the restriction is dropped.
    let out = selector.apply_selection(kinds(&[RestrictionKind::PriceCap]));
    assert!(!out.options.is_enabled(RestrictionKind::MonthlyBudget));
    assert!(out.options.is_enabled(RestrictionKind::PriceCap));
    draft.restrictions = out.resolved;
    draft.kwh_price_cap = Some(0.30);
    let b = engine.evaluate_draft(&draft).expect("ready");
    assert_eq!(b.budget_savings, 0.0);
    assert_close(b.price_cap_savings, 14000.0);
    assert_close(b.total_savings, 14780.0);

    let out = selector.apply_selection(BTreeSet::new());
    assert_eq!(out.options, OptionAvailability::all_enabled());
}

#[test]
fn belgium_only_fleet() {
    let draft = FleetDraft {
        car_count: Some(100),
        yearly_mileage_allowed: Some(20000.0),
        restrictions: kinds(&[RestrictionKind::CountryRestriction]),
        country_restrictions: vec!["BE".parse::<CountryCode>().unwrap()],
        ..Default::default()
    };
    validate_draft(&draft, &Assumptions::default()).expect("valid");
    let b = evaluate_draft(&draft).expect("ready");
    assert_close(b.country_restriction_savings, 4250.0);
    assert_close(b.fraud_savings, 7800.0);
    assert_close(b.total_savings, 12050.0);
}

#[test]
fn fast_charging_fleet() {
    let draft = FleetDraft {
        car_count: Some(5),
        yearly_mileage_allowed: Some(15000.0),
        restrictions: kinds(&[RestrictionKind::FastCharging]),
        ..Default::default()
    };
    let b = evaluate_draft(&draft).expect("ready");
    assert_close(b.fast_charging_savings, 1800.0);
    assert_close(b.total_savings, 2190.0);
}

#[test]
fn every_restriction_combined() {
    let draft = FleetDraft {
        car_count: Some(10),
        yearly_mileage_allowed: Some(20000.0),
        restrictions: kinds(&[
            RestrictionKind::MonthlyBudget,
            RestrictionKind::CountryRestriction,
            RestrictionKind::FastCharging,
        ]),
        country_restrictions: vec!["BE".parse::<CountryCode>().unwrap()],
        monthly_charging_budget: Some(50.0),
        ..Default::default()
    };
    let b = evaluate_draft(&draft).expect("ready");
    // budget 12000, country 425, fast charging 20000*0.3*0.2*0.4*10 = 4800, fraud 780
    assert_close(b.budget_savings, 12000.0);
    assert_close(b.country_restriction_savings, 425.0);
    assert_close(b.fast_charging_savings, 4800.0);
    assert_close(b.total_savings, 18005.0);
    assert_close(b.return_on_investment_approx, 18005.0 - 600.0);
    assert_close(b.avoided_complaints_approx, 18005.0 / 160.0);
    assert_close(b.spared_working_days_approx, 10.0 / 24.0);
}
