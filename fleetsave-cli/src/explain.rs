//! Restriction explanations for the `fleetsave explain` command.
//!
//! Each entry describes what the restriction does to the fleet, the extra input it needs,
//! and the formula behind its savings figure.

use fleetsave_types::restriction::RestrictionKind;

/// Information about one restriction.
#[derive(Debug, Clone)]
pub struct RestrictionExplanation {
    pub kind: RestrictionKind,
    /// Human-readable title.
    pub title: &'static str,
    /// What the restriction does for the fleet manager.
    pub description: &'static str,
    /// The input the host collects once the restriction is selected.
    pub follow_up: &'static str,
    /// Yearly savings formula, in terms of the named assumptions.
    pub formula: &'static str,
}

/// Registry of all restriction explanations, in canonical order.
pub static RESTRICTION_REGISTRY: &[RestrictionExplanation] = &[
    RestrictionExplanation {
        kind: RestrictionKind::MonthlyBudget,
        title: "Monthly Charging Budget",
        description: r#"Caps what each car may spend on charging per month.

Charging stops being paid once a car reaches its monthly budget. The saving is the
difference between what the car would cost unrestricted over a year and twelve times
the budget. A budget above the unrestricted cost saves nothing (never a negative amount).

Cannot be combined with a kWh price cap."#,
        follow_up: "Monthly charging budget per car, in EUR (greater than 0).",
        formula: r#"max(0, mileage * kwh_per_distance * unrestricted_kwh_price - 12 * budget) * cars

Defaults: kwh_per_distance = 0.2, unrestricted_kwh_price = 0.45"#,
    },
    RestrictionExplanation {
        kind: RestrictionKind::PriceCap,
        title: "Price Cap per kWh",
        description: r#"Refuses charging sessions priced above a maximum per kWh.

The saving is the gap between the reference kWh price and the cap, over every kWh the
fleet uses in a year.

Cannot be combined with a monthly charging budget. When both are present the budget
wins and the price cap contributes nothing."#,
        follow_up: "Maximum price per kWh, in EUR (greater than 0, at most 0.65).",
        formula: r#"(reference_kwh_price - cap) * mileage * kwh_per_distance * cars

Defaults: reference_kwh_price = 0.65, kwh_per_distance = 0.2"#,
    },
    RestrictionExplanation {
        kind: RestrictionKind::CountryRestriction,
        title: "Country Restriction",
        description: r#"Limits the countries where cars may charge.

Only a fleet restricted to Belgium alone is credited: cross-border charging abroad is
assumed to cost more per kWh. Any other country list saves nothing."#,
        follow_up: "Countries where charging is allowed (ISO 3166-1 alpha-2 codes).",
        formula: r#"cars * cross_border_distance_share * cross_border_distance * kwh_per_distance * cross_border_kwh_saving
(only when the allowed countries are exactly ["BE"], otherwise 0)

Defaults: cross_border_distance_share = 0.1, cross_border_distance = 2500,
          kwh_per_distance = 0.2, cross_border_kwh_saving = 0.85"#,
    },
    RestrictionExplanation {
        kind: RestrictionKind::FastCharging,
        title: "Block Fast Charging",
        description: r#"Blocks fast-charging sessions for every car.

Part of each car's energy is assumed to come from fast chargers at a premium per kWh.
Blocking them moves that energy to regular chargers."#,
        follow_up: "None. The host only tells the user fast charging will be blocked.",
        formula: r#"mileage * fast_charging_share * kwh_per_distance * fast_charging_premium * cars

Defaults: fast_charging_share = 0.3, kwh_per_distance = 0.2, fast_charging_premium = 0.4"#,
    },
];

/// Look up an explanation by restriction key.
///
/// Accepts the same spellings as the command line: any case, `-` or `_`, and the
/// long aliases (`monthly_charging_budget`, `kwh_price_cap`).
pub fn lookup_restriction(query: &str) -> Option<&'static RestrictionExplanation> {
    let kind: RestrictionKind = query.parse().ok()?;
    RESTRICTION_REGISTRY.iter().find(|e| e.kind == kind)
}

pub fn list_restriction_keys() -> Vec<&'static str> {
    RESTRICTION_REGISTRY.iter().map(|e| e.kind.as_str()).collect()
}
