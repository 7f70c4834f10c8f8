//! BDD harness (cucumber-rs).
//!
//! Scenario tests live in `tests/cucumber.rs`; this crate only holds the helpers they share
//! for reading `fleetsave` JSON output.

use anyhow::Context;
use fleetsave_types::restriction::RestrictionKind;

/// Parses a comma-separated list of restriction keys as written in feature files.
///
/// An empty string or `none` means no restriction.
pub fn parse_restriction_list(list: &str) -> anyhow::Result<Vec<RestrictionKind>> {
    let trimmed = list.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<RestrictionKind>()
                .with_context(|| format!("restriction '{}' in feature file", s.trim()))
        })
        .collect()
}

/// Reads `breakdown.<name>_savings` from a report; `None` when the breakdown is absent.
pub fn breakdown_savings(report: &serde_json::Value, name: &str) -> Option<f64> {
    report
        .get("breakdown")
        .filter(|b| !b.is_null())?
        .get(format!("{name}_savings"))?
        .as_f64()
}

/// Restriction keys marked disabled in an `options` array.
pub fn disabled_options(options: &serde_json::Value) -> Vec<String> {
    options
        .as_array()
        .map(|opts| {
            opts.iter()
                .filter(|o| o["disabled"] == true)
                .filter_map(|o| o["kind"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn restriction_list_parses_keys() {
        let kinds = parse_restriction_list("monthly_budget, fast-charging").unwrap();
        assert_eq!(
            kinds,
            vec![RestrictionKind::MonthlyBudget, RestrictionKind::FastCharging]
        );
        assert!(parse_restriction_list("none").unwrap().is_empty());
        assert!(parse_restriction_list("bogus").is_err());
    }

    #[test]
    fn breakdown_lookup_handles_null() {
        let report = json!({ "breakdown": null });
        assert_eq!(breakdown_savings(&report, "total"), None);

        let report = json!({ "breakdown": { "total_savings": 780.0 } });
        assert_eq!(breakdown_savings(&report, "total"), Some(780.0));
    }

    #[test]
    fn disabled_options_are_collected() {
        let options = json!([
            { "kind": "monthly_budget", "disabled": false },
            { "kind": "price_cap", "disabled": true },
        ]);
        assert_eq!(disabled_options(&options), vec!["price_cap".to_string()]);
    }
}
