//! Rendering helpers (text, markdown, JSON) for savings estimates and restriction options.

use fleetsave_types::report::SavingsReport;
use fleetsave_types::restriction::RestrictionKind;
use fleetsave_types::savings::{SavingsBreakdown, SavingsComponent};
use fleetsave_types::selection::SelectionOutcome;

const NO_ESTIMATE: &str = "No estimate yet: fleet size and yearly mileage are required.";

const ROI_LABEL: &str = "Return on investment (approx.)";
const WORKING_DAYS_LABEL: &str = "Spared working days (approx.)";
const COMPLAINTS_LABEL: &str = "Avoided complaints (approx.)";

/// Whole euros with thousands separators, rounding half away from zero: `12780.4` → `€12,780`.
pub fn format_euros(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

/// One decimal place, used for the approximate secondary metrics.
pub fn format_metric(value: f64) -> String {
    format!("{value:.1}")
}

/// Components worth showing: zero and negative contributions are left out.
fn visible_components(b: &SavingsBreakdown) -> impl Iterator<Item = (SavingsComponent, f64)> + '_ {
    SavingsComponent::ALL
        .into_iter()
        .map(|c| (c, b.component(c)))
        .filter(|(_, amount)| *amount > 0.0)
}

pub fn render_breakdown_text(breakdown: Option<&SavingsBreakdown>) -> String {
    let mut out = String::new();
    let Some(b) = breakdown else {
        out.push_str(NO_ESTIMATE);
        out.push('\n');
        return out;
    };

    out.push_str("Estimated yearly savings\n\n");
    for (component, amount) in visible_components(b) {
        out.push_str(&row(component.label(), &format_euros(amount)));
    }
    out.push_str(&row("Total", &format_euros(b.total_savings)));
    out.push('\n');
    out.push_str(&row(ROI_LABEL, &format_euros(b.return_on_investment_approx)));
    out.push_str(&row(
        WORKING_DAYS_LABEL,
        &format_metric(b.spared_working_days_approx),
    ));
    out.push_str(&row(
        COMPLAINTS_LABEL,
        &format_metric(b.avoided_complaints_approx),
    ));
    out
}

fn row(label: &str, value: &str) -> String {
    format!("  {label:<34}{value:>12}\n")
}

pub fn render_breakdown_md(breakdown: Option<&SavingsBreakdown>) -> String {
    let mut out = String::new();
    out.push_str("# fleetsave estimate\n\n");
    let Some(b) = breakdown else {
        out.push_str(&format!("_{NO_ESTIMATE}_\n"));
        return out;
    };

    out.push_str("| Component | Yearly savings |\n");
    out.push_str("|---|---:|\n");
    for (component, amount) in visible_components(b) {
        out.push_str(&format!(
            "| {} | {} |\n",
            component.label(),
            format_euros(amount)
        ));
    }
    out.push_str(&format!(
        "| **Total** | **{}** |\n\n",
        format_euros(b.total_savings)
    ));

    out.push_str("## Secondary metrics\n\n");
    out.push_str(&format!(
        "- {}: {}\n",
        ROI_LABEL,
        format_euros(b.return_on_investment_approx)
    ));
    out.push_str(&format!(
        "- {}: {}\n",
        WORKING_DAYS_LABEL,
        format_metric(b.spared_working_days_approx)
    ));
    out.push_str(&format!(
        "- {}: {}\n",
        COMPLAINTS_LABEL,
        format_metric(b.avoided_complaints_approx)
    ));
    out
}

/// Pretty JSON with a trailing newline.
pub fn render_report_json(report: &SavingsReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

pub fn render_options_text(outcome: &SelectionOutcome) -> String {
    let mut out = String::new();
    out.push_str("Restriction options\n\n");
    for opt in outcome.options.options() {
        let mark = if outcome.resolved.contains(&opt.kind) {
            "[x]"
        } else {
            "[ ]"
        };
        let state = if opt.disabled { " (disabled)" } else { "" };
        out.push_str(&format!(
            "  {} {:<22}{}{}\n",
            mark,
            opt.kind.as_str(),
            opt.kind.label(),
            state
        ));
    }

    if !outcome.follow_ups.is_empty() {
        out.push_str("\nFollow-up inputs\n\n");
        for input in &outcome.follow_ups {
            out.push_str(&format!("  - {}\n", input.prompt()));
        }
    }
    out
}

pub fn render_restrictions_text() -> String {
    let mut out = String::new();
    for kind in RestrictionKind::ALL {
        let note = kind
            .conflicts_with()
            .map(|other| format!(" (excludes {other})"))
            .unwrap_or_default();
        out.push_str(&format!("{:<22}{}{}\n", kind.as_str(), kind.label(), note));
    }
    out
}
