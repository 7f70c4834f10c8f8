use serde::{Deserialize, Serialize};

/// One of the additive savings contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsComponent {
    Budget,
    PriceCap,
    CountryRestriction,
    FastCharging,
    Fraud,
}

impl SavingsComponent {
    pub const ALL: [SavingsComponent; 5] = [
        SavingsComponent::Budget,
        SavingsComponent::PriceCap,
        SavingsComponent::CountryRestriction,
        SavingsComponent::FastCharging,
        SavingsComponent::Fraud,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SavingsComponent::Budget => "Savings by monthly budget",
            SavingsComponent::PriceCap => "Savings by kWh price cap",
            SavingsComponent::CountryRestriction => "Savings by country restriction",
            SavingsComponent::FastCharging => "Savings by blocking fast charging",
            SavingsComponent::Fraud => "Fraud savings",
        }
    }
}

/// Yearly savings projected for a fleet configuration.
///
/// Always fully populated: a contribution whose restriction is inactive is `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    pub budget_savings: f64,
    pub price_cap_savings: f64,
    pub country_restriction_savings: f64,
    pub fast_charging_savings: f64,
    pub fraud_savings: f64,
    pub total_savings: f64,
    pub return_on_investment_approx: f64,
    pub spared_working_days_approx: f64,
    pub avoided_complaints_approx: f64,
}

impl SavingsBreakdown {
    pub fn component(&self, component: SavingsComponent) -> f64 {
        match component {
            SavingsComponent::Budget => self.budget_savings,
            SavingsComponent::PriceCap => self.price_cap_savings,
            SavingsComponent::CountryRestriction => self.country_restriction_savings,
            SavingsComponent::FastCharging => self.fast_charging_savings,
            SavingsComponent::Fraud => self.fraud_savings,
        }
    }

    pub fn set_component(&mut self, component: SavingsComponent, value: f64) {
        match component {
            SavingsComponent::Budget => self.budget_savings = value,
            SavingsComponent::PriceCap => self.price_cap_savings = value,
            SavingsComponent::CountryRestriction => self.country_restriction_savings = value,
            SavingsComponent::FastCharging => self.fast_charging_savings = value,
            SavingsComponent::Fraud => self.fraud_savings = value,
        }
    }

    /// Sum of the five component figures, in declaration order.
    pub fn component_sum(&self) -> f64 {
        self.budget_savings
            + self.price_cap_savings
            + self.country_restriction_savings
            + self.fast_charging_savings
            + self.fraud_savings
    }
}
