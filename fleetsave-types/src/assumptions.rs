use serde::{Deserialize, Serialize};

/// Business constants behind the savings formulas.
///
/// The defaults are rough sales assumptions, not measured values; hosts may override any of
/// them (the CLI reads an `[assumptions]` table).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Energy used per distance unit (kWh).
    pub kwh_per_distance: f64,

    /// Average price per kWh paid when charging is unrestricted.
    pub unrestricted_kwh_price: f64,

    /// Uncapped reference price per kWh; also the upper bound of a price cap.
    pub reference_kwh_price: f64,

    /// Share of the fleet that charges abroad.
    pub cross_border_distance_share: f64,

    /// Distance driven abroad per car per year.
    pub cross_border_distance: f64,

    /// Saving per kWh that is no longer charged abroad.
    pub cross_border_kwh_saving: f64,

    /// Share of energy bought at fast chargers.
    pub fast_charging_share: f64,

    /// Premium per kWh paid at fast chargers.
    pub fast_charging_premium: f64,

    /// Yearly fraud savings per car.
    pub fraud_savings_per_car: f64,

    /// Subscription price per car per month.
    pub subscription_per_car_month: f64,

    /// Cars an administrator handles per working day.
    pub cars_per_working_day: f64,

    /// Savings amount that corresponds to one avoided complaint.
    pub savings_per_complaint: f64,
}

impl Assumptions {
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    /// Every constant with its config key, in declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 12] {
        [
            ("kwh_per_distance", self.kwh_per_distance),
            ("unrestricted_kwh_price", self.unrestricted_kwh_price),
            ("reference_kwh_price", self.reference_kwh_price),
            ("cross_border_distance_share", self.cross_border_distance_share),
            ("cross_border_distance", self.cross_border_distance),
            ("cross_border_kwh_saving", self.cross_border_kwh_saving),
            ("fast_charging_share", self.fast_charging_share),
            ("fast_charging_premium", self.fast_charging_premium),
            ("fraud_savings_per_car", self.fraud_savings_per_car),
            ("subscription_per_car_month", self.subscription_per_car_month),
            ("cars_per_working_day", self.cars_per_working_day),
            ("savings_per_complaint", self.savings_per_complaint),
        ]
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            kwh_per_distance: 0.2,
            unrestricted_kwh_price: 0.45,
            reference_kwh_price: 0.65,
            cross_border_distance_share: 0.1,
            cross_border_distance: 2500.0,
            cross_border_kwh_saving: 0.85,
            fast_charging_share: 0.3,
            fast_charging_premium: 0.4,
            fraud_savings_per_car: 78.0,
            subscription_per_car_month: 5.0,
            cars_per_working_day: 24.0,
            savings_per_complaint: 160.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let a: Assumptions =
            serde_json::from_str(r#"{ "fraud_savings_per_car": 90.0 }"#).expect("parse");
        assert_eq!(a.fraud_savings_per_car, 90.0);
        assert_eq!(a.reference_kwh_price, 0.65);
        assert_eq!(a.cars_per_working_day, 24.0);
    }
}
