use crate::assumptions::Assumptions;
use crate::config::FleetDraft;
use crate::savings::SavingsBreakdown;
use crate::selection::SelectionOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON envelope written by hosts that persist or forward an estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsReport {
    pub schema: String,
    pub tool: ToolInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,

    pub configuration: FleetDraft,

    pub selection: SelectionOutcome,

    pub assumptions: Assumptions,

    /// `None` (serialized as `null`) when fleet size or mileage is still missing.
    pub breakdown: Option<SavingsBreakdown>,
}

impl SavingsReport {
    pub fn new(
        tool: ToolInfo,
        configuration: FleetDraft,
        selection: SelectionOutcome,
        assumptions: Assumptions,
        breakdown: Option<SavingsBreakdown>,
    ) -> Self {
        Self {
            schema: crate::schema::FLEETSAVE_REPORT_V1.to_string(),
            tool,
            generated_at: None,
            configuration,
            selection,
            assumptions,
            breakdown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
