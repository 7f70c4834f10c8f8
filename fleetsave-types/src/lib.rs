//! Shared DTOs (schemas-as-code) for the fleetsave workspace.
//!
//! # Design constraints
//! - These types cross the host/core boundary and are serialized in reports.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod assumptions;
pub mod config;
pub mod country;
pub mod report;
pub mod restriction;
pub mod savings;
pub mod selection;

/// Schema identifiers.
pub mod schema {
    pub const FLEETSAVE_REPORT_V1: &str = "fleetsave.report.v1";
}
