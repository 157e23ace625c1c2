use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{DisasterReport, Priority};

/// Request DTO for submitting a disaster report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportDto {
    #[validate(length(min = 1, max = 64, message = "Disaster type cannot be empty"))]
    pub disaster_type: String,

    #[validate(length(min = 1, max = 255, message = "Location cannot be empty"))]
    pub location: String,

    /// Severity on a 1 (minor) to 10 (catastrophic) scale
    #[validate(range(min = 1, max = 10, message = "Severity must be between 1 and 10"))]
    pub severity: i32,

    #[validate(length(min = 1, max = 2000, message = "Description cannot be empty"))]
    pub description: String,
}

/// Response DTO for a disaster report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: i64,
    pub username: String,
    pub disaster_type: String,
    pub location: String,
    pub severity: i32,
    pub description: String,
    /// None until a coordinator triages the report
    pub priority: Option<Priority>,
    pub report_time: DateTime<Utc>,
}

impl From<DisasterReport> for ReportResponseDto {
    fn from(r: DisasterReport) -> Self {
        Self {
            id: r.id,
            username: r.username,
            disaster_type: r.disaster_type,
            location: r.location,
            severity: r.severity,
            description: r.description,
            priority: r.priority,
            report_time: r.report_time,
        }
    }
}

/// Request DTO for setting a report's triage priority
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPriorityDto {
    pub priority: Priority,
}
