use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Triage priority a coordinator assigns to a report.
/// Stored as its display string; NULL in the database means unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
pub enum Priority {
    #[sqlx(rename = "Very High")]
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
    #[sqlx(rename = "Very Low")]
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl Priority {
    /// Rank used by the task queue ordering; lower dispatches first.
    /// An unset priority ranks after every set value, as 6.
    pub fn rank(self) -> i64 {
        match self {
            Priority::VeryHigh => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
            Priority::VeryLow => 5,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::VeryHigh => write!(f, "Very High"),
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
            Priority::VeryLow => write!(f, "Very Low"),
        }
    }
}

/// Database model for a disaster report
#[derive(Debug, Clone, FromRow)]
pub struct DisasterReport {
    pub id: i64,
    /// Username of the reporter, references the users table
    pub username: String,
    pub disaster_type: String,
    pub location: String,
    pub severity: i32,
    pub description: String,
    pub priority: Option<Priority>,
    pub report_time: DateTime<Utc>,
}
