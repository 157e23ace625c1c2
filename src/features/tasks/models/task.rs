use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lifecycle of an assigned task. New tasks start in process and move to
/// finished exactly once, there are no other states.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum TaskStatus {
    #[default]
    #[sqlx(rename = "Still in Process")]
    #[serde(rename = "Still in Process")]
    InProcess,
    Finished,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::InProcess => write!(f, "Still in Process"),
            TaskStatus::Finished => write!(f, "Finished"),
        }
    }
}

/// A unit of response work assigned to a department against a disaster report.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssignedTask {
    pub id: i64,
    pub disaster_id: i64,
    pub department: String,
    pub task_description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}
