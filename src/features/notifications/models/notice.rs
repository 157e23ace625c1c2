use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::features::reports::models::Priority;
use crate::features::tasks::models::TaskStatus;

/// A finished task joined with the report it served. Read-only projection,
/// there is no notifications table behind it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub task_id: i64,
    pub disaster_id: i64,
    pub disaster_type: String,
    pub location: String,
    pub priority: Option<Priority>,
    pub department: String,
    pub task_description: String,
    pub status: TaskStatus,
}
