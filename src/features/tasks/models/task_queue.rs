use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::features::reports::models::Priority;
use crate::features::tasks::models::TaskStatus;

/// A task joined with the report it serves, as read by the dispatch queue.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TaskQueueEntry {
    pub id: i64,
    pub disaster_id: i64,
    pub disaster_type: String,
    pub location: String,
    pub priority: Option<Priority>,
    pub department: String,
    pub task_description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}
