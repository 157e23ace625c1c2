use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::Priority;
use crate::features::tasks::models::{AssignedTask, TaskQueueEntry, TaskStatus};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskDto {
    pub disaster_id: i64,

    #[validate(length(min = 1, max = 64, message = "Department cannot be empty"))]
    pub department: String,

    #[validate(length(min = 1, max = 2000, message = "Task description cannot be empty"))]
    pub task_description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusDto {
    pub status: TaskStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponseDto {
    pub id: i64,
    pub disaster_id: i64,
    pub department: String,
    pub task_description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl From<AssignedTask> for TaskResponseDto {
    fn from(task: AssignedTask) -> Self {
        Self {
            id: task.id,
            disaster_id: task.disaster_id,
            department: task.department,
            task_description: task.task_description,
            status: task.status,
            created_at: task.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskQueueEntryDto {
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

impl From<TaskQueueEntry> for TaskQueueEntryDto {
    fn from(entry: TaskQueueEntry) -> Self {
        Self {
            id: entry.id,
            disaster_id: entry.disaster_id,
            disaster_type: entry.disaster_type,
            location: entry.location,
            priority: entry.priority,
            department: entry.department,
            task_description: entry.task_description,
            status: entry.status,
            created_at: entry.created_at,
        }
    }
}
