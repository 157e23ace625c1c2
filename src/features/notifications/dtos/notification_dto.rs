use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::notifications::models::CompletionNotice;
use crate::features::reports::models::Priority;
use crate::features::tasks::models::TaskStatus;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionNoticeDto {
    pub task_id: i64,
    pub disaster_id: i64,
    pub disaster_type: String,
    pub location: String,
    pub priority: Option<Priority>,
    pub department: String,
    pub task_description: String,
    pub status: TaskStatus,
}

impl From<CompletionNotice> for CompletionNoticeDto {
    fn from(notice: CompletionNotice) -> Self {
        Self {
            task_id: notice.task_id,
            disaster_id: notice.disaster_id,
            disaster_type: notice.disaster_type,
            location: notice.location,
            priority: notice.priority,
            department: notice.department,
            task_description: notice.task_description,
            status: notice.status,
        }
    }
}
