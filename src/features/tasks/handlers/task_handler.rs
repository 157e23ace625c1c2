use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireAdmin, RequireCoordinator, RequireDepartment};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::tasks::dtos::{
    AssignTaskDto, TaskQueueEntryDto, TaskResponseDto, UpdateTaskStatusDto,
};
use crate::features::tasks::services::TaskService;
use crate::shared::constants::DEPARTMENTS;
use crate::shared::types::{ApiResponse, Meta};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = AssignTaskDto,
    responses(
        (status = 201, description = "Task assigned successfully", body = ApiResponse<TaskResponseDto>),
        (status = 403, description = "Forbidden - coordinator only"),
        (status = 422, description = "Referenced report does not exist")
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn assign_task(
    RequireCoordinator(_user): RequireCoordinator,
    State(service): State<Arc<TaskService>>,
    AppJson(dto): AppJson<AssignTaskDto>,
) -> Result<(StatusCode, Json<ApiResponse<TaskResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let task = service.assign(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(task), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Task queue ordered by report urgency", body = ApiResponse<Vec<TaskQueueEntryDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn list_tasks(
    _user: AuthenticatedUser,
    State(service): State<Arc<TaskService>>,
) -> Result<Json<ApiResponse<Vec<TaskQueueEntryDto>>>> {
    let tasks = service.list_sorted_by_priority().await?;
    let total = tasks.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(tasks),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/tasks/departments",
    responses(
        (status = 200, description = "Known response departments", body = ApiResponse<Vec<String>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn list_departments(
    _user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let departments = DEPARTMENTS.iter().map(|d| d.to_string()).collect();
    Ok(Json(ApiResponse::success(Some(departments), None, None)))
}

#[utoipa::path(
    patch,
    path = "/api/tasks/{id}/status",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskStatusDto,
    responses(
        (status = 200, description = "Task status updated successfully"),
        (status = 403, description = "Forbidden - department only"),
        (status = 404, description = "Task not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn update_task_status(
    RequireDepartment(_user): RequireDepartment,
    State(service): State<Arc<TaskService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateTaskStatusDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.update_status(id, dto.status).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Task status updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    patch,
    path = "/api/reports/{id}/tasks/status",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = UpdateTaskStatusDto,
    responses(
        (status = 200, description = "Statuses updated for every task on the report"),
        (status = 403, description = "Forbidden - department only")
    ),
    security(("bearer_auth" = [])),
    tag = "tasks"
)]
pub async fn update_report_tasks_status(
    RequireDepartment(_user): RequireDepartment,
    State(service): State<Arc<TaskService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateTaskStatusDto>,
) -> Result<Json<ApiResponse<()>>> {
    let count = service.update_status_by_report(id, dto.status).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some(format!("{} task(s) updated", count)),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted successfully"),
        (status = 404, description = "Task not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn delete_task(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<TaskService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Task deleted successfully".to_string()),
        None,
    )))
}
