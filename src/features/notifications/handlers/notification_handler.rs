use crate::core::error::Result;
use crate::features::auth::guards::RequireCoordinator;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::dtos::CompletionNoticeDto;
use crate::features::notifications::services::NotificationService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/notifications/finished",
    responses(
        (status = 200, description = "Finished tasks on the caller's reports", body = ApiResponse<Vec<CompletionNoticeDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn list_finished(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<Vec<CompletionNoticeDto>>>> {
    let notices = service.finished_for_user(&user.username).await?;
    Ok(Json(ApiResponse::success(Some(notices), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/notifications/finished/all",
    responses(
        (status = 200, description = "All finished tasks", body = ApiResponse<Vec<CompletionNoticeDto>>),
        (status = 403, description = "Forbidden - coordinator only")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn list_all_finished(
    RequireCoordinator(_user): RequireCoordinator,
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<Vec<CompletionNoticeDto>>>> {
    let notices = service.all_finished().await?;
    Ok(Json(ApiResponse::success(Some(notices), None, None)))
}
