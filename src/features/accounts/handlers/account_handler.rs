use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::accounts::dtos::{DirectoryEntryDto, UpdateRoleDto};
use crate::features::accounts::services::AccountService;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::{ApiResponse, Meta};

/// List every account as username/role pairs (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Directory of accounts", body = ApiResponse<Vec<DirectoryEntryDto>>),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_accounts(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
) -> Result<Json<ApiResponse<Vec<DirectoryEntryDto>>>> {
    let entries = service.list_all().await?;
    let total = entries.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(entries),
        None,
        Some(Meta { total }),
    )))
}

/// Change an account's role (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/users/{username}/role",
    params(
        ("username" = String, Path, description = "Account username")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated successfully"),
        (status = 404, description = "User not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_account_role(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
    Path(username): Path<String>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.update_role(&username, dto.role).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Role updated successfully".to_string()),
        None,
    )))
}

/// Delete an account (admin only)
#[utoipa::path(
    delete,
    path = "/api/admin/users/{username}",
    params(
        ("username" = String, Path, description = "Account username")
    ),
    responses(
        (status = 200, description = "Account deleted successfully"),
        (status = 404, description = "User not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_account(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&username).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Account deleted successfully".to_string()),
        None,
    )))
}
