use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireAdmin, RequireCoordinator};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{ReportResponseDto, SetPriorityDto, SubmitReportDto};
use crate::features::reports::services::ReportService;
use crate::shared::constants::DISASTER_TYPES;
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
    path = "/api/reports",
    request_body = SubmitReportDto,
    responses(
        (status = 201, description = "Report submitted successfully", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn submit_report(
    user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service.submit(&user.username, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(report), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "List of disaster reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reports(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list_all().await?;
    let total = reports.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

#[utoipa::path(
    get,
    path = "/api/reports/types",
    responses(
        (status = 200, description = "Known disaster types", body = ApiResponse<Vec<String>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_disaster_types(
    _user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let types = DISASTER_TYPES.iter().map(|t| t.to_string()).collect();
    Ok(Json(ApiResponse::success(Some(types), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report details", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn get_report(
    _user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

#[utoipa::path(
    patch,
    path = "/api/reports/{id}/priority",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = SetPriorityDto,
    responses(
        (status = 200, description = "Priority updated successfully"),
        (status = 403, description = "Forbidden - coordinator only"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn set_report_priority(
    RequireCoordinator(_user): RequireCoordinator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<SetPriorityDto>,
) -> Result<Json<ApiResponse<()>>> {
    service.set_priority(id, dto.priority).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Priority updated successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted successfully"),
        (status = 404, description = "Report not found"),
        (status = 403, description = "Forbidden - admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn delete_report(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Report deleted successfully".to_string()),
        None,
    )))
}
