use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::accounts::dtos::{AccountResponseDto, RegisterAccountDto};
use crate::features::auth::dto::{
    ForgotPasswordDto, LoginRequestDto, MeResponseDto, SessionResponseDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::service::AuthService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterAccountDto,
    responses(
        (status = 201, description = "Account created successfully", body = ApiResponse<AccountResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username, email, or phone number already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RegisterAccountDto>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(account), None, None)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Session token issued", body = ApiResponse<SessionResponseDto>),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let session = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(session), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Password reset successfully"),
        (status = 404, description = "No account matches that email and phone number")
    ),
    tag = "auth"
)]
pub async fn forgot_password(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<ForgotPasswordDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.forgot_password(dto).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Password reset successfully".to_string()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ApiResponse<MeResponseDto>>> {
    let user_data = service.get_current_user(user).await?;
    Ok(Json(ApiResponse::success(Some(user_data), None, None)))
}
