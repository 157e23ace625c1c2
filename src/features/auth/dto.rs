use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::accounts::models::Role;

use super::model::{AuthenticatedUser, Workflow};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Issued on successful login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseDto {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
    pub role: Role,
    pub workflow: Workflow,
}

/// Password reset request. The email and phone number must both belong to
/// the same account.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordDto {
    #[validate(regex(
        path = *crate::shared::validation::EMAIL_REGEX,
        message = "Invalid email format"
    ))]
    pub email: String,

    #[validate(regex(
        path = *crate::shared::validation::PHONE_REGEX,
        message = "Phone number must be numeric with at least 9 digits"
    ))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 128, message = "Password cannot be empty"))]
    pub new_password: String,
}

/// DTO for /auth/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseDto {
    pub username: String,
    pub role: Role,
    pub workflow: Workflow,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            workflow: Workflow::for_role(user.role),
            username: user.username,
            role: user.role,
        }
    }
}
