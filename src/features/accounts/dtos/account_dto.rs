use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::accounts::models::{Role, User};

/// Request DTO for registering a new account
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountDto {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "Password cannot be empty"))]
    pub password: String,

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

    /// Defaults to User when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Response DTO for an account (digest withheld)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponseDto {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
}

impl From<User> for AccountResponseDto {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            email: u.email,
            phone_number: u.phone_number,
            role: u.role,
        }
    }
}

/// Directory entry for the admin user listing: username and role only
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntryDto {
    pub username: String,
    pub role: Role,
}

/// Request DTO for changing an account's role
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDto {
    pub role: Role,
}
