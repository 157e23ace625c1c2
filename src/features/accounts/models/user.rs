use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Account role, stored in the database as its display string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
pub enum Role {
    #[default]
    User,
    Coordinator,
    Department,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Coordinator => write!(f, "Coordinator"),
            Role::Department => write!(f, "Department"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// Database model for a user account
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    /// SHA-256 hex digest of the password, never the plaintext
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
}
