use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::core::error::{constraint_error, AppError, Result};
use crate::features::accounts::dtos::{AccountResponseDto, DirectoryEntryDto, RegisterAccountDto};
use crate::features::accounts::models::{Role, User};
use crate::shared::validation::{EMAIL_REGEX, PHONE_REGEX};

/// Hash a password into its stored form.
/// Deterministic: the same password always yields the same digest.
fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Service for account storage and credential checks
pub struct AccountService {
    pool: SqlitePool,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new account. The password is digested before it is stored;
    /// the plaintext never reaches the database.
    pub async fn register(&self, dto: RegisterAccountDto) -> Result<AccountResponseDto> {
        if dto.username.trim().is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }
        if dto.password.is_empty() {
            return Err(AppError::Validation("Password cannot be empty".to_string()));
        }
        if !EMAIL_REGEX.is_match(&dto.email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }
        if !PHONE_REGEX.is_match(&dto.phone_number) {
            return Err(AppError::Validation(
                "Phone number must be numeric with at least 9 digits".to_string(),
            ));
        }

        let role = dto.role.unwrap_or_default();

        // Duplicate check and insert run in one transaction; the unique
        // constraints back this up against concurrent registrations.
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin registration transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let taken: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE username = ? OR email = ? OR phone_number = ?",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&dto.phone_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check for existing account: {:?}", e);
            AppError::Database(e)
        })?;

        if taken > 0 {
            return Err(AppError::Conflict(
                "Username, email, or phone number already exists".to_string(),
            ));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, email, phone_number, role)
            VALUES (?, ?, ?, ?, ?)
            RETURNING username, password, email, phone_number, role
            "#,
        )
        .bind(&dto.username)
        .bind(password_digest(&dto.password))
        .bind(&dto.email)
        .bind(&dto.phone_number)
        .bind(role)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert account: {:?}", e);
            constraint_error(
                e,
                "Username, email, or phone number already exists",
                "Account references a missing row",
            )
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit registration: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Account registered: username={}, role={}", user.username, user.role);

        Ok(user.into())
    }

    /// Check a username/password pair against the stored digest.
    /// An empty username is never valid and issues no query.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        if username.trim().is_empty() {
            return Ok(false);
        }

        let stored: Option<String> =
            sqlx::query_scalar("SELECT password FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch credentials: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(stored.is_some_and(|digest| digest == password_digest(password)))
    }

    /// Look up the role for a username. None means the account does not exist.
    pub async fn get_role(&self, username: &str) -> Result<Option<Role>> {
        let role: Option<Role> = sqlx::query_scalar("SELECT role FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch role: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(role)
    }

    /// Existence check for the forgot-password flow: both fields must belong
    /// to the same account.
    pub async fn lookup_by_email_and_phone(&self, email: &str, phone_number: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE email = ? AND phone_number = ?",
        )
        .bind(email)
        .bind(phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up account by email and phone: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(count > 0)
    }

    /// Replace the password digest for the account with this email.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(AppError::Validation("Password cannot be empty".to_string()));
        }

        let result = sqlx::query("UPDATE users SET password = ? WHERE email = ?")
            .bind(password_digest(new_password))
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to reset password: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Password reset for email={}, rows_affected={}",
            email,
            result.rows_affected()
        );

        Ok(())
    }

    /// Change an account's role. Keyed by username, the primary key.
    pub async fn update_role(&self, username: &str, role: Role) -> Result<()> {
        let result = sqlx::query("UPDATE users SET role = ? WHERE username = ?")
            .bind(role)
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update role: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User '{}' not found", username)));
        }

        tracing::info!("Role updated: username={}, role={}", username, role);

        Ok(())
    }

    /// Delete an account. Reports filed by the account (and their tasks)
    /// go with it via the cascade rules.
    pub async fn delete(&self, username: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete account: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User '{}' not found", username)));
        }

        tracing::info!("Account deleted: username={}", username);

        Ok(())
    }

    /// Directory listing for admins: username and role only, digests and
    /// contact details withheld.
    pub async fn list_all(&self) -> Result<Vec<DirectoryEntryDto>> {
        let entries = sqlx::query_as::<_, DirectoryEntryDto>(
            "SELECT username, role FROM users ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list accounts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(entries)
    }
}
