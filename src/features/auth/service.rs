use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::accounts::dtos::{AccountResponseDto, RegisterAccountDto};
use crate::features::accounts::services::AccountService;
use crate::features::auth::dto::{
    ForgotPasswordDto, LoginRequestDto, MeResponseDto, SessionResponseDto,
};
use crate::features::auth::model::{AuthenticatedUser, Claims, Workflow};

/// Issues session tokens against the account store.
pub struct AuthService {
    accounts: Arc<AccountService>,
    encoding_key: EncodingKey,
    token_ttl_secs: i64,
}

impl AuthService {
    pub fn new(accounts: Arc<AccountService>, token_secret: &str, token_ttl: Duration) -> Self {
        Self {
            accounts,
            encoding_key: EncodingKey::from_secret(token_secret.as_bytes()),
            token_ttl_secs: token_ttl.as_secs() as i64,
        }
    }

    pub async fn register(&self, dto: RegisterAccountDto) -> Result<AccountResponseDto> {
        self.accounts.register(dto).await
    }

    /// Check credentials and mint a session token. The response carries the
    /// workflow the client should open for the account's role.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<SessionResponseDto> {
        let valid = self
            .accounts
            .verify_credentials(&dto.username, &dto.password)
            .await?;
        if !valid {
            return Err(AppError::Auth("Invalid username or password".to_string()));
        }

        let role = self
            .accounts
            .get_role(&dto.username)
            .await?
            .ok_or_else(|| AppError::Auth("Invalid username or password".to_string()))?;

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: dto.username.clone(),
            role,
            iat: now,
            exp: now + self.token_ttl_secs,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {:?}", e);
            AppError::Internal("Failed to issue session token".to_string())
        })?;

        tracing::info!("Session opened: user={}, role={}", dto.username, role);

        Ok(SessionResponseDto {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_ttl_secs,
            username: dto.username,
            role,
            workflow: Workflow::for_role(role),
        })
    }

    /// Reset a password for the account matching both the email and the
    /// phone number. Either one alone is not enough.
    pub async fn forgot_password(&self, dto: ForgotPasswordDto) -> Result<()> {
        let known = self
            .accounts
            .lookup_by_email_and_phone(&dto.email, &dto.phone_number)
            .await?;
        if !known {
            return Err(AppError::NotFound(
                "No account matches that email and phone number".to_string(),
            ));
        }

        self.accounts
            .reset_password(&dto.email, &dto.new_password)
            .await
    }

    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<MeResponseDto> {
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::models::Role;
    use crate::features::auth::validator::JwtValidator;
    use crate::shared::test_helpers::test_pool;
    use sqlx::SqlitePool;

    const SECRET: &str = "unit-test-secret-at-least-32-bytes!!";

    fn service(pool: &SqlitePool) -> AuthService {
        AuthService::new(
            Arc::new(AccountService::new(pool.clone())),
            SECRET,
            Duration::from_secs(3600),
        )
    }

    fn register_dto(username: &str, role: Option<Role>) -> RegisterAccountDto {
        RegisterAccountDto {
            username: username.to_string(),
            password: "password123".to_string(),
            email: format!("{}@test.com", username),
            phone_number: format!("98000{:05}", username.len()),
            role,
        }
    }

    fn login_dto(username: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let pool = test_pool().await;
        let service = service(&pool);

        service.register(register_dto("ram", None)).await.unwrap();

        let session = service.login(login_dto("ram", "password123")).await.unwrap();
        assert!(!session.token.is_empty());
        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.role, Role::User);
        assert_eq!(session.workflow, Workflow::Reporting);
    }

    #[tokio::test]
    async fn test_login_token_is_accepted_by_validator() {
        let pool = test_pool().await;
        let service = service(&pool);
        let validator = JwtValidator::new(SECRET, Duration::from_secs(0));

        service
            .register(register_dto("ram", Some(Role::Coordinator)))
            .await
            .unwrap();
        let session = service.login(login_dto("ram", "password123")).await.unwrap();

        let user = validator.validate_token(&session.token).unwrap();
        assert_eq!(user.username, "ram");
        assert_eq!(user.role, Role::Coordinator);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let pool = test_pool().await;
        let service = service(&pool);

        service.register(register_dto("ram", None)).await.unwrap();

        let result = service.login(login_dto("ram", "wrong")).await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let pool = test_pool().await;
        let service = service(&pool);

        let result = service.login(login_dto("ghost", "password123")).await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_forgot_password_resets_credentials() {
        let pool = test_pool().await;
        let service = service(&pool);

        let dto = register_dto("ram", None);
        let email = dto.email.clone();
        let phone = dto.phone_number.clone();
        service.register(dto).await.unwrap();

        service
            .forgot_password(ForgotPasswordDto {
                email,
                phone_number: phone,
                new_password: "newpassword456".to_string(),
            })
            .await
            .unwrap();

        let result = service.login(login_dto("ram", "password123")).await;
        assert!(matches!(result, Err(AppError::Auth(_))));
        service.login(login_dto("ram", "newpassword456")).await.unwrap();
    }

    #[tokio::test]
    async fn test_forgot_password_requires_matching_pair() {
        let pool = test_pool().await;
        let service = service(&pool);

        let dto = register_dto("ram", None);
        let email = dto.email.clone();
        service.register(dto).await.unwrap();

        let result = service
            .forgot_password(ForgotPasswordDto {
                email,
                phone_number: "111222333".to_string(),
                new_password: "newpassword456".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
