use super::model::{AuthenticatedUser, Claims};
use crate::core::error::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::time::Duration;

/// Verifies session tokens minted by [`super::service::AuthService`]. Tokens
/// are symmetric HS256, signed and checked with the same secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            username: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::models::Role;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-secret-at-least-32-bytes!!";

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_expiring_in(secs: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: "ram".to_string(),
            role: Role::Coordinator,
            iat: now,
            exp: now + secs,
        }
    }

    #[test]
    fn test_valid_token_roundtrip() {
        let validator = JwtValidator::new(SECRET, Duration::from_secs(0));
        let token = sign(&claims_expiring_in(3600), SECRET);

        let user = validator.validate_token(&token).unwrap();
        assert_eq!(user.username, "ram");
        assert_eq!(user.role, Role::Coordinator);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let validator = JwtValidator::new(SECRET, Duration::from_secs(0));
        let token = sign(&claims_expiring_in(-600), SECRET);

        let result = validator.validate_token(&token);
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let validator = JwtValidator::new(SECRET, Duration::from_secs(0));
        let token = sign(
            &claims_expiring_in(3600),
            "a-different-secret-also-32-bytes-long",
        );

        let result = validator.validate_token(&token);
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let validator = JwtValidator::new(SECRET, Duration::from_secs(0));

        let result = validator.validate_token("not-a-jwt");
        assert!(matches!(result, Err(AppError::Auth(_))));
    }
}
