//! Role-based authorization guards for the application.
//!
//! These guards extract the authenticated user and verify they have the
//! required role. Roles are flat: Admin, Coordinator, and Department each
//! unlock their own surface and do not include one another. Operations open
//! to every signed-in account take [`AuthenticatedUser`] directly instead of
//! a guard.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is an admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

/// Guard for checking if user is a coordinator.
///
/// Use this for triage and assignment operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireCoordinator(user): RequireCoordinator) { ... }
/// ```
pub struct RequireCoordinator(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireCoordinator
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_coordinator() {
            return Err(AppError::Forbidden(
                "Coordinator access required".to_string(),
            ));
        }

        Ok(RequireCoordinator(user.clone()))
    }
}

/// Guard for checking if user is a department account.
///
/// Use this for task status operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireDepartment(user): RequireDepartment) { ... }
/// ```
pub struct RequireDepartment(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireDepartment
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_department() {
            return Err(AppError::Forbidden(
                "Department access required".to_string(),
            ));
        }

        Ok(RequireDepartment(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::models::Role;
    use crate::shared::test_helpers::{test_user, with_auth};
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn admin_only(RequireAdmin(_user): RequireAdmin) -> &'static str {
        "ok"
    }

    async fn coordinator_only(RequireCoordinator(_user): RequireCoordinator) -> &'static str {
        "ok"
    }

    async fn department_only(RequireDepartment(_user): RequireDepartment) -> &'static str {
        "ok"
    }

    fn router() -> Router {
        Router::new()
            .route("/admin", get(admin_only))
            .route("/coordinator", get(coordinator_only))
            .route("/department", get(department_only))
    }

    #[tokio::test]
    async fn test_guards_allow_matching_role() {
        let server =
            TestServer::new(with_auth(router(), test_user("boss", Role::Admin))).unwrap();
        server.get("/admin").await.assert_status_ok();

        let server =
            TestServer::new(with_auth(router(), test_user("coord", Role::Coordinator))).unwrap();
        server.get("/coordinator").await.assert_status_ok();

        let server =
            TestServer::new(with_auth(router(), test_user("dept", Role::Department))).unwrap();
        server.get("/department").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_guards_reject_other_roles() {
        let server = TestServer::new(with_auth(router(), test_user("ram", Role::User))).unwrap();

        server
            .get("/admin")
            .await
            .assert_status(StatusCode::FORBIDDEN);
        server
            .get("/coordinator")
            .await
            .assert_status(StatusCode::FORBIDDEN);
        server
            .get("/department")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_roles_do_not_stack() {
        let server =
            TestServer::new(with_auth(router(), test_user("boss", Role::Admin))).unwrap();

        server
            .get("/coordinator")
            .await
            .assert_status(StatusCode::FORBIDDEN);
        server
            .get("/department")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_session_is_unauthorized() {
        let server = TestServer::new(router()).unwrap();

        let response = server.get("/admin").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(body["message"], serde_json::json!("User not authenticated"));
    }
}
