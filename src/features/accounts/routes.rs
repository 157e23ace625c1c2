use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::features::accounts::handlers;
use crate::features::accounts::services::AccountService;

/// Create admin routes for account management (admin only)
pub fn admin_routes(service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/api/admin/users", get(handlers::list_accounts))
        .route(
            "/api/admin/users/{username}/role",
            patch(handlers::update_account_role),
        )
        .route(
            "/api/admin/users/{username}",
            delete(handlers::delete_account),
        )
        .with_state(service)
}
