use crate::features::notifications::handlers::notification_handler;
use crate::features::notifications::services::NotificationService;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes(notification_service: Arc<NotificationService>) -> Router {
    Router::new()
        .route(
            "/api/notifications/finished",
            get(notification_handler::list_finished),
        )
        .route(
            "/api/notifications/finished/all",
            get(notification_handler::list_all_finished),
        )
        .with_state(notification_service)
}
