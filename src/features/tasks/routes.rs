use crate::features::tasks::handlers::task_handler;
use crate::features::tasks::services::TaskService;
use axum::{
    routing::{delete, get, patch},
    Router,
};
use std::sync::Arc;

pub fn routes(task_service: Arc<TaskService>) -> Router {
    Router::new()
        .route(
            "/api/tasks",
            get(task_handler::list_tasks).post(task_handler::assign_task),
        )
        .route("/api/tasks/departments", get(task_handler::list_departments))
        .route(
            "/api/tasks/{id}/status",
            patch(task_handler::update_task_status),
        )
        .route(
            "/api/reports/{id}/tasks/status",
            patch(task_handler::update_report_tasks_status),
        )
        .with_state(task_service)
}

pub fn admin_routes(task_service: Arc<TaskService>) -> Router {
    Router::new()
        .route("/api/admin/tasks/{id}", delete(task_handler::delete_task))
        .with_state(task_service)
}
