use crate::features::reports::handlers::report_handler;
use crate::features::reports::services::ReportService;
use axum::{
    routing::{delete, get, patch},
    Router,
};
use std::sync::Arc;

pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(report_handler::list_reports).post(report_handler::submit_report),
        )
        .route("/api/reports/types", get(report_handler::list_disaster_types))
        .route("/api/reports/{id}", get(report_handler::get_report))
        .route(
            "/api/reports/{id}/priority",
            patch(report_handler::set_report_priority),
        )
        .with_state(report_service)
}

pub fn admin_routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/admin/reports/{id}", delete(report_handler::delete_report))
        .with_state(report_service)
}
