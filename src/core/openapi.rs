use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::accounts::{dtos as accounts_dtos, handlers as accounts_handlers, models as accounts_models};
use crate::features::auth;
use crate::features::notifications::{dtos as notifications_dtos, handlers as notifications_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::tasks::{
    dtos as tasks_dtos, handlers as tasks_handlers, models as tasks_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::register,
        auth::handler::login,
        auth::handler::forgot_password,
        auth::handler::get_me,
        // Reports
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::list_disaster_types,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::set_report_priority,
        // Tasks
        tasks_handlers::task_handler::assign_task,
        tasks_handlers::task_handler::list_tasks,
        tasks_handlers::task_handler::list_departments,
        tasks_handlers::task_handler::update_task_status,
        tasks_handlers::task_handler::update_report_tasks_status,
        // Notifications
        notifications_handlers::notification_handler::list_finished,
        notifications_handlers::notification_handler::list_all_finished,
        // Admin
        accounts_handlers::account_handler::list_accounts,
        accounts_handlers::account_handler::update_account_role,
        accounts_handlers::account_handler::delete_account,
        reports_handlers::report_handler::delete_report,
        tasks_handlers::task_handler::delete_task,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Accounts
            accounts_models::Role,
            accounts_dtos::RegisterAccountDto,
            accounts_dtos::AccountResponseDto,
            accounts_dtos::DirectoryEntryDto,
            accounts_dtos::UpdateRoleDto,
            ApiResponse<accounts_dtos::AccountResponseDto>,
            ApiResponse<Vec<accounts_dtos::DirectoryEntryDto>>,
            // Auth
            auth::model::AuthenticatedUser,
            auth::model::Workflow,
            auth::dto::LoginRequestDto,
            auth::dto::SessionResponseDto,
            auth::dto::ForgotPasswordDto,
            auth::dto::MeResponseDto,
            ApiResponse<auth::dto::SessionResponseDto>,
            ApiResponse<auth::dto::MeResponseDto>,
            // Reports
            reports_models::Priority,
            reports_dtos::SubmitReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::SetPriorityDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<Vec<String>>,
            // Tasks
            tasks_models::TaskStatus,
            tasks_dtos::AssignTaskDto,
            tasks_dtos::TaskResponseDto,
            tasks_dtos::TaskQueueEntryDto,
            tasks_dtos::UpdateTaskStatusDto,
            ApiResponse<tasks_dtos::TaskResponseDto>,
            ApiResponse<Vec<tasks_dtos::TaskQueueEntryDto>>,
            // Notifications
            notifications_dtos::CompletionNoticeDto,
            ApiResponse<Vec<notifications_dtos::CompletionNoticeDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login, and password reset"),
        (name = "reports", description = "Disaster reports and triage"),
        (name = "tasks", description = "Response tasks and the dispatch queue"),
        (name = "notifications", description = "Finished task notifications"),
        (name = "admin", description = "Admin endpoints (admin role only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Dispatch API",
        version = "0.1.0",
        description = "API documentation for the disaster response dispatch service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
