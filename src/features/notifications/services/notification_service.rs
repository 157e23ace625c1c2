use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::notifications::dtos::CompletionNoticeDto;
use crate::features::notifications::models::CompletionNotice;
use crate::features::tasks::models::TaskStatus;

/// Read side of task completion: reporters see finished work on their own
/// reports, coordinators see all of it.
pub struct NotificationService {
    pool: SqlitePool,
}

impl NotificationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Finished tasks on reports filed by the given user.
    pub async fn finished_for_user(&self, username: &str) -> Result<Vec<CompletionNoticeDto>> {
        let notices = sqlx::query_as::<_, CompletionNotice>(
            r#"
            SELECT t.id AS task_id, t.disaster_id, d.disaster_type, d.location, d.priority,
                   t.department, t.task_description, t.status
            FROM assigned_tasks t
            JOIN disaster_reports d ON t.disaster_id = d.id
            WHERE t.status = ? AND d.username = ?
            ORDER BY t.id
            "#,
        )
        .bind(TaskStatus::Finished)
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list finished tasks for user: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(notices.into_iter().map(|n| n.into()).collect())
    }

    /// Every finished task across all reports.
    pub async fn all_finished(&self) -> Result<Vec<CompletionNoticeDto>> {
        let notices = sqlx::query_as::<_, CompletionNotice>(
            r#"
            SELECT t.id AS task_id, t.disaster_id, d.disaster_type, d.location, d.priority,
                   t.department, t.task_description, t.status
            FROM assigned_tasks t
            JOIN disaster_reports d ON t.disaster_id = d.id
            WHERE t.status = ?
            ORDER BY t.id
            "#,
        )
        .bind(TaskStatus::Finished)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list finished tasks: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(notices.into_iter().map(|n| n.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::dtos::RegisterAccountDto;
    use crate::features::accounts::services::AccountService;
    use crate::features::reports::dtos::SubmitReportDto;
    use crate::features::reports::models::Priority;
    use crate::features::reports::services::ReportService;
    use crate::features::tasks::dtos::AssignTaskDto;
    use crate::features::tasks::services::TaskService;
    use crate::shared::test_helpers::test_pool;

    async fn seed_finished_task(pool: &SqlitePool, username: &str, phone: &str) -> i64 {
        let accounts = AccountService::new(pool.clone());
        if accounts.get_role(username).await.unwrap().is_none() {
            accounts
                .register(RegisterAccountDto {
                    username: username.to_string(),
                    password: "password123".to_string(),
                    email: format!("{}@test.com", username),
                    phone_number: phone.to_string(),
                    role: None,
                })
                .await
                .unwrap();
        }

        let reports = ReportService::new(pool.clone());
        let report = reports
            .submit(
                username,
                SubmitReportDto {
                    disaster_type: "Earthquake".to_string(),
                    location: "Old Town".to_string(),
                    severity: 7,
                    description: "details".to_string(),
                },
            )
            .await
            .unwrap();
        reports.set_priority(report.id, Priority::High).await.unwrap();

        let tasks = TaskService::new(pool.clone());
        let task = tasks
            .assign(AssignTaskDto {
                disaster_id: report.id,
                department: "Search and Rescue team".to_string(),
                task_description: "Sweep collapsed buildings".to_string(),
            })
            .await
            .unwrap();
        tasks
            .update_status(task.id, TaskStatus::Finished)
            .await
            .unwrap();

        task.id
    }

    #[tokio::test]
    async fn test_no_finished_tasks_is_empty() {
        let pool = test_pool().await;
        let service = NotificationService::new(pool);

        assert!(service.finished_for_user("nobody").await.unwrap().is_empty());
        assert!(service.all_finished().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_finished_for_user_only_sees_own_reports() {
        let pool = test_pool().await;
        let ram_task = seed_finished_task(&pool, "ram", "987654321").await;
        seed_finished_task(&pool, "sita", "912345678").await;
        let service = NotificationService::new(pool);

        let notices = service.finished_for_user("ram").await.unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].task_id, ram_task);
        assert_eq!(notices[0].disaster_type, "Earthquake");
        assert_eq!(notices[0].location, "Old Town");
        assert_eq!(notices[0].priority, Some(Priority::High));
        assert_eq!(notices[0].status, TaskStatus::Finished);
    }

    #[tokio::test]
    async fn test_all_finished_spans_reporters() {
        let pool = test_pool().await;
        seed_finished_task(&pool, "ram", "987654321").await;
        seed_finished_task(&pool, "sita", "912345678").await;
        let service = NotificationService::new(pool);

        let notices = service.all_finished().await.unwrap();
        assert_eq!(notices.len(), 2);
    }

    #[tokio::test]
    async fn test_report_to_completion_flow() {
        let pool = test_pool().await;
        let accounts = AccountService::new(pool.clone());
        accounts
            .register(RegisterAccountDto {
                username: "ram".to_string(),
                password: "password123".to_string(),
                email: "ram@test.com".to_string(),
                phone_number: "987654321".to_string(),
                role: None,
            })
            .await
            .unwrap();

        let reports = ReportService::new(pool.clone());
        let report = reports
            .submit(
                "ram",
                SubmitReportDto {
                    disaster_type: "Fire".to_string(),
                    location: "X".to_string(),
                    severity: 8,
                    description: "Warehouse fire spreading".to_string(),
                },
            )
            .await
            .unwrap();
        reports.set_priority(report.id, Priority::High).await.unwrap();

        let tasks = TaskService::new(pool.clone());
        tasks
            .assign(AssignTaskDto {
                disaster_id: report.id,
                department: "Fire Department".to_string(),
                task_description: "Contain and extinguish".to_string(),
            })
            .await
            .unwrap();
        let updated = tasks
            .update_status_by_report(report.id, TaskStatus::Finished)
            .await
            .unwrap();
        assert_eq!(updated, 1);

        let notices = NotificationService::new(pool).all_finished().await.unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].department, "Fire Department");
        assert_eq!(notices[0].status, TaskStatus::Finished);
        assert_eq!(notices[0].priority, Some(Priority::High));
    }

    #[tokio::test]
    async fn test_in_process_tasks_are_excluded() {
        let pool = test_pool().await;
        seed_finished_task(&pool, "ram", "987654321").await;

        let reports = ReportService::new(pool.clone());
        let report = reports
            .submit(
                "ram",
                SubmitReportDto {
                    disaster_type: "Fire".to_string(),
                    location: "Market".to_string(),
                    severity: 4,
                    description: "details".to_string(),
                },
            )
            .await
            .unwrap();
        TaskService::new(pool.clone())
            .assign(AssignTaskDto {
                disaster_id: report.id,
                department: "Fire Department".to_string(),
                task_description: "Contain the fire".to_string(),
            })
            .await
            .unwrap();

        let service = NotificationService::new(pool);
        let notices = service.finished_for_user("ram").await.unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].disaster_type, "Earthquake");
    }
}
