use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{constraint_error, AppError, Result};
use crate::features::tasks::dtos::{AssignTaskDto, TaskQueueEntryDto, TaskResponseDto};
use crate::features::tasks::models::{AssignedTask, TaskQueueEntry, TaskStatus};

/// Service for assigning response work to departments and tracking it to
/// completion.
pub struct TaskService {
    pool: SqlitePool,
}

impl TaskService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Assign a task against an existing disaster report. The report is
    /// checked inside the same transaction as the insert.
    pub async fn assign(&self, dto: AssignTaskDto) -> Result<TaskResponseDto> {
        if dto.department.trim().is_empty() {
            return Err(AppError::Validation(
                "Department cannot be empty".to_string(),
            ));
        }
        if dto.task_description.trim().is_empty() {
            return Err(AppError::Validation(
                "Task description cannot be empty".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let report_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM disaster_reports WHERE id = ?")
                .bind(dto.disaster_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check report existence: {:?}", e);
                    AppError::Database(e)
                })?;

        if report_count == 0 {
            return Err(AppError::Reference(format!(
                "No disaster report with id '{}'",
                dto.disaster_id
            )));
        }

        let task = sqlx::query_as::<_, AssignedTask>(
            r#"
            INSERT INTO assigned_tasks (disaster_id, department, task_description, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, disaster_id, department, task_description, status, created_at
            "#,
        )
        .bind(dto.disaster_id)
        .bind(&dto.department)
        .bind(&dto.task_description)
        .bind(TaskStatus::InProcess)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert task: {:?}", e);
            constraint_error(
                e,
                "Task already exists",
                &format!("No disaster report with id '{}'", dto.disaster_id),
            )
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit transaction: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Task assigned: id={}, report={}, department={}",
            task.id,
            task.disaster_id,
            task.department
        );

        Ok(task.into())
    }

    /// The dispatch queue: every task joined with its report, most urgent
    /// report first. Unprioritized reports sink below Very Low, ties break
    /// by task ID so the order is stable.
    pub async fn list_sorted_by_priority(&self) -> Result<Vec<TaskQueueEntryDto>> {
        let entries = sqlx::query_as::<_, TaskQueueEntry>(
            r#"
            SELECT t.id, t.disaster_id, d.disaster_type, d.location, d.priority,
                   t.department, t.task_description, t.status, t.created_at
            FROM assigned_tasks t
            JOIN disaster_reports d ON t.disaster_id = d.id
            ORDER BY CASE d.priority
                WHEN 'Very High' THEN 1
                WHEN 'High' THEN 2
                WHEN 'Medium' THEN 3
                WHEN 'Low' THEN 4
                WHEN 'Very Low' THEN 5
                ELSE 6
            END, t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list task queue: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(entries.into_iter().map(|e| e.into()).collect())
    }

    /// Move a single task to a new status. Keyed by task ID.
    pub async fn update_status(&self, id: i64, status: TaskStatus) -> Result<()> {
        let result = sqlx::query("UPDATE assigned_tasks SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update task status: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task '{}' not found", id)));
        }

        tracing::info!("Task status updated: id={}, status={}", id, status);

        Ok(())
    }

    /// Move every task belonging to a report to a new status in one
    /// statement. A report with no tasks updates zero rows, which is fine.
    pub async fn update_status_by_report(
        &self,
        disaster_id: i64,
        status: TaskStatus,
    ) -> Result<u64> {
        let result = sqlx::query("UPDATE assigned_tasks SET status = ? WHERE disaster_id = ?")
            .bind(status)
            .bind(disaster_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update task statuses for report: {:?}", e);
                AppError::Database(e)
            })?;

        let count = result.rows_affected();

        tracing::info!(
            "Task statuses updated: report={}, status={}, count={}",
            disaster_id,
            status,
            count
        );

        Ok(count)
    }

    /// Delete a task by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM assigned_tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete task: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task '{}' not found", id)));
        }

        tracing::info!("Task deleted: id={}", id);

        Ok(())
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
    use crate::shared::test_helpers::test_pool;

    async fn seed_report(pool: &SqlitePool, username: &str, priority: Option<Priority>) -> i64 {
        let accounts = AccountService::new(pool.clone());
        if accounts.get_role(username).await.unwrap().is_none() {
            accounts
                .register(RegisterAccountDto {
                    username: username.to_string(),
                    password: "password123".to_string(),
                    email: format!("{}@test.com", username),
                    phone_number: format!("91234{:05}", username.len()),
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
                    disaster_type: "Flood".to_string(),
                    location: "Riverside".to_string(),
                    severity: 5,
                    description: "details".to_string(),
                },
            )
            .await
            .unwrap();

        if let Some(priority) = priority {
            reports.set_priority(report.id, priority).await.unwrap();
        }

        report.id
    }

    fn task_dto(disaster_id: i64, department: &str) -> AssignTaskDto {
        AssignTaskDto {
            disaster_id,
            department: department.to_string(),
            task_description: "Clear the access road".to_string(),
        }
    }

    #[tokio::test]
    async fn test_assign_and_queue() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", Some(Priority::High)).await;
        let service = TaskService::new(pool);

        let task = service.assign(task_dto(report_id, "Fire Department")).await.unwrap();
        assert!(task.id > 0);
        assert_eq!(task.status, TaskStatus::InProcess);

        let queue = service.list_sorted_by_priority().await.unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].disaster_id, report_id);
        assert_eq!(queue[0].disaster_type, "Flood");
        assert_eq!(queue[0].location, "Riverside");
        assert_eq!(queue[0].priority, Some(Priority::High));
    }

    #[tokio::test]
    async fn test_assign_unknown_report_is_reference_error() {
        let pool = test_pool().await;
        let service = TaskService::new(pool);

        let result = service.assign(task_dto(999, "Fire Department")).await;
        assert!(matches!(result, Err(AppError::Reference(_))));
    }

    #[tokio::test]
    async fn test_assign_rejects_blank_fields() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool);

        let result = service.assign(task_dto(report_id, "   ")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut dto = task_dto(report_id, "Fire Department");
        dto.task_description = "".to_string();
        let result = service.assign(dto).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_queue_orders_by_report_urgency() {
        let pool = test_pool().await;
        let low = seed_report(&pool, "ram", Some(Priority::Low)).await;
        let urgent = seed_report(&pool, "ram", Some(Priority::VeryHigh)).await;
        let unset = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool);

        service.assign(task_dto(low, "Debris Removal")).await.unwrap();
        service.assign(task_dto(urgent, "Search and Rescue team")).await.unwrap();
        service.assign(task_dto(unset, "Hospital")).await.unwrap();

        let queue = service.list_sorted_by_priority().await.unwrap();
        let order: Vec<i64> = queue.iter().map(|e| e.disaster_id).collect();
        assert_eq!(order, vec![urgent, low, unset]);

        // SQL ordering agrees with the rank the model defines
        let ranks: Vec<i64> = queue
            .iter()
            .map(|e| e.priority.map(Priority::rank).unwrap_or(6))
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[tokio::test]
    async fn test_queue_breaks_ties_by_task_id() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", Some(Priority::Medium)).await;
        let service = TaskService::new(pool);

        let first = service.assign(task_dto(report_id, "Evacuation Department")).await.unwrap();
        let second = service.assign(task_dto(report_id, "Water Supply Department")).await.unwrap();

        let queue = service.list_sorted_by_priority().await.unwrap();
        let order: Vec<i64> = queue.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_update_status() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool);

        let task = service.assign(task_dto(report_id, "Hospital")).await.unwrap();

        service.update_status(task.id, TaskStatus::Finished).await.unwrap();
        let queue = service.list_sorted_by_priority().await.unwrap();
        assert_eq!(queue[0].status, TaskStatus::Finished);

        let result = service.update_status(task.id + 100, TaskStatus::Finished).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_status_by_report() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", None).await;
        let other_id = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool);

        service.assign(task_dto(report_id, "Hospital")).await.unwrap();
        service.assign(task_dto(report_id, "Fire Department")).await.unwrap();
        let untouched = service.assign(task_dto(other_id, "Hospital")).await.unwrap();

        let count = service
            .update_status_by_report(report_id, TaskStatus::Finished)
            .await
            .unwrap();
        assert_eq!(count, 2);

        let queue = service.list_sorted_by_priority().await.unwrap();
        for entry in queue {
            if entry.id == untouched.id {
                assert_eq!(entry.status, TaskStatus::InProcess);
            } else {
                assert_eq!(entry.status, TaskStatus::Finished);
            }
        }
    }

    #[tokio::test]
    async fn test_update_status_by_report_with_no_tasks() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool);

        let count = service
            .update_status_by_report(report_id, TaskStatus::Finished)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool);

        let task = service.assign(task_dto(report_id, "Hospital")).await.unwrap();

        service.delete(task.id).await.unwrap();
        assert!(service.list_sorted_by_priority().await.unwrap().is_empty());

        let result = service.delete(task.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deleting_report_cascades_to_tasks() {
        let pool = test_pool().await;
        let report_id = seed_report(&pool, "ram", None).await;
        let service = TaskService::new(pool.clone());

        service.assign(task_dto(report_id, "Hospital")).await.unwrap();
        service.assign(task_dto(report_id, "Fire Department")).await.unwrap();

        ReportService::new(pool).delete(report_id).await.unwrap();

        assert!(service.list_sorted_by_priority().await.unwrap().is_empty());
    }
}
