use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{constraint_error, AppError, Result};
use crate::features::reports::dtos::{ReportResponseDto, SubmitReportDto};
use crate::features::reports::models::{DisasterReport, Priority};

/// Service for disaster report storage and triage
pub struct ReportService {
    pool: SqlitePool,
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// File a new report for the given user. Priority starts unset and the
    /// report time is assigned here, not by the caller.
    pub async fn submit(&self, username: &str, dto: SubmitReportDto) -> Result<ReportResponseDto> {
        if dto.disaster_type.trim().is_empty() {
            return Err(AppError::Validation(
                "Disaster type cannot be empty".to_string(),
            ));
        }
        if dto.location.trim().is_empty() {
            return Err(AppError::Validation("Location cannot be empty".to_string()));
        }
        if dto.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }
        if !(1..=10).contains(&dto.severity) {
            return Err(AppError::Validation(
                "Severity must be between 1 and 10".to_string(),
            ));
        }

        let report = sqlx::query_as::<_, DisasterReport>(
            r#"
            INSERT INTO disaster_reports (username, disaster_type, location, severity, description, report_time)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, username, disaster_type, location, severity, description, priority, report_time
            "#,
        )
        .bind(username)
        .bind(&dto.disaster_type)
        .bind(&dto.location)
        .bind(dto.severity)
        .bind(&dto.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report: {:?}", e);
            constraint_error(
                e,
                "Report already exists",
                "Reporter account does not exist",
            )
        })?;

        tracing::info!(
            "Report submitted: id={}, type={}, severity={}, user={}",
            report.id,
            report.disaster_type,
            report.severity,
            username
        );

        Ok(report.into())
    }

    /// Every report, oldest first, with its current priority.
    pub async fn list_all(&self) -> Result<Vec<ReportResponseDto>> {
        let reports = sqlx::query_as::<_, DisasterReport>(
            r#"
            SELECT id, username, disaster_type, location, severity, description, priority, report_time
            FROM disaster_reports
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports.into_iter().map(|r| r.into()).collect())
    }

    /// Get a report by ID
    pub async fn get_by_id(&self, id: i64) -> Result<ReportResponseDto> {
        let report = sqlx::query_as::<_, DisasterReport>(
            r#"
            SELECT id, username, disaster_type, location, severity, description, priority, report_time
            FROM disaster_reports
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report by ID: {:?}", e);
            AppError::Database(e)
        })?;

        report
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Report '{}' not found", id)))
    }

    /// Set the triage priority for a report. Keyed by ID.
    pub async fn set_priority(&self, id: i64, priority: Priority) -> Result<()> {
        let result = sqlx::query("UPDATE disaster_reports SET priority = ? WHERE id = ?")
            .bind(priority)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set report priority: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report '{}' not found", id)));
        }

        tracing::info!("Report priority set: id={}, priority={}", id, priority);

        Ok(())
    }

    /// Delete a report by ID. Tasks assigned against it are removed by the
    /// cascade rule.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM disaster_reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report '{}' not found", id)));
        }

        tracing::info!("Report deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::dtos::RegisterAccountDto;
    use crate::features::accounts::services::AccountService;
    use crate::shared::test_helpers::test_pool;

    async fn seed_user(pool: &SqlitePool, username: &str) {
        AccountService::new(pool.clone())
            .register(RegisterAccountDto {
                username: username.to_string(),
                password: "password123".to_string(),
                email: format!("{}@test.com", username),
                phone_number: format!("98765{:05}", username.len()),
                role: None,
            })
            .await
            .unwrap();
    }

    fn report_dto(disaster_type: &str, location: &str, severity: i32) -> SubmitReportDto {
        SubmitReportDto {
            disaster_type: disaster_type.to_string(),
            location: location.to_string(),
            severity,
            description: "details".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_then_list() {
        let pool = test_pool().await;
        seed_user(&pool, "ram").await;
        let service = ReportService::new(pool);

        let report = service
            .submit("ram", report_dto("Fire", "Sector X", 8))
            .await
            .unwrap();
        assert!(report.id > 0);
        assert_eq!(report.priority, None);

        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, report.id);
        assert_eq!(all[0].disaster_type, "Fire");
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_fields() {
        let pool = test_pool().await;
        seed_user(&pool, "ram").await;
        let service = ReportService::new(pool);

        let result = service.submit("ram", report_dto("  ", "Sector X", 5)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service.submit("ram", report_dto("Fire", "", 5)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let mut dto = report_dto("Fire", "Sector X", 5);
        dto.description = "   ".to_string();
        let result = service.submit("ram", dto).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_submit_rejects_out_of_range_severity() {
        let pool = test_pool().await;
        seed_user(&pool, "ram").await;
        let service = ReportService::new(pool);

        let result = service.submit("ram", report_dto("Fire", "Sector X", 0)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service.submit("ram", report_dto("Fire", "Sector X", 11)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_submit_unknown_reporter_is_reference_error() {
        let pool = test_pool().await;
        let service = ReportService::new(pool);

        let result = service.submit("ghost", report_dto("Fire", "Sector X", 5)).await;
        assert!(matches!(result, Err(AppError::Reference(_))));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let pool = test_pool().await;
        seed_user(&pool, "ram").await;
        let service = ReportService::new(pool);

        let created = service
            .submit("ram", report_dto("Flood", "Riverside", 6))
            .await
            .unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.location, "Riverside");

        let result = service.get_by_id(created.id + 100).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_priority() {
        let pool = test_pool().await;
        seed_user(&pool, "ram").await;
        let service = ReportService::new(pool);

        let created = service
            .submit("ram", report_dto("Fire", "Sector X", 8))
            .await
            .unwrap();

        service.set_priority(created.id, Priority::High).await.unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.priority, Some(Priority::High));

        let result = service.set_priority(created.id + 100, Priority::Low).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        seed_user(&pool, "ram").await;
        let service = ReportService::new(pool);

        let created = service
            .submit("ram", report_dto("Fire", "Sector X", 8))
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();
        assert!(service.list_all().await.unwrap().is_empty());

        let result = service.delete(created.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
