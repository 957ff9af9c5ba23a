//! PostgreSQL implementation of IssueRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::{IssueStatus, MaintenanceIssue};
use bmg_core::traits::{IssueRepository, RepoResult};
use bmg_core::value_objects::Snowflake;

use crate::mappers::IssueInsert;
use crate::models::IssueModel;

use super::error::{issue_not_found, map_db_error};

/// PostgreSQL implementation of IssueRepository
#[derive(Clone)]
pub struct PgIssueRepository {
    pool: PgPool,
}

impl PgIssueRepository {
    /// Create a new PgIssueRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssueRepository for PgIssueRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<MaintenanceIssue>> {
        let result = sqlx::query_as::<_, IssueModel>(
            r#"
            SELECT id, reporter_id, property_id, title, description, priority, status,
                   created_at, updated_at
            FROM maintenance_issues
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MaintenanceIssue::from))
    }

    #[instrument(skip(self))]
    async fn find_by_reporter(
        &self,
        reporter_id: Snowflake,
    ) -> RepoResult<Vec<MaintenanceIssue>> {
        let results = sqlx::query_as::<_, IssueModel>(
            r#"
            SELECT id, reporter_id, property_id, title, description, priority, status,
                   created_at, updated_at
            FROM maintenance_issues
            WHERE reporter_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(reporter_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MaintenanceIssue::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_landlord(
        &self,
        landlord_id: Snowflake,
    ) -> RepoResult<Vec<MaintenanceIssue>> {
        let results = sqlx::query_as::<_, IssueModel>(
            r#"
            SELECT i.id, i.reporter_id, i.property_id, i.title, i.description, i.priority,
                   i.status, i.created_at, i.updated_at
            FROM maintenance_issues i
            JOIN properties p ON p.id = i.property_id
            WHERE p.owner_id = $1
            ORDER BY i.created_at DESC
            "#,
        )
        .bind(landlord_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MaintenanceIssue::from).collect())
    }

    #[instrument(skip(self, issue))]
    async fn create(&self, issue: &MaintenanceIssue) -> RepoResult<()> {
        let insert = IssueInsert::new(issue);

        sqlx::query(
            r#"
            INSERT INTO maintenance_issues (id, reporter_id, property_id, title, description,
                                            priority, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(insert.id)
        .bind(insert.reporter_id)
        .bind(insert.property_id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.priority)
        .bind(insert.status)
        .bind(issue.created_at)
        .bind(issue.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Snowflake, status: IssueStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE maintenance_issues SET status = $2, updated_at = NOW() WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(issue_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_open_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM maintenance_issues i
            JOIN properties p ON p.id = i.property_id
            WHERE p.owner_id = $1 AND i.status != 'resolved'
            "#,
        )
        .bind(landlord_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgIssueRepository>();
    }
}
