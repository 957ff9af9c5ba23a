//! PostgreSQL implementation of InvitationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::Invitation;
use bmg_core::error::DomainError;
use bmg_core::traits::{InvitationRepository, RepoResult};
use bmg_core::value_objects::Snowflake;

use crate::mappers::InvitationInsert;
use crate::models::InvitationModel;

use super::error::{invitation_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of InvitationRepository
#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    /// Create a new PgInvitationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Invitation>> {
        let result = sqlx::query_as::<_, InvitationModel>(
            r#"
            SELECT id, invitation_code, landlord_id, property_id, tenant_name, tenant_email,
                   unit_number, rent_amount, status, created_at, expires_at
            FROM tenant_invitations
            WHERE invitation_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invitation::from))
    }

    #[instrument(skip(self))]
    async fn find_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<Vec<Invitation>> {
        let results = sqlx::query_as::<_, InvitationModel>(
            r#"
            SELECT id, invitation_code, landlord_id, property_id, tenant_name, tenant_email,
                   unit_number, rent_amount, status, created_at, expires_at
            FROM tenant_invitations
            WHERE landlord_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(landlord_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Invitation::from).collect())
    }

    #[instrument(skip(self, invitation))]
    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        let insert = InvitationInsert::new(invitation);

        sqlx::query(
            r#"
            INSERT INTO tenant_invitations (id, invitation_code, landlord_id, property_id,
                                            tenant_name, tenant_email, unit_number, rent_amount,
                                            status, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(insert.id)
        .bind(insert.invitation_code)
        .bind(insert.landlord_id)
        .bind(insert.property_id)
        .bind(insert.tenant_name)
        .bind(insert.tenant_email)
        .bind(insert.unit_number)
        .bind(insert.rent_amount)
        .bind(insert.status)
        .bind(invitation.created_at)
        .bind(invitation.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::InvitationCodeExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_accepted(&self, code: &str) -> RepoResult<bool> {
        // The status filter is what rejects a second acceptance attempt
        let result = sqlx::query(
            r#"
            UPDATE tenant_invitations
            SET status = 'accepted'
            WHERE invitation_code = $1 AND status = 'pending'
            "#,
        )
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, code: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM tenant_invitations WHERE invitation_code = $1
            "#,
        )
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invitation_not_found());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgInvitationRepository>();
    }
}
