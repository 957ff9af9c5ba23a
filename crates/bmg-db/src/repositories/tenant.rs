//! PostgreSQL implementation of TenantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::Tenant;
use bmg_core::traits::{RepoResult, TenantRepository};
use bmg_core::value_objects::Snowflake;

use crate::mappers::{TenantInsert, TenantUpdate};
use crate::models::TenantModel;

use super::error::{map_db_error, tenant_not_found};

const TENANT_COLUMNS: &str = "id, user_id, property_id, landlord_id, unit_number, rent_amount, \
                              move_in_date, lease_end_date, status, created_at, updated_at";

/// PostgreSQL implementation of TenantRepository
#[derive(Clone)]
pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    /// Create a new PgTenantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tenant>> {
        let result = sqlx::query_as::<_, TenantModel>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tenant::from))
    }

    #[instrument(skip(self))]
    async fn find_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<Vec<Tenant>> {
        let results = sqlx::query_as::<_, TenantModel>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE landlord_id = $1 ORDER BY created_at DESC"
        ))
        .bind(landlord_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tenant::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Tenant>> {
        let result = sqlx::query_as::<_, TenantModel>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1"
        ))
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tenant::from))
    }

    #[instrument(skip(self))]
    async fn find_unlinked(
        &self,
        property_id: Snowflake,
        unit_number: &str,
    ) -> RepoResult<Option<Tenant>> {
        let result = sqlx::query_as::<_, TenantModel>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants \
             WHERE property_id = $1 AND unit_number = $2 AND user_id IS NULL \
             ORDER BY created_at DESC LIMIT 1"
        ))
        .bind(property_id.into_inner())
        .bind(unit_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tenant::from))
    }

    #[instrument(skip(self, tenant))]
    async fn create(&self, tenant: &Tenant) -> RepoResult<()> {
        let insert = TenantInsert::new(tenant);

        sqlx::query(
            r#"
            INSERT INTO tenants (id, user_id, property_id, landlord_id, unit_number, rent_amount,
                                 move_in_date, lease_end_date, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.property_id)
        .bind(insert.landlord_id)
        .bind(insert.unit_number)
        .bind(insert.rent_amount)
        .bind(insert.move_in_date)
        .bind(insert.lease_end_date)
        .bind(insert.status)
        .bind(tenant.created_at)
        .bind(tenant.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, tenant))]
    async fn update(&self, tenant: &Tenant) -> RepoResult<()> {
        let update = TenantUpdate::new(tenant);

        let result = sqlx::query(
            r#"
            UPDATE tenants
            SET unit_number = $2, rent_amount = $3, move_in_date = $4, lease_end_date = $5,
                status = $6, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(update.id)
        .bind(update.unit_number)
        .bind(update.rent_amount)
        .bind(update.move_in_date)
        .bind(update.lease_end_date)
        .bind(update.status)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tenant_not_found(tenant.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn link_user(&self, id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE tenants
            SET user_id = $2, status = 'active', updated_at = NOW()
            WHERE id = $1 AND user_id IS NULL
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tenant_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM tenants WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tenant_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_active_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM tenants WHERE landlord_id = $1 AND status = 'active'
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
        assert_send_sync::<PgTenantRepository>();
    }
}
