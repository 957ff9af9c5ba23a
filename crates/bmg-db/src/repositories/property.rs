//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::Property;
use bmg_core::traits::{PropertyRepository, RepoResult};
use bmg_core::value_objects::Snowflake;

use crate::mappers::{PropertyInsert, PropertyUpdate};
use crate::models::PropertyModel;

use super::error::{map_db_error, property_not_found};

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new PgPropertyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(
            r#"
            SELECT id, owner_id, name, address, units, rent_amount, status, image_url,
                   created_at, updated_at
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Property::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Property>> {
        let results = sqlx::query_as::<_, PropertyModel>(
            r#"
            SELECT id, owner_id, name, address, units, rent_amount, status, image_url,
                   created_at, updated_at
            FROM properties
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Property::from).collect())
    }

    #[instrument(skip(self, property))]
    async fn create(&self, property: &Property) -> RepoResult<()> {
        let insert = PropertyInsert::new(property);

        sqlx::query(
            r#"
            INSERT INTO properties (id, owner_id, name, address, units, rent_amount, status,
                                    image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(insert.id)
        .bind(insert.owner_id)
        .bind(insert.name)
        .bind(insert.address)
        .bind(insert.units)
        .bind(insert.rent_amount)
        .bind(insert.status)
        .bind(insert.image_url)
        .bind(property.created_at)
        .bind(property.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, property))]
    async fn update(&self, property: &Property) -> RepoResult<()> {
        let update = PropertyUpdate::new(property);

        let result = sqlx::query(
            r#"
            UPDATE properties
            SET name = $2, address = $3, units = $4, rent_amount = $5, status = $6,
                image_url = $7, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(update.id)
        .bind(update.name)
        .bind(update.address)
        .bind(update.units)
        .bind(update.rent_amount)
        .bind(update.status)
        .bind(update.image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(property.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM properties WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_owner(
        &self,
        owner_id: Snowflake,
        status: Option<&str>,
    ) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM properties
            WHERE owner_id = $1 AND ($2::TEXT IS NULL OR status = $2)
            "#,
        )
        .bind(owner_id.into_inner())
        .bind(status)
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
        assert_send_sync::<PgPropertyRepository>();
    }
}
