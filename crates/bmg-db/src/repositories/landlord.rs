//! PostgreSQL implementation of LandlordDetailsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::LandlordDetails;
use bmg_core::traits::{LandlordDetailsRepository, RepoResult};
use bmg_core::value_objects::Snowflake;

use crate::models::LandlordDetailsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LandlordDetailsRepository
#[derive(Clone)]
pub struct PgLandlordDetailsRepository {
    pool: PgPool,
}

impl PgLandlordDetailsRepository {
    /// Create a new PgLandlordDetailsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandlordDetailsRepository for PgLandlordDetailsRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<LandlordDetails>> {
        let result = sqlx::query_as::<_, LandlordDetailsModel>(
            r#"
            SELECT user_id, company_name, business_address, tax_id, payout_iban,
                   created_at, updated_at
            FROM landlord_details
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LandlordDetails::from))
    }

    #[instrument(skip(self, details))]
    async fn upsert(&self, details: &LandlordDetails) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO landlord_details (user_id, company_name, business_address, tax_id,
                                          payout_iban, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE
            SET company_name = EXCLUDED.company_name,
                business_address = EXCLUDED.business_address,
                tax_id = EXCLUDED.tax_id,
                payout_iban = EXCLUDED.payout_iban,
                updated_at = NOW()
            "#,
        )
        .bind(details.user_id.into_inner())
        .bind(details.company_name.as_deref())
        .bind(details.business_address.as_deref())
        .bind(details.tax_id.as_deref())
        .bind(details.payout_iban.as_deref())
        .bind(details.created_at)
        .bind(details.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLandlordDetailsRepository>();
    }
}
