//! PostgreSQL implementation of PaymentRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::ManualPayment;
use bmg_core::traits::{PaymentRepository, RepoResult};
use bmg_core::value_objects::Snowflake;

use crate::mappers::PaymentInsert;
use crate::models::PaymentModel;

use super::error::{map_db_error, payment_not_found};

/// PostgreSQL implementation of PaymentRepository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    /// Create a new PgPaymentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ManualPayment>> {
        let result = sqlx::query_as::<_, PaymentModel>(
            r#"
            SELECT id, user_id, property_id, amount, payment_type, payment_method,
                   payment_date, description, created_at
            FROM manual_payments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ManualPayment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        property_id: Option<Snowflake>,
    ) -> RepoResult<Vec<ManualPayment>> {
        let results = sqlx::query_as::<_, PaymentModel>(
            r#"
            SELECT id, user_id, property_id, amount, payment_type, payment_method,
                   payment_date, description, created_at
            FROM manual_payments
            WHERE user_id = $1 AND ($2::BIGINT IS NULL OR property_id = $2)
            ORDER BY payment_date DESC, created_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .bind(property_id.map(Snowflake::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ManualPayment::from).collect())
    }

    #[instrument(skip(self, payment))]
    async fn create(&self, payment: &ManualPayment) -> RepoResult<()> {
        let insert = PaymentInsert::new(payment);

        sqlx::query(
            r#"
            INSERT INTO manual_payments (id, user_id, property_id, amount, payment_type,
                                         payment_method, payment_date, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.property_id)
        .bind(insert.amount)
        .bind(insert.payment_type)
        .bind(insert.payment_method)
        .bind(insert.payment_date)
        .bind(insert.description)
        .bind(payment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM manual_payments WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(payment_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn sum_recorded_between(
        &self,
        user_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<i64> {
        let sum: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT SUM(amount) FROM manual_payments
            WHERE user_id = $1 AND payment_date >= $2 AND payment_date < $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(sum.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPaymentRepository>();
    }
}
