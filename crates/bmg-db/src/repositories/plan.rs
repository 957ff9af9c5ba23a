//! PostgreSQL implementation of PlanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bmg_core::entities::SubscriptionPlan;
use bmg_core::traits::{PlanRepository, RepoResult};

use crate::models::PlanModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PlanRepository
#[derive(Clone)]
pub struct PgPlanRepository {
    pool: PgPool,
}

impl PgPlanRepository {
    /// Create a new PgPlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SubscriptionPlan>> {
        let results = sqlx::query_as::<_, PlanModel>(
            r#"
            SELECT id, name, price_monthly, features, highlighted
            FROM subscription_plans
            ORDER BY price_monthly ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SubscriptionPlan::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPlanRepository>();
    }
}
