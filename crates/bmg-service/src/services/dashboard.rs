//! Dashboard service
//!
//! Aggregates the landlord dashboard counters in one place.

use bmg_core::Snowflake;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use tracing::instrument;

use crate::dto::DashboardResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the dashboard summary for a landlord
    #[instrument(skip(self))]
    pub async fn summary(&self, landlord_id: Snowflake) -> ServiceResult<DashboardResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service.require_landlord(landlord_id).await?;

        let property_count = self.ctx.property_repo().count_by_owner(landlord_id, None).await?;
        let occupied_count = self
            .ctx
            .property_repo()
            .count_by_owner(landlord_id, Some("occupied"))
            .await?;
        let vacant_count = self
            .ctx
            .property_repo()
            .count_by_owner(landlord_id, Some("vacant"))
            .await?;
        let active_tenant_count = self
            .ctx
            .tenant_repo()
            .count_active_by_landlord(landlord_id)
            .await?;
        let open_issue_count = self
            .ctx
            .issue_repo()
            .count_open_by_landlord(landlord_id)
            .await?;

        let (month_start, next_month_start) = current_month_bounds()
            .ok_or_else(|| ServiceError::internal("Calendar arithmetic failed"))?;
        let month_payment_total = self
            .ctx
            .payment_repo()
            .sum_recorded_between(landlord_id, month_start, next_month_start)
            .await?;

        Ok(DashboardResponse {
            property_count,
            occupied_count,
            vacant_count,
            active_tenant_count,
            open_issue_count,
            month_payment_total,
        })
    }
}

/// First day of the current month and of the next month
fn current_month_bounds() -> Option<(NaiveDate, NaiveDate)> {
    let today = Utc::now().date_naive();
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?;
    let next = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)?
    };
    // Sanity: the window is non-empty and covers today
    debug_assert!(start <= today && today < next && next - start >= Duration::days(28));
    Some((start, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_month_bounds() {
        let (start, next) = current_month_bounds().unwrap();
        assert_eq!(start.day(), 1);
        assert_eq!(next.day(), 1);
        assert!(next > start);
        let span = next - start;
        assert!((28..=31).contains(&span.num_days()));
    }
}
