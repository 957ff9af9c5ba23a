//! Billing service
//!
//! Serves the subscription plan list. When the plan table cannot be read the
//! hard-coded default tiers are returned instead, so the pricing page always
//! renders.

use bmg_core::entities::SubscriptionPlan;
use tracing::{instrument, warn};

use crate::dto::PlanResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Billing service
pub struct BillingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BillingService<'a> {
    /// Create a new BillingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List subscription plans, falling back to the built-in tiers on error
    #[instrument(skip(self))]
    pub async fn list_plans(&self) -> ServiceResult<Vec<PlanResponse>> {
        let plans = match self.ctx.plan_repo().list_all().await {
            Ok(plans) if !plans.is_empty() => plans,
            Ok(_) => {
                warn!("Plan table is empty, serving fallback plans");
                SubscriptionPlan::fallback_plans()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read plans, serving fallback plans");
                SubscriptionPlan::fallback_plans()
            }
        };

        Ok(plans.iter().map(PlanResponse::from).collect())
    }
}
