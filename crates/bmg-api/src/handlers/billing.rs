//! Billing handlers
//!
//! Public subscription plan listing with a built-in fallback.

use axum::{extract::State, Json};
use bmg_service::{BillingService, PlanResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// List subscription plans (no auth required)
///
/// GET /billing/plans
pub async fn list_plans(State(state): State<AppState>) -> ApiResult<Json<Vec<PlanResponse>>> {
    let service = BillingService::new(state.service_context());
    let response = service.list_plans().await?;
    Ok(Json(response))
}
