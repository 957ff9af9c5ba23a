//! Dashboard handlers

use axum::{extract::State, Json};
use bmg_service::{DashboardResponse, DashboardService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the landlord dashboard summary
///
/// GET /dashboard
pub async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service.summary(auth.user_id).await?;
    Ok(Json(response))
}
