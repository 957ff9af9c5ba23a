//! Landlord details handlers
//!
//! Business details fetch/upsert for the settings page.

use axum::{extract::State, Json};
use bmg_service::{LandlordDetailsResponse, LandlordService, UpsertLandlordDetailsRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get own landlord details
///
/// GET /landlord-details
pub async fn get_details(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<LandlordDetailsResponse>> {
    let service = LandlordService::new(state.service_context());
    let response = service.get_details(auth.user_id).await?;
    Ok(Json(response))
}

/// Create or update own landlord details
///
/// PUT /landlord-details
pub async fn upsert_details(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpsertLandlordDetailsRequest>,
) -> ApiResult<Json<LandlordDetailsResponse>> {
    let service = LandlordService::new(state.service_context());
    let response = service.upsert_details(auth.user_id, request).await?;
    Ok(Json(response))
}
