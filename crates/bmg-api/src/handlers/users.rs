//! User profile handlers
//!
//! Endpoints behind the account settings page.

use axum::{extract::State, Json};
use bmg_service::{ChangePasswordRequest, CurrentUserResponse, UpdateProfileRequest, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get current user profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Change password
///
/// PUT /users/@me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.change_password(auth.user_id, request).await?;
    Ok(NoContent)
}
