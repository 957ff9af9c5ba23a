//! Invitation handlers
//!
//! Endpoints for the tenant invitation workflow. Verification and acceptance
//! are public - the invited tenant has no account yet.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bmg_service::{
    AcceptInvitationRequest, AuthResponse, CreateInvitationRequest, InvitationDetailsResponse,
    InvitationResponse, InvitationService,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Issue invitation
///
/// POST /invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateInvitationRequest>,
) -> ApiResult<Created<Json<InvitationResponse>>> {
    let service = InvitationService::new(state.service_context());
    let response = service.create_invitation(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List own invitations
///
/// GET /invitations
pub async fn list_invitations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<InvitationResponse>>> {
    let service = InvitationService::new(state.service_context());
    let response = service.list_invitations(auth.user_id).await?;
    Ok(Json(response))
}

/// Query parameters of the shareable link
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub email: Option<String>,
}

/// Verify invitation by code and email (no auth required)
///
/// GET /invitations/{code}?email=...
pub async fn verify_invitation(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<VerifyQuery>,
) -> ApiResult<Json<InvitationDetailsResponse>> {
    let email = query
        .email
        .ok_or_else(|| ApiError::invalid_query("Missing email parameter"))?;

    let service = InvitationService::new(state.service_context());
    let response = service.verify_invitation(&code, &email).await?;
    Ok(Json(response))
}

/// Accept invitation and create the tenant account (no auth required)
///
/// POST /invitations/{code}/accept
pub async fn accept_invitation(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ValidatedJson(request): ValidatedJson<AcceptInvitationRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = InvitationService::new(state.service_context());
    let response = service.accept_invitation(&code, request).await?;
    Ok(Created(Json(response)))
}

/// Revoke invitation
///
/// DELETE /invitations/{code}
pub async fn revoke_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(code): Path<String>,
) -> ApiResult<NoContent> {
    let service = InvitationService::new(state.service_context());
    service.revoke_invitation(&code, auth.user_id).await?;
    Ok(NoContent)
}
