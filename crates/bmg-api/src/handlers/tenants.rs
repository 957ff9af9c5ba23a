//! Tenant record handlers
//!
//! CRUD endpoints for the landlord's tenants panel, plus the tenant's own
//! lease view.

use axum::{
    extract::{Path, State},
    Json,
};
use bmg_service::{CreateTenantRequest, TenantResponse, TenantService, UpdateTenantRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_path_id;

/// Create tenant record
///
/// POST /tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTenantRequest>,
) -> ApiResult<Created<Json<TenantResponse>>> {
    let service = TenantService::new(state.service_context());
    let response = service.create_tenant(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List own tenant records
///
/// GET /tenants
pub async fn list_tenants(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TenantResponse>>> {
    let service = TenantService::new(state.service_context());
    let response = service.list_tenants(auth.user_id).await?;
    Ok(Json(response))
}

/// Get the calling tenant's own lease record
///
/// GET /tenants/@me
pub async fn get_own_tenancy(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<TenantResponse>> {
    let service = TenantService::new(state.service_context());
    let response = service.get_own_tenancy(auth.user_id).await?;
    Ok(Json(response))
}

/// Get tenant record by ID
///
/// GET /tenants/{tenant_id}
pub async fn get_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tenant_id): Path<String>,
) -> ApiResult<Json<TenantResponse>> {
    let tenant_id = parse_path_id(&tenant_id, "tenant_id")?;

    let service = TenantService::new(state.service_context());
    let response = service.get_tenant(tenant_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Update tenant record
///
/// PATCH /tenants/{tenant_id}
pub async fn update_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tenant_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTenantRequest>,
) -> ApiResult<Json<TenantResponse>> {
    let tenant_id = parse_path_id(&tenant_id, "tenant_id")?;

    let service = TenantService::new(state.service_context());
    let response = service
        .update_tenant(tenant_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete tenant record
///
/// DELETE /tenants/{tenant_id}
pub async fn delete_tenant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tenant_id): Path<String>,
) -> ApiResult<NoContent> {
    let tenant_id = parse_path_id(&tenant_id, "tenant_id")?;

    let service = TenantService::new(state.service_context());
    service.delete_tenant(tenant_id, auth.user_id).await?;
    Ok(NoContent)
}
