//! Property handlers
//!
//! CRUD endpoints for the landlord's property listings.

use axum::{
    extract::{Path, State},
    Json,
};
use bmg_service::{
    CreatePropertyRequest, PropertyResponse, PropertyService, UpdatePropertyRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_path_id;

/// Create property
///
/// POST /properties
pub async fn create_property(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePropertyRequest>,
) -> ApiResult<Created<Json<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let response = service.create_property(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List own properties
///
/// GET /properties
pub async fn list_properties(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let response = service.list_properties(auth.user_id).await?;
    Ok(Json(response))
}

/// Get property by ID
///
/// GET /properties/{property_id}
pub async fn get_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_path_id(&property_id, "property_id")?;

    let service = PropertyService::new(state.service_context());
    let response = service.get_property(property_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Update property
///
/// PATCH /properties/{property_id}
pub async fn update_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(property_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePropertyRequest>,
) -> ApiResult<Json<PropertyResponse>> {
    let property_id = parse_path_id(&property_id, "property_id")?;

    let service = PropertyService::new(state.service_context());
    let response = service
        .update_property(property_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete property
///
/// DELETE /properties/{property_id}
pub async fn delete_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(property_id): Path<String>,
) -> ApiResult<NoContent> {
    let property_id = parse_path_id(&property_id, "property_id")?;

    let service = PropertyService::new(state.service_context());
    service.delete_property(property_id, auth.user_id).await?;
    Ok(NoContent)
}
