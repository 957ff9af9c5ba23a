//! Manual payment handlers
//!
//! Ledger endpoints: record, list (optionally filtered by property), delete.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bmg_service::{PaymentResponse, PaymentService, RecordPaymentRequest};
use serde::Deserialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_path_id;

/// Record payment
///
/// POST /payments
pub async fn record_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RecordPaymentRequest>,
) -> ApiResult<Created<Json<PaymentResponse>>> {
    let service = PaymentService::new(state.service_context());
    let response = service.record_payment(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Payment list filter
#[derive(Debug, Deserialize)]
pub struct PaymentsQuery {
    pub property_id: Option<String>,
}

/// List own payments
///
/// GET /payments?property_id=...
pub async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PaymentsQuery>,
) -> ApiResult<Json<Vec<PaymentResponse>>> {
    let property_id = query
        .property_id
        .as_deref()
        .map(|raw| parse_path_id(raw, "property_id"))
        .transpose()?;

    let service = PaymentService::new(state.service_context());
    let response = service.list_payments(auth.user_id, property_id).await?;
    Ok(Json(response))
}

/// Delete payment
///
/// DELETE /payments/{payment_id}
pub async fn delete_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(payment_id): Path<String>,
) -> ApiResult<NoContent> {
    let payment_id = parse_path_id(&payment_id, "payment_id")?;

    let service = PaymentService::new(state.service_context());
    service.delete_payment(payment_id, auth.user_id).await?;
    Ok(NoContent)
}
