//! Maintenance issue handlers
//!
//! Issue reporting and status updates.

use axum::{
    extract::{Path, State},
    Json,
};
use bmg_service::{IssueResponse, IssueService, ReportIssueRequest, UpdateIssueRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::parse_path_id;

/// Report issue
///
/// POST /issues
pub async fn report_issue(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ReportIssueRequest>,
) -> ApiResult<Created<Json<IssueResponse>>> {
    let service = IssueService::new(state.service_context());
    let response = service.report_issue(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List issues visible to the caller
///
/// GET /issues
pub async fn list_issues(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<IssueResponse>>> {
    let service = IssueService::new(state.service_context());
    let response = service.list_issues(auth.user_id).await?;
    Ok(Json(response))
}

/// Update issue status
///
/// PATCH /issues/{issue_id}
pub async fn update_issue(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(issue_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateIssueRequest>,
) -> ApiResult<Json<IssueResponse>> {
    let issue_id = parse_path_id(&issue_id, "issue_id")?;

    let service = IssueService::new(state.service_context());
    let response = service.update_issue(issue_id, auth.user_id, request).await?;
    Ok(Json(response))
}
