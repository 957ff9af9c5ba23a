//! Issue service
//!
//! Handles maintenance issue reporting and status updates.

use bmg_core::entities::{IssuePriority, IssueStatus, MaintenanceIssue};
use bmg_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{IssueResponse, ReportIssueRequest, UpdateIssueRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::invitation::parse_id;
use super::permission::PermissionService;

/// Issue service
pub struct IssueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IssueService<'a> {
    /// Create a new IssueService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Report a new maintenance issue against a property
    #[instrument(skip(self, request))]
    pub async fn report_issue(
        &self,
        reporter_id: Snowflake,
        request: ReportIssueRequest,
    ) -> ServiceResult<IssueResponse> {
        let property_id = parse_id(&request.property_id, "property_id")?;

        // Reporters are the property owner or a tenant living there
        let permission_service = PermissionService::new(self.ctx);
        if !permission_service
            .can_reference_property(property_id, reporter_id)
            .await?
        {
            return Err(ServiceError::permission_denied("report issues for this property"));
        }

        let priority = match request.priority.as_deref() {
            Some(raw) => raw
                .parse::<IssuePriority>()
                .map_err(ServiceError::validation)?,
            None => IssuePriority::Medium,
        };

        let issue = MaintenanceIssue::new(
            self.ctx.generate_id(),
            reporter_id,
            property_id,
            request.title,
            request.description,
            priority,
        );

        self.ctx.issue_repo().create(&issue).await?;

        info!(issue_id = %issue.id, property_id = %property_id, "Issue reported");

        Ok(IssueResponse::from(issue))
    }

    /// List issues relevant to the caller: landlords see issues across their
    /// properties, tenants see the ones they reported.
    #[instrument(skip(self))]
    pub async fn list_issues(&self, user_id: Snowflake) -> ServiceResult<Vec<IssueResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let issues = if user.is_landlord() {
            self.ctx.issue_repo().find_by_landlord(user_id).await?
        } else {
            self.ctx.issue_repo().find_by_reporter(user_id).await?
        };

        Ok(issues.iter().map(IssueResponse::from).collect())
    }

    /// Update an issue's status (owning landlord only)
    #[instrument(skip(self, request))]
    pub async fn update_issue(
        &self,
        issue_id: Snowflake,
        user_id: Snowflake,
        request: UpdateIssueRequest,
    ) -> ServiceResult<IssueResponse> {
        let mut issue = self
            .ctx
            .issue_repo()
            .find_by_id(issue_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Issue", issue_id.to_string()))?;

        // Only the landlord owning the underlying property moves issues along
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .require_property_owner(issue.property_id, user_id)
            .await
            .map_err(|e| match e {
                ServiceError::Domain(DomainError::NotPropertyOwner) => {
                    ServiceError::permission_denied("update issues for this property")
                }
                other => other,
            })?;

        let status = request
            .status
            .parse::<IssueStatus>()
            .map_err(ServiceError::validation)?;

        self.ctx.issue_repo().update_status(issue_id, status).await?;
        issue.set_status(status);

        info!(issue_id = %issue_id, status = %status, "Issue status updated");

        Ok(IssueResponse::from(issue))
    }
}
