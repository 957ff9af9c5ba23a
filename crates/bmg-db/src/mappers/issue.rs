//! Maintenance issue entity <-> model mapper

use bmg_core::entities::{IssuePriority, IssueStatus, MaintenanceIssue};
use bmg_core::value_objects::Snowflake;

use crate::models::IssueModel;

impl From<IssueModel> for MaintenanceIssue {
    fn from(model: IssueModel) -> Self {
        MaintenanceIssue {
            id: Snowflake::new(model.id),
            reporter_id: Snowflake::new(model.reporter_id),
            property_id: Snowflake::new(model.property_id),
            title: model.title,
            description: model.description,
            priority: model.priority.parse().unwrap_or(IssuePriority::Medium),
            status: model.status.parse().unwrap_or(IssueStatus::Open),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert MaintenanceIssue entity reference to values for database insertion
pub struct IssueInsert<'a> {
    pub id: i64,
    pub reporter_id: i64,
    pub property_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub priority: &'static str,
    pub status: &'static str,
}

impl<'a> IssueInsert<'a> {
    pub fn new(issue: &'a MaintenanceIssue) -> Self {
        Self {
            id: issue.id.into_inner(),
            reporter_id: issue.reporter_id.into_inner(),
            property_id: issue.property_id.into_inner(),
            title: &issue.title,
            description: &issue.description,
            priority: issue.priority.as_str(),
            status: issue.status.as_str(),
        }
    }
}
