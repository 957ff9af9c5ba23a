//! Maintenance issue database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for maintenance_issues table
#[derive(Debug, Clone, FromRow)]
pub struct IssueModel {
    pub id: i64,
    pub reporter_id: i64,
    pub property_id: i64,
    pub title: String,
    pub description: String,
    /// 'low', 'medium', 'high' (CHECK-constrained)
    pub priority: String,
    /// 'open', 'in_progress', 'resolved' (CHECK-constrained)
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
