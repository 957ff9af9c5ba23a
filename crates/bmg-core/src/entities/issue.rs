//! Maintenance issue entity - a problem report filed against a property

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssuePriority {
    Low,
    Medium,
    High,
}

impl IssuePriority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssuePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown issue priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(format!("unknown issue status: {other}")),
        }
    }
}

/// Maintenance issue entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceIssue {
    pub id: Snowflake,
    pub reporter_id: Snowflake,
    pub property_id: Snowflake,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceIssue {
    pub fn new(
        id: Snowflake,
        reporter_id: Snowflake,
        property_id: Snowflake,
        title: String,
        description: String,
        priority: IssuePriority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            reporter_id,
            property_id,
            title,
            description,
            priority,
            status: IssueStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.status != IssueStatus::Resolved
    }

    pub fn set_status(&mut self, status: IssueStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_issue_is_open() {
        let issue = MaintenanceIssue::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            "Leaky tap".to_string(),
            "Kitchen tap drips".to_string(),
            IssuePriority::Low,
        );
        assert_eq!(issue.status, IssueStatus::Open);
        assert!(issue.is_open());
    }

    #[test]
    fn test_resolved_issue_not_open() {
        let mut issue = MaintenanceIssue::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(20),
            "Broken lock".to_string(),
            "Front door".to_string(),
            IssuePriority::High,
        );
        issue.set_status(IssueStatus::Resolved);
        assert!(!issue.is_open());
    }

    #[test]
    fn test_enum_roundtrips() {
        assert_eq!("in_progress".parse::<IssueStatus>().unwrap(), IssueStatus::InProgress);
        assert_eq!("high".parse::<IssuePriority>().unwrap(), IssuePriority::High);
        assert!("urgent".parse::<IssuePriority>().is_err());
    }
}
