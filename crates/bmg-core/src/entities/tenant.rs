//! Tenant entity - a lease record binding a unit to a (possibly not yet
//! registered) tenant. `user_id` stays empty until an invitation is accepted.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenantStatus {
    Active,
    Inactive,
    Pending,
}

impl TenantStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            other => Err(format!("unknown tenant status: {other}")),
        }
    }
}

/// Tenant entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: Snowflake,
    pub user_id: Option<Snowflake>,
    pub property_id: Snowflake,
    pub landlord_id: Snowflake,
    pub unit_number: String,
    pub rent_amount: i64,
    pub move_in_date: NaiveDate,
    pub lease_end_date: Option<NaiveDate>,
    pub status: TenantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Create a new unlinked tenant record (no account attached yet)
    pub fn new(
        id: Snowflake,
        property_id: Snowflake,
        landlord_id: Snowflake,
        unit_number: String,
        rent_amount: i64,
        move_in_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: None,
            property_id,
            landlord_id,
            unit_number,
            rent_amount,
            move_in_date,
            lease_end_date: None,
            status: TenantStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_lease_end_date(mut self, lease_end_date: Option<NaiveDate>) -> Self {
        self.lease_end_date = lease_end_date;
        self
    }

    /// Check if an account has been attached through invitation acceptance
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.user_id.is_some()
    }

    /// Attach the accepted account and activate the lease record
    pub fn link_user(&mut self, user_id: Snowflake) {
        self.user_id = Some(user_id);
        self.status = TenantStatus::Active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tenant {
        Tenant::new(
            Snowflake::new(1),
            Snowflake::new(20),
            Snowflake::new(10),
            "1".to_string(),
            1000,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_tenant_is_pending_and_unlinked() {
        let tenant = sample();
        assert_eq!(tenant.status, TenantStatus::Pending);
        assert!(!tenant.is_linked());
    }

    #[test]
    fn test_link_user_activates() {
        let mut tenant = sample();
        tenant.link_user(Snowflake::new(99));
        assert!(tenant.is_linked());
        assert_eq!(tenant.user_id, Some(Snowflake::new(99)));
        assert_eq!(tenant.status, TenantStatus::Active);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            TenantStatus::Active,
            TenantStatus::Inactive,
            TenantStatus::Pending,
        ] {
            assert_eq!(status.as_str().parse::<TenantStatus>().unwrap(), status);
        }
        assert!("evicted".parse::<TenantStatus>().is_err());
    }
}
