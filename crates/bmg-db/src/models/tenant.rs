//! Tenant database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for tenants table
#[derive(Debug, Clone, FromRow)]
pub struct TenantModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub property_id: i64,
    pub landlord_id: i64,
    pub unit_number: String,
    pub rent_amount: i64,
    pub move_in_date: NaiveDate,
    pub lease_end_date: Option<NaiveDate>,
    /// Lease status: 'active', 'inactive', 'pending' (CHECK-constrained)
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TenantModel {
    /// Check if an account is attached
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.user_id.is_some()
    }
}
