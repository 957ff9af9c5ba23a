//! Invitation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tenant_invitations table
#[derive(Debug, Clone, FromRow)]
pub struct InvitationModel {
    pub id: i64,
    pub invitation_code: String,
    pub landlord_id: i64,
    pub property_id: i64,
    pub tenant_name: String,
    pub tenant_email: String,
    pub unit_number: String,
    pub rent_amount: i64,
    /// Lifecycle status: 'pending', 'accepted', 'expired' (CHECK-constrained)
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl InvitationModel {
    /// Check if the expiry timestamp has passed
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}
