//! Invitation entity - a landlord's offer to link a tenant to a unit
//!
//! Carries the generated code shared out-of-band, the target property/unit,
//! and an expiry timestamp. Expiry is checked on read, never swept.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Snowflake;

/// Lifecycle status of an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

impl InvitationStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "expired" => Ok(Self::Expired),
            other => Err(format!("unknown invitation status: {other}")),
        }
    }
}

/// Invitation entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    pub id: Snowflake,
    pub code: String,
    pub landlord_id: Snowflake,
    pub property_id: Snowflake,
    pub tenant_name: String,
    pub tenant_email: String,
    pub unit_number: String,
    pub rent_amount: i64,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Invitation {
    /// Create a new pending Invitation expiring after `expiry_days`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        code: String,
        landlord_id: Snowflake,
        property_id: Snowflake,
        tenant_name: String,
        tenant_email: String,
        unit_number: String,
        rent_amount: i64,
        expiry_days: i64,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id,
            code,
            landlord_id,
            property_id,
            tenant_name,
            tenant_email,
            unit_number,
            rent_amount,
            status: InvitationStatus::Pending,
            created_at,
            expires_at: created_at + Duration::days(expiry_days),
        }
    }

    /// Check if the expiry timestamp has passed
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }

    /// Check if the stored recipient matches the presented email.
    /// Comparison is case-insensitive on the whole address.
    pub fn is_for(&self, email: &str) -> bool {
        self.tenant_email.eq_ignore_ascii_case(email)
    }

    /// A verifier resolves this invitation only while it is pending,
    /// unexpired, and addressed to the presented email.
    pub fn is_verifiable_by(&self, email: &str) -> bool {
        self.is_pending() && !self.is_expired() && self.is_for(email)
    }

    /// Transition to accepted
    pub fn accept(&mut self) {
        self.status = InvitationStatus::Accepted;
    }

    /// The shareable link embedding code and recipient email as query parameters
    pub fn share_link(&self, public_base_url: &str) -> String {
        format!(
            "{}/invitation?code={}&email={}",
            public_base_url.trim_end_matches('/'),
            self.code,
            self.tenant_email
        )
    }
}

/// Generate a random invitation code
pub fn generate_invitation_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const CODE_LEN: usize = 8;

    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Invitation {
        Invitation::new(
            Snowflake::new(1),
            "abc12345".to_string(),
            Snowflake::new(10),
            Snowflake::new(20),
            "Nina Tenant".to_string(),
            "nina@example.com".to_string(),
            "1".to_string(),
            1000,
            7,
        )
    }

    #[test]
    fn test_new_invitation_is_pending() {
        let invitation = sample();
        assert!(invitation.is_pending());
        assert!(!invitation.is_expired());
        assert_eq!(
            invitation.expires_at - invitation.created_at,
            Duration::days(7)
        );
    }

    #[test]
    fn test_verifiable_only_for_matching_email() {
        let invitation = sample();
        assert!(invitation.is_verifiable_by("nina@example.com"));
        assert!(invitation.is_verifiable_by("NINA@EXAMPLE.COM"));
        assert!(!invitation.is_verifiable_by("other@example.com"));
    }

    #[test]
    fn test_accepted_invitation_not_verifiable() {
        let mut invitation = sample();
        invitation.accept();
        assert_eq!(invitation.status, InvitationStatus::Accepted);
        assert!(!invitation.is_verifiable_by("nina@example.com"));
    }

    #[test]
    fn test_expired_invitation_not_verifiable() {
        let mut invitation = sample();
        invitation.expires_at = Utc::now() - Duration::hours(1);
        assert!(invitation.is_expired());
        assert!(!invitation.is_verifiable_by("nina@example.com"));
    }

    #[test]
    fn test_share_link_embeds_code_and_email() {
        let invitation = sample();
        let link = invitation.share_link("https://app.bemyguest.example/");
        assert_eq!(
            link,
            "https://app.bemyguest.example/invitation?code=abc12345&email=nina@example.com"
        );
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            InvitationStatus::Pending,
            InvitationStatus::Accepted,
            InvitationStatus::Expired,
        ] {
            assert_eq!(status.as_str().parse::<InvitationStatus>().unwrap(), status);
        }
        assert!("revoked".parse::<InvitationStatus>().is_err());
    }

    #[test]
    fn test_generate_invitation_code() {
        let code1 = generate_invitation_code();
        let code2 = generate_invitation_code();

        assert_eq!(code1.len(), 8);
        assert_eq!(code2.len(), 8);
        assert!(code1.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
