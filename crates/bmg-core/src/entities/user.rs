//! User entity - a landlord or tenant account

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Snowflake;

/// Account role, controls which dashboard views and operations are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Landlord,
    Tenant,
}

impl UserRole {
    /// Stable string form used in the database and in JSON
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Tenant => "tenant",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landlord" => Ok(Self::Landlord),
            "tenant" => Ok(Self::Tenant),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

/// User entity representing an account on the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, full_name: String, email: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            full_name,
            email,
            role,
            phone: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this account can manage properties
    #[inline]
    pub fn is_landlord(&self) -> bool {
        self.role == UserRole::Landlord
    }

    #[inline]
    pub fn is_tenant(&self) -> bool {
        self.role == UserRole::Tenant
    }

    /// Update the display name
    pub fn set_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
        self.updated_at = Utc::now();
    }

    /// Update the contact phone number
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
        self.updated_at = Utc::now();
    }

    /// Update the avatar URL
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        assert_eq!("landlord".parse::<UserRole>().unwrap(), UserRole::Landlord);
        assert_eq!("tenant".parse::<UserRole>().unwrap(), UserRole::Tenant);
        assert_eq!(UserRole::Landlord.as_str(), "landlord");
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_user_role_checks() {
        let landlord = User::new(
            Snowflake::new(1),
            "Ada Landlord".to_string(),
            "ada@example.com".to_string(),
            UserRole::Landlord,
        );
        assert!(landlord.is_landlord());
        assert!(!landlord.is_tenant());
    }

    #[test]
    fn test_set_full_name_touches_updated_at() {
        let mut user = User::new(
            Snowflake::new(1),
            "Old Name".to_string(),
            "x@example.com".to_string(),
            UserRole::Tenant,
        );
        let before = user.updated_at;
        user.set_full_name("New Name".to_string());
        assert_eq!(user.full_name, "New Name");
        assert!(user.updated_at >= before);
    }
}
