//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Property not found: {0}")]
    PropertyNotFound(Snowflake),

    #[error("Tenant not found: {0}")]
    TenantNotFound(Snowflake),

    #[error("Payment not found: {0}")]
    PaymentNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Issue not found: {0}")]
    IssueNotFound(Snowflake),

    #[error("Landlord details not found")]
    LandlordDetailsNotFound,

    #[error("Invitation not valid")]
    InvitationNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unit {unit} does not exist on this property")]
    UnitOutOfRange { unit: String },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the property owner")]
    NotPropertyOwner,

    #[error("Not the owner of this record")]
    NotRecordOwner,

    #[error("Operation requires the {0} role")]
    RoleRequired(&'static str),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Invitation code already exists")]
    InvitationCodeExists,

    #[error("Tenant record already linked to an account")]
    TenantAlreadyLinked,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Invitation has expired")]
    InvitationExpired,

    #[error("Invitation has already been used")]
    InvitationAlreadyUsed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PropertyNotFound(_) => "UNKNOWN_PROPERTY",
            Self::TenantNotFound(_) => "UNKNOWN_TENANT",
            Self::PaymentNotFound(_) => "UNKNOWN_PAYMENT",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::IssueNotFound(_) => "UNKNOWN_ISSUE",
            Self::LandlordDetailsNotFound => "UNKNOWN_LANDLORD_DETAILS",
            Self::InvitationNotFound => "INVITATION_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::UnitOutOfRange { .. } => "UNIT_OUT_OF_RANGE",

            // Authorization
            Self::NotPropertyOwner => "NOT_PROPERTY_OWNER",
            Self::NotRecordOwner => "NOT_RECORD_OWNER",
            Self::RoleRequired(_) => "ROLE_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvitationCodeExists => "INVITATION_CODE_EXISTS",
            Self::TenantAlreadyLinked => "TENANT_ALREADY_LINKED",

            // Business Rules
            Self::InvitationExpired => "INVITATION_EXPIRED",
            Self::InvitationAlreadyUsed => "INVITATION_ALREADY_USED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PropertyNotFound(_)
                | Self::TenantNotFound(_)
                | Self::PaymentNotFound(_)
                | Self::MessageNotFound(_)
                | Self::IssueNotFound(_)
                | Self::LandlordDetailsNotFound
                | Self::InvitationNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::UnitOutOfRange { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotPropertyOwner | Self::NotRecordOwner | Self::RoleRequired(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::InvitationCodeExists | Self::TenantAlreadyLinked
        )
    }

    /// Check if this is a terminal invitation state (expired / already used).
    /// Mapped to 410 Gone at the API edge.
    pub fn is_invitation_terminal(&self) -> bool {
        matches!(self, Self::InvitationExpired | Self::InvitationAlreadyUsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::InvitationExpired;
        assert_eq!(err.code(), "INVITATION_EXPIRED");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PropertyNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::InvitationNotFound.is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotPropertyOwner.is_authorization());
        assert!(DomainError::RoleRequired("landlord").is_authorization());
        assert!(!DomainError::UserNotFound(Snowflake::new(1)).is_authorization());
    }

    #[test]
    fn test_invitation_terminal_states() {
        assert!(DomainError::InvitationExpired.is_invitation_terminal());
        assert!(DomainError::InvitationAlreadyUsed.is_invitation_terminal());
        assert!(!DomainError::InvitationNotFound.is_invitation_terminal());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvitationNotFound;
        assert_eq!(err.to_string(), "Invitation not valid");

        let err = DomainError::UnitOutOfRange {
            unit: "9".to_string(),
        };
        assert_eq!(err.to_string(), "Unit 9 does not exist on this property");
    }
}
