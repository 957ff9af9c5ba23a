//! Error handling utilities for repositories

use bmg_core::error::DomainError;
use bmg_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "property not found" error
pub fn property_not_found(id: Snowflake) -> DomainError {
    DomainError::PropertyNotFound(id)
}

/// Create a "tenant not found" error
pub fn tenant_not_found(id: Snowflake) -> DomainError {
    DomainError::TenantNotFound(id)
}

/// Create a "payment not found" error
pub fn payment_not_found(id: Snowflake) -> DomainError {
    DomainError::PaymentNotFound(id)
}

/// Create an "issue not found" error
pub fn issue_not_found(id: Snowflake) -> DomainError {
    DomainError::IssueNotFound(id)
}

/// Create an "invitation not valid" error
pub fn invitation_not_found() -> DomainError {
    DomainError::InvitationNotFound
}
