//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    Invitation, IssueStatus, LandlordDetails, MaintenanceIssue, ManualPayment, Message, Property,
    SubscriptionPlan, Tenant, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user's profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Property Repository
// ============================================================================

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find property by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>>;

    /// List all properties owned by a landlord (full fetch, newest first)
    async fn find_by_owner(&self, owner_id: Snowflake) -> RepoResult<Vec<Property>>;

    /// Create a new property
    async fn create(&self, property: &Property) -> RepoResult<()>;

    /// Update an existing property
    async fn update(&self, property: &Property) -> RepoResult<()>;

    /// Delete a property
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count properties by owner, optionally restricted to a status
    async fn count_by_owner(
        &self,
        owner_id: Snowflake,
        status: Option<&str>,
    ) -> RepoResult<i64>;
}

// ============================================================================
// Invitation Repository
// ============================================================================

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Find invitation by code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Invitation>>;

    /// List all invitations issued by a landlord (newest first)
    async fn find_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<Vec<Invitation>>;

    /// Create a new invitation
    async fn create(&self, invitation: &Invitation) -> RepoResult<()>;

    /// Flip a pending invitation to accepted. Returns `false` when no
    /// pending row matched, which is how a second acceptance is rejected.
    async fn mark_accepted(&self, code: &str) -> RepoResult<bool>;

    /// Delete an invitation
    async fn delete(&self, code: &str) -> RepoResult<()>;
}

// ============================================================================
// Tenant Repository
// ============================================================================

#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Find tenant record by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tenant>>;

    /// List all tenant records managed by a landlord
    async fn find_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<Vec<Tenant>>;

    /// Find the tenancy attached to a user account
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Tenant>>;

    /// Find an unlinked tenant record for a property unit, if the landlord
    /// pre-created one before inviting
    async fn find_unlinked(
        &self,
        property_id: Snowflake,
        unit_number: &str,
    ) -> RepoResult<Option<Tenant>>;

    /// Create a new tenant record
    async fn create(&self, tenant: &Tenant) -> RepoResult<()>;

    /// Update an existing tenant record
    async fn update(&self, tenant: &Tenant) -> RepoResult<()>;

    /// Attach a user account and activate the record
    async fn link_user(&self, id: Snowflake, user_id: Snowflake) -> RepoResult<()>;

    /// Delete a tenant record
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count active tenant records for a landlord
    async fn count_active_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Payment Repository
// ============================================================================

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find payment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ManualPayment>>;

    /// List payments recorded by a user, optionally filtered by property
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        property_id: Option<Snowflake>,
    ) -> RepoResult<Vec<ManualPayment>>;

    /// Create a new payment entry
    async fn create(&self, payment: &ManualPayment) -> RepoResult<()>;

    /// Delete a payment entry
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Sum of amounts recorded by a user within a date range (inclusive start,
    /// exclusive end)
    async fn sum_recorded_between(
        &self,
        user_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<i64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// Fetch the two-party conversation in chronological order
    async fn conversation(&self, a: Snowflake, b: Snowflake) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Mark a received message read. Returns `false` when no matching row.
    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Issue Repository
// ============================================================================

#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Find issue by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<MaintenanceIssue>>;

    /// List issues filed by a reporter
    async fn find_by_reporter(&self, reporter_id: Snowflake) -> RepoResult<Vec<MaintenanceIssue>>;

    /// List issues across all properties owned by a landlord
    async fn find_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<Vec<MaintenanceIssue>>;

    /// Create a new issue
    async fn create(&self, issue: &MaintenanceIssue) -> RepoResult<()>;

    /// Update an issue's status
    async fn update_status(&self, id: Snowflake, status: IssueStatus) -> RepoResult<()>;

    /// Count unresolved issues across a landlord's properties
    async fn count_open_by_landlord(&self, landlord_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Landlord Details Repository
// ============================================================================

#[async_trait]
pub trait LandlordDetailsRepository: Send + Sync {
    /// Fetch a landlord's business details
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<LandlordDetails>>;

    /// Insert or update the details row for a landlord
    async fn upsert(&self, details: &LandlordDetails) -> RepoResult<()>;
}

// ============================================================================
// Plan Repository
// ============================================================================

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// List all subscription plans ordered by monthly price
    async fn list_all(&self) -> RepoResult<Vec<SubscriptionPlan>>;
}
