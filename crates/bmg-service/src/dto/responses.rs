//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email and phone)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public user response (limited fields, shown to conversation partners)
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// ============================================================================
// Property Responses
// ============================================================================

/// Property response
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub units: i32,
    pub rent_amount: i64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Invitation Responses
// ============================================================================

/// Invitation response returned to the issuing landlord
#[derive(Debug, Clone, Serialize)]
pub struct InvitationResponse {
    pub id: String,
    pub invitation_code: String,
    pub property_id: String,
    pub tenant_name: String,
    pub tenant_email: String,
    pub unit_number: String,
    pub rent_amount: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Shareable link embedding the code and recipient email
    pub share_link: String,
}

/// Invitation details shown to the invited tenant on the landing page
#[derive(Debug, Clone, Serialize)]
pub struct InvitationDetailsResponse {
    pub invitation_code: String,
    pub tenant_name: String,
    pub tenant_email: String,
    pub property_name: String,
    pub property_address: String,
    pub landlord_name: String,
    pub unit_number: String,
    pub rent_amount: i64,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Tenant Responses
// ============================================================================

/// Tenant record response
#[derive(Debug, Clone, Serialize)]
pub struct TenantResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub property_id: String,
    pub landlord_id: String,
    pub unit_number: String,
    pub rent_amount: i64,
    pub move_in_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Payment Responses
// ============================================================================

/// Manual payment response
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    pub amount: i64,
    pub payment_type: String,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Issue Responses
// ============================================================================

/// Maintenance issue response
#[derive(Debug, Clone, Serialize)]
pub struct IssueResponse {
    pub id: String,
    pub reporter_id: String,
    pub property_id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Landlord Details Responses
// ============================================================================

/// Landlord business details response
#[derive(Debug, Clone, Serialize)]
pub struct LandlordDetailsResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_iban: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Billing Responses
// ============================================================================

/// Subscription plan response
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    pub name: String,
    pub price_monthly: i64,
    pub features: Vec<String>,
    pub highlighted: bool,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Landlord dashboard summary
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub property_count: i64,
    pub occupied_count: i64,
    pub vacant_count: i64,
    pub active_tenant_count: i64,
    pub open_issue_count: i64,
    /// Sum of payments recorded in the current calendar month
    pub month_payment_total: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            database,
            cache,
        }
    }
}
