//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Landlord registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            full_name: format!("Test Landlord {suffix}"),
            email: format!("landlord{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            phone: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Create property request
#[derive(Debug, Serialize)]
pub struct CreatePropertyRequest {
    pub name: String,
    pub address: String,
    pub units: i32,
    pub rent_amount: i64,
    pub image_url: Option<String>,
}

impl CreatePropertyRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Property {suffix}"),
            address: format!("{suffix} Test Street"),
            units: 2,
            rent_amount: 1000,
            image_url: None,
        }
    }
}

/// Property response
#[derive(Debug, Deserialize)]
pub struct PropertyResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub units: i32,
    pub rent_amount: i64,
    pub status: String,
}

/// Create invitation request
#[derive(Debug, Serialize)]
pub struct CreateInvitationRequest {
    pub tenant_name: String,
    pub tenant_email: String,
    pub property_id: String,
    pub unit_number: String,
    pub rent_amount: i64,
}

impl CreateInvitationRequest {
    pub fn unique(property_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            tenant_name: format!("Test Tenant {suffix}"),
            tenant_email: format!("tenant{suffix}@example.com"),
            property_id: property_id.to_string(),
            unit_number: "1".to_string(),
            rent_amount: 1000,
        }
    }
}

/// Invitation response
#[derive(Debug, Deserialize)]
pub struct InvitationResponse {
    pub id: String,
    pub invitation_code: String,
    pub tenant_email: String,
    pub unit_number: String,
    pub rent_amount: i64,
    pub status: String,
    pub share_link: String,
}

/// Invitation details shown on the landing page
#[derive(Debug, Deserialize)]
pub struct InvitationDetailsResponse {
    pub invitation_code: String,
    pub property_name: String,
    pub landlord_name: String,
    pub unit_number: String,
    pub rent_amount: i64,
}

/// Accept invitation request
#[derive(Debug, Serialize)]
pub struct AcceptInvitationRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Subscription plan response
#[derive(Debug, Deserialize)]
pub struct PlanResponse {
    pub id: String,
    pub name: String,
    pub price_monthly: i64,
    pub features: Vec<String>,
    pub highlighted: bool,
}
