//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Landlord registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update current user profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 30, message = "Phone must be at most 30 characters"))]
    pub phone: Option<String>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// Property Requests
// ============================================================================

/// Create property request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 100, message = "Property name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: String,

    #[validate(range(min = 1, message = "A property has at least one unit"))]
    pub units: i32,

    #[validate(range(min = 0, message = "Rent cannot be negative"))]
    pub rent_amount: i64,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Update property request (all fields optional)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1, max = 100, message = "Property name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: Option<String>,

    #[validate(range(min = 1, message = "A property has at least one unit"))]
    pub units: Option<i32>,

    #[validate(range(min = 0, message = "Rent cannot be negative"))]
    pub rent_amount: Option<i64>,

    /// One of: vacant, occupied, maintenance
    pub status: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image_url: Option<String>,
}

// ============================================================================
// Tenant Requests
// ============================================================================

/// Create tenant record request (manual entry from the tenants panel)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTenantRequest {
    /// Property ID (Snowflake as string)
    pub property_id: String,

    #[validate(length(min = 1, max = 20, message = "Unit must be 1-20 characters"))]
    pub unit_number: String,

    #[validate(range(min = 0, message = "Rent cannot be negative"))]
    pub rent_amount: i64,

    pub move_in_date: NaiveDate,

    pub lease_end_date: Option<NaiveDate>,
}

/// Update tenant record request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTenantRequest {
    #[validate(length(min = 1, max = 20, message = "Unit must be 1-20 characters"))]
    pub unit_number: Option<String>,

    #[validate(range(min = 0, message = "Rent cannot be negative"))]
    pub rent_amount: Option<i64>,

    pub move_in_date: Option<NaiveDate>,

    pub lease_end_date: Option<NaiveDate>,

    /// One of: active, inactive, pending
    pub status: Option<String>,
}

// ============================================================================
// Invitation Requests
// ============================================================================

/// Issue invitation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvitationRequest {
    #[validate(length(min = 1, max = 100, message = "Tenant name must be 1-100 characters"))]
    pub tenant_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub tenant_email: String,

    /// Property ID (Snowflake as string)
    pub property_id: String,

    #[validate(length(min = 1, max = 20, message = "Unit must be 1-20 characters"))]
    pub unit_number: String,

    #[validate(range(min = 0, message = "Rent cannot be negative"))]
    pub rent_amount: i64,
}

/// Accept invitation request - collected by the multi-step signup form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AcceptInvitationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub full_name: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

// ============================================================================
// Payment Requests
// ============================================================================

/// Record manual payment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    /// Optional property ID (Snowflake as string)
    pub property_id: Option<String>,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount: i64,

    #[validate(length(min = 1, max = 40, message = "Payment type must be 1-40 characters"))]
    pub payment_type: String,

    #[validate(length(min = 1, max = 40, message = "Payment method must be 1-40 characters"))]
    pub payment_method: String,

    pub payment_date: NaiveDate,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Recipient user ID (Snowflake as string)
    pub recipient_id: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub body: String,
}

// ============================================================================
// Issue Requests
// ============================================================================

/// Report maintenance issue request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportIssueRequest {
    /// Property ID (Snowflake as string)
    pub property_id: String,

    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    /// One of: low, medium, high (defaults to medium)
    pub priority: Option<String>,
}

/// Update issue request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIssueRequest {
    /// One of: open, in_progress, resolved
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

// ============================================================================
// Landlord Details Requests
// ============================================================================

/// Upsert landlord business details request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertLandlordDetailsRequest {
    #[validate(length(max = 100, message = "Company name must be at most 100 characters"))]
    pub company_name: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub business_address: Option<String>,

    #[validate(length(max = 40, message = "Tax ID must be at most 40 characters"))]
    pub tax_id: Option<String>,

    #[validate(length(max = 40, message = "IBAN must be at most 40 characters"))]
    pub payout_iban: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            full_name: "Ada Landlord".to_string(),
            email: "ada@example.com".to_string(),
            password: "SecurePass1".to_string(),
            phone: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_create_property_requires_units() {
        let request = CreatePropertyRequest {
            name: "Casa A".to_string(),
            address: "X".to_string(),
            units: 0,
            rent_amount: 1000,
            image_url: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_record_payment_rejects_zero_amount() {
        let request = RecordPaymentRequest {
            property_id: None,
            amount: 0,
            payment_type: "rent".to_string(),
            payment_method: "cash".to_string(),
            payment_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            description: None,
        };
        assert!(request.validate().is_err());
    }
}
