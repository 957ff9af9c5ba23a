//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use bmg_core::entities::{
    Invitation, LandlordDetails, MaintenanceIssue, ManualPayment, Message, Property,
    SubscriptionPlan, Tenant, User,
};

use super::responses::{
    CurrentUserResponse, InvitationDetailsResponse, IssueResponse, LandlordDetailsResponse,
    MessageResponse, PaymentResponse, PlanResponse, PropertyResponse, PublicUserResponse,
    TenantResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            phone: user.phone.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name.clone(),
            role: user.role.as_str().to_string(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

// ============================================================================
// Property Mappers
// ============================================================================

impl From<&Property> for PropertyResponse {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            owner_id: property.owner_id.to_string(),
            name: property.name.clone(),
            address: property.address.clone(),
            units: property.units,
            rent_amount: property.rent_amount,
            status: property.status.as_str().to_string(),
            image_url: property.image_url.clone(),
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self::from(&property)
    }
}

// ============================================================================
// Invitation Mappers
// ============================================================================

/// Invitation joined with the entities its landing page displays
pub struct InvitationWithDetails {
    pub invitation: Invitation,
    pub property: Property,
    pub landlord: User,
}

impl From<InvitationWithDetails> for InvitationDetailsResponse {
    fn from(details: InvitationWithDetails) -> Self {
        let InvitationWithDetails {
            invitation,
            property,
            landlord,
        } = details;
        Self {
            invitation_code: invitation.code,
            tenant_name: invitation.tenant_name,
            tenant_email: invitation.tenant_email,
            property_name: property.name,
            property_address: property.address,
            landlord_name: landlord.full_name,
            unit_number: invitation.unit_number,
            rent_amount: invitation.rent_amount,
            expires_at: invitation.expires_at,
        }
    }
}

// ============================================================================
// Tenant Mappers
// ============================================================================

impl From<&Tenant> for TenantResponse {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id.to_string(),
            user_id: tenant.user_id.map(|id| id.to_string()),
            property_id: tenant.property_id.to_string(),
            landlord_id: tenant.landlord_id.to_string(),
            unit_number: tenant.unit_number.clone(),
            rent_amount: tenant.rent_amount,
            move_in_date: tenant.move_in_date,
            lease_end_date: tenant.lease_end_date,
            status: tenant.status.as_str().to_string(),
            created_at: tenant.created_at,
        }
    }
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        Self::from(&tenant)
    }
}

// ============================================================================
// Payment Mappers
// ============================================================================

impl From<&ManualPayment> for PaymentResponse {
    fn from(payment: &ManualPayment) -> Self {
        Self {
            id: payment.id.to_string(),
            user_id: payment.user_id.to_string(),
            property_id: payment.property_id.map(|id| id.to_string()),
            amount: payment.amount,
            payment_type: payment.payment_type.clone(),
            payment_method: payment.payment_method.clone(),
            payment_date: payment.payment_date,
            description: payment.description.clone(),
            created_at: payment.created_at,
        }
    }
}

impl From<ManualPayment> for PaymentResponse {
    fn from(payment: ManualPayment) -> Self {
        Self::from(&payment)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            recipient_id: message.recipient_id.to_string(),
            body: message.body.clone(),
            read: message.read,
            created_at: message.created_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Issue Mappers
// ============================================================================

impl From<&MaintenanceIssue> for IssueResponse {
    fn from(issue: &MaintenanceIssue) -> Self {
        Self {
            id: issue.id.to_string(),
            reporter_id: issue.reporter_id.to_string(),
            property_id: issue.property_id.to_string(),
            title: issue.title.clone(),
            description: issue.description.clone(),
            priority: issue.priority.as_str().to_string(),
            status: issue.status.as_str().to_string(),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}

impl From<MaintenanceIssue> for IssueResponse {
    fn from(issue: MaintenanceIssue) -> Self {
        Self::from(&issue)
    }
}

// ============================================================================
// Landlord Details Mappers
// ============================================================================

impl From<&LandlordDetails> for LandlordDetailsResponse {
    fn from(details: &LandlordDetails) -> Self {
        Self {
            user_id: details.user_id.to_string(),
            company_name: details.company_name.clone(),
            business_address: details.business_address.clone(),
            tax_id: details.tax_id.clone(),
            payout_iban: details.payout_iban.clone(),
            updated_at: details.updated_at,
        }
    }
}

// ============================================================================
// Plan Mappers
// ============================================================================

impl From<&SubscriptionPlan> for PlanResponse {
    fn from(plan: &SubscriptionPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name.clone(),
            price_monthly: plan.price_monthly,
            features: plan.features.clone(),
            highlighted: plan.highlighted,
        }
    }
}

impl From<SubscriptionPlan> for PlanResponse {
    fn from(plan: SubscriptionPlan) -> Self {
        Self::from(&plan)
    }
}
