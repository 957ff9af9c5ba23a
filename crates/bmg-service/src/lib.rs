//! # bmg-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service API surface for handlers
pub use dto::*;
pub use services::{
    AuthService, BillingService, DashboardService, InvitationService, IssueService,
    LandlordService, MessageService, PaymentService, PermissionService, PropertyService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TenantService,
    UserService,
};
