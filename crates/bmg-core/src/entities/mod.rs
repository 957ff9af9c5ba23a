//! Domain entities - core business objects

mod invitation;
mod issue;
mod landlord;
mod message;
mod payment;
mod plan;
mod property;
mod tenant;
mod user;

pub use invitation::{generate_invitation_code, Invitation, InvitationStatus};
pub use issue::{IssuePriority, IssueStatus, MaintenanceIssue};
pub use landlord::LandlordDetails;
pub use message::Message;
pub use payment::ManualPayment;
pub use plan::SubscriptionPlan;
pub use property::{Property, PropertyStatus};
pub use tenant::{Tenant, TenantStatus};
pub use user::{User, UserRole};
