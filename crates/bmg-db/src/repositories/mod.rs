//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bmg-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod invitation;
mod issue;
mod landlord;
mod message;
mod payment;
mod plan;
mod property;
mod tenant;
mod user;

pub use invitation::PgInvitationRepository;
pub use issue::PgIssueRepository;
pub use landlord::PgLandlordDetailsRepository;
pub use message::PgMessageRepository;
pub use payment::PgPaymentRepository;
pub use plan::PgPlanRepository;
pub use property::PgPropertyRepository;
pub use tenant::PgTenantRepository;
pub use user::PgUserRepository;
