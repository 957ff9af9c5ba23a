//! Repository traits

mod repositories;

pub use repositories::{
    InvitationRepository, IssueRepository, LandlordDetailsRepository, MessageRepository,
    PaymentRepository, PlanRepository, PropertyRepository, RepoResult, TenantRepository,
    UserRepository,
};
