//! Data transfer objects
//!
//! Request DTOs (`Deserialize` + `Validate`), response DTOs (`Serialize`),
//! and entity → DTO mappers.

mod mappers;
mod requests;
mod responses;

pub use mappers::InvitationWithDetails;
pub use requests::*;
pub use responses::*;
