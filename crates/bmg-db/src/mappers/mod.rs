//! Entity to model mappers
//!
//! This module provides conversions between domain entities (bmg-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod invitation;
mod issue;
mod landlord;
mod message;
mod payment;
mod plan;
mod property;
mod tenant;
mod user;

pub use invitation::InvitationInsert;
pub use issue::IssueInsert;
pub use payment::PaymentInsert;
pub use property::{PropertyInsert, PropertyUpdate};
pub use tenant::{TenantInsert, TenantUpdate};
pub use user::{UserInsert, UserUpdate};
