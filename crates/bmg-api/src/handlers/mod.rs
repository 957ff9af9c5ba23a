//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod billing;
pub mod dashboard;
pub mod health;
pub mod invitations;
pub mod issues;
pub mod landlords;
pub mod messages;
pub mod payments;
pub mod properties;
pub mod tenants;
pub mod users;

use crate::response::ApiError;
use bmg_core::Snowflake;

/// Parse a Snowflake ID from a path parameter
pub(crate) fn parse_path_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}
