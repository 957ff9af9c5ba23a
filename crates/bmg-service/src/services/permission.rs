//! Permission service
//!
//! Role and ownership checks shared by the resource services. Ownership is
//! always enforced here, server-side - the client's filters are advisory only.

use bmg_core::entities::{Property, User, UserRole};
use bmg_core::{DomainError, Snowflake};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the user and require a specific role
    #[instrument(skip(self))]
    pub async fn require_role(&self, user_id: Snowflake, role: UserRole) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if user.role != role {
            return Err(DomainError::RoleRequired(role.as_str()).into());
        }

        Ok(user)
    }

    /// Shorthand for `require_role(user_id, UserRole::Landlord)`
    pub async fn require_landlord(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.require_role(user_id, UserRole::Landlord).await
    }

    /// Fetch a property and require that `user_id` owns it
    #[instrument(skip(self))]
    pub async fn require_property_owner(
        &self,
        property_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Property> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property", property_id.to_string()))?;

        if !property.is_owned_by(user_id) {
            return Err(DomainError::NotPropertyOwner.into());
        }

        Ok(property)
    }

    /// Check whether a user may reference a property: owners always can,
    /// tenants can when their tenancy is on that property.
    #[instrument(skip(self))]
    pub async fn can_reference_property(
        &self,
        property_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<bool> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property", property_id.to_string()))?;

        if property.is_owned_by(user_id) {
            return Ok(true);
        }

        let tenancy = self.ctx.tenant_repo().find_by_user(user_id).await?;
        Ok(tenancy.is_some_and(|t| t.property_id == property_id))
    }
}
