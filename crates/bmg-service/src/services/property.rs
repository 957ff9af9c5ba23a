//! Property service
//!
//! Handles property listing CRUD. Every operation is scoped to the
//! authenticated owner; lists are fetched in full per owner.

use bmg_core::entities::Property;
use bmg_core::Snowflake;
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Property service
pub struct PropertyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PropertyService<'a> {
    /// Create a new PropertyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new property
    #[instrument(skip(self, request))]
    pub async fn create_property(
        &self,
        owner_id: Snowflake,
        request: CreatePropertyRequest,
    ) -> ServiceResult<PropertyResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service.require_landlord(owner_id).await?;

        let property = Property::new(
            self.ctx.generate_id(),
            owner_id,
            request.name,
            request.address,
            request.units,
            request.rent_amount,
        )
        .with_image_url(request.image_url);

        self.ctx.property_repo().create(&property).await?;

        info!(property_id = %property.id, owner_id = %owner_id, "Property created");

        Ok(PropertyResponse::from(property))
    }

    /// List all properties owned by the caller
    #[instrument(skip(self))]
    pub async fn list_properties(&self, owner_id: Snowflake) -> ServiceResult<Vec<PropertyResponse>> {
        let properties = self.ctx.property_repo().find_by_owner(owner_id).await?;

        Ok(properties.iter().map(PropertyResponse::from).collect())
    }

    /// Get a property by ID (owner only)
    #[instrument(skip(self))]
    pub async fn get_property(
        &self,
        property_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<PropertyResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let property = permission_service
            .require_property_owner(property_id, user_id)
            .await?;

        Ok(PropertyResponse::from(property))
    }

    /// Update a property (owner only)
    #[instrument(skip(self, request))]
    pub async fn update_property(
        &self,
        property_id: Snowflake,
        user_id: Snowflake,
        request: UpdatePropertyRequest,
    ) -> ServiceResult<PropertyResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let mut property = permission_service
            .require_property_owner(property_id, user_id)
            .await?;

        if let Some(name) = request.name {
            property.name = name;
        }
        if let Some(address) = request.address {
            property.address = address;
        }
        if let Some(units) = request.units {
            property.units = units;
        }
        if let Some(rent_amount) = request.rent_amount {
            property.rent_amount = rent_amount;
        }
        if let Some(status) = request.status {
            property.status = status
                .parse()
                .map_err(|e: String| ServiceError::validation(e))?;
        }
        if let Some(image_url) = request.image_url {
            property.image_url = Some(image_url);
        }
        property.updated_at = Utc::now();

        self.ctx.property_repo().update(&property).await?;

        info!(property_id = %property_id, "Property updated");

        Ok(PropertyResponse::from(property))
    }

    /// Delete a property (owner only)
    #[instrument(skip(self))]
    pub async fn delete_property(
        &self,
        property_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .require_property_owner(property_id, user_id)
            .await?;

        self.ctx.property_repo().delete(property_id).await?;

        info!(property_id = %property_id, user_id = %user_id, "Property deleted");

        Ok(())
    }
}
