//! Tenant service
//!
//! Handles tenant record CRUD from the landlord panel, plus the tenant's own
//! view of their tenancy.

use bmg_core::entities::Tenant;
use bmg_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{CreateTenantRequest, TenantResponse, UpdateTenantRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::invitation::parse_id;
use super::permission::PermissionService;

/// Tenant service
pub struct TenantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TenantService<'a> {
    /// Create a new TenantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a tenant record (manual entry, no account attached)
    #[instrument(skip(self, request))]
    pub async fn create_tenant(
        &self,
        landlord_id: Snowflake,
        request: CreateTenantRequest,
    ) -> ServiceResult<TenantResponse> {
        let property_id = parse_id(&request.property_id, "property_id")?;

        let permission_service = PermissionService::new(self.ctx);
        let property = permission_service
            .require_property_owner(property_id, landlord_id)
            .await?;

        if !property.contains_unit(&request.unit_number) {
            return Err(DomainError::UnitOutOfRange {
                unit: request.unit_number,
            }
            .into());
        }

        let tenant = Tenant::new(
            self.ctx.generate_id(),
            property_id,
            landlord_id,
            request.unit_number,
            request.rent_amount,
            request.move_in_date,
        )
        .with_lease_end_date(request.lease_end_date);

        self.ctx.tenant_repo().create(&tenant).await?;

        info!(tenant_id = %tenant.id, property_id = %property_id, "Tenant record created");

        Ok(TenantResponse::from(tenant))
    }

    /// List all tenant records managed by the caller
    #[instrument(skip(self))]
    pub async fn list_tenants(&self, landlord_id: Snowflake) -> ServiceResult<Vec<TenantResponse>> {
        let tenants = self.ctx.tenant_repo().find_by_landlord(landlord_id).await?;

        Ok(tenants.iter().map(TenantResponse::from).collect())
    }

    /// Get a tenant record by ID (managing landlord only)
    #[instrument(skip(self))]
    pub async fn get_tenant(
        &self,
        tenant_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<TenantResponse> {
        let tenant = self.owned_tenant(tenant_id, user_id).await?;
        Ok(TenantResponse::from(tenant))
    }

    /// Get the tenancy attached to the calling account
    #[instrument(skip(self))]
    pub async fn get_own_tenancy(&self, user_id: Snowflake) -> ServiceResult<TenantResponse> {
        let tenant = self
            .ctx
            .tenant_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tenancy", user_id.to_string()))?;

        Ok(TenantResponse::from(tenant))
    }

    /// Update a tenant record (managing landlord only)
    #[instrument(skip(self, request))]
    pub async fn update_tenant(
        &self,
        tenant_id: Snowflake,
        user_id: Snowflake,
        request: UpdateTenantRequest,
    ) -> ServiceResult<TenantResponse> {
        let mut tenant = self.owned_tenant(tenant_id, user_id).await?;

        if let Some(unit_number) = request.unit_number {
            tenant.unit_number = unit_number;
        }
        if let Some(rent_amount) = request.rent_amount {
            tenant.rent_amount = rent_amount;
        }
        if let Some(move_in_date) = request.move_in_date {
            tenant.move_in_date = move_in_date;
        }
        if let Some(lease_end_date) = request.lease_end_date {
            tenant.lease_end_date = Some(lease_end_date);
        }
        if let Some(status) = request.status {
            tenant.status = status
                .parse()
                .map_err(|e: String| ServiceError::validation(e))?;
        }
        tenant.updated_at = Utc::now();

        self.ctx.tenant_repo().update(&tenant).await?;

        info!(tenant_id = %tenant_id, "Tenant record updated");

        Ok(TenantResponse::from(tenant))
    }

    /// Delete a tenant record (managing landlord only)
    #[instrument(skip(self))]
    pub async fn delete_tenant(&self, tenant_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        self.owned_tenant(tenant_id, user_id).await?;

        self.ctx.tenant_repo().delete(tenant_id).await?;

        info!(tenant_id = %tenant_id, user_id = %user_id, "Tenant record deleted");

        Ok(())
    }

    /// Fetch a tenant record and require that `user_id` is its landlord
    async fn owned_tenant(&self, tenant_id: Snowflake, user_id: Snowflake) -> ServiceResult<Tenant> {
        let tenant = self
            .ctx
            .tenant_repo()
            .find_by_id(tenant_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tenant", tenant_id.to_string()))?;

        if tenant.landlord_id != user_id {
            return Err(DomainError::NotRecordOwner.into());
        }

        Ok(tenant)
    }
}
