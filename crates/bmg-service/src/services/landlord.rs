//! Landlord details service
//!
//! Fetch and upsert a landlord's business details record.

use bmg_core::entities::LandlordDetails;
use bmg_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{LandlordDetailsResponse, UpsertLandlordDetailsRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Landlord details service
pub struct LandlordService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LandlordService<'a> {
    /// Create a new LandlordService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the caller's business details
    #[instrument(skip(self))]
    pub async fn get_details(&self, user_id: Snowflake) -> ServiceResult<LandlordDetailsResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service.require_landlord(user_id).await?;

        let details = self
            .ctx
            .landlord_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::LandlordDetailsNotFound)?;

        Ok(LandlordDetailsResponse::from(&details))
    }

    /// Insert or update the caller's business details
    #[instrument(skip(self, request))]
    pub async fn upsert_details(
        &self,
        user_id: Snowflake,
        request: UpsertLandlordDetailsRequest,
    ) -> ServiceResult<LandlordDetailsResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service.require_landlord(user_id).await?;

        let mut details = self
            .ctx
            .landlord_repo()
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| LandlordDetails::new(user_id));

        details.company_name = request.company_name;
        details.business_address = request.business_address;
        details.tax_id = request.tax_id;
        details.payout_iban = request.payout_iban;
        details.updated_at = Utc::now();

        self.ctx.landlord_repo().upsert(&details).await?;

        info!(user_id = %user_id, "Landlord details saved");

        Ok(LandlordDetailsResponse::from(&details))
    }
}
