//! User service
//!
//! Handles profile reads and updates for the settings page.

use bmg_common::auth::{hash_password, validate_password_strength, verify_password};
use bmg_core::Snowflake;
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{ChangePasswordRequest, CurrentUserResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Update current user profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut changed = false;

        if let Some(full_name) = request.full_name {
            if full_name != user.full_name {
                user.full_name = full_name;
                changed = true;
            }
        }

        if let Some(phone) = request.phone {
            user.phone = Some(phone);
            changed = true;
        }

        if let Some(avatar_url) = request.avatar_url {
            user.avatar_url = Some(avatar_url);
            changed = true;
        }

        if changed {
            user.updated_at = Utc::now();
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(CurrentUserResponse::from(&user))
    }

    /// Change the current user's password, verifying the old one first
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Snowflake,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let ok = verify_password(&request.current_password, &current_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !ok {
            return Err(ServiceError::App(bmg_common::AppError::InvalidCredentials));
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx.user_repo().update_password(user_id, &new_hash).await?;

        info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
