//! Authentication service
//!
//! Handles landlord registration, login, token refresh, and logout.
//! Tenant accounts are created through invitation acceptance instead
//! (see `InvitationService`).

use bmg_cache::RefreshTokenData;
use bmg_common::auth::{hash_password, validate_password_strength, verify_password};
use bmg_core::entities::{User, UserRole};
use bmg_core::Snowflake;
use tracing::{info, instrument, warn};

use uuid::Uuid;

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new landlord account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let user_id = self.ctx.generate_id();
        let mut user = User::new(
            user_id,
            request.full_name,
            request.email,
            UserRole::Landlord,
        );
        user.phone = request.phone;

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "Landlord registered successfully");

        self.issue_session(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(bmg_common::AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(bmg_common::AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(bmg_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_session(&user).await
    }

    /// Refresh access token using refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // Validate refresh token exists in Redis
        let refresh_data = self
            .ctx
            .refresh_token_store()
            .validate(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(bmg_common::AppError::InvalidToken))?;

        // Get user
        let user = self
            .ctx
            .user_repo()
            .find_by_id(refresh_data.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", refresh_data.user_id.to_string()))?;

        // Revoke old refresh token
        self.ctx
            .refresh_token_store()
            .revoke(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_session(&user).await
    }

    /// Logout user by revoking refresh token
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Snowflake,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            // Revoke specific refresh token
            self.ctx
                .refresh_token_store()
                .revoke(&token)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        } else {
            // Revoke all refresh tokens for user
            self.ctx
                .refresh_token_store()
                .revoke_all_for_user(user_id)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Generate a token pair for a user and record the refresh token
    pub(crate) async fn issue_session(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let session_id = Uuid::new_v4().to_string();
        let refresh_data = RefreshTokenData::new(user.id, session_id);
        self.ctx
            .refresh_token_store()
            .store(&token_pair.refresh_token, &refresh_data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end by the integration test crate.
}
