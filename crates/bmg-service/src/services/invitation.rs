//! Invitation service
//!
//! Handles tenant invitation issuance, verification, acceptance, and
//! revocation. The invitation code is generated server-side; the resulting
//! link is shared out-of-band by the landlord.

use bmg_common::auth::{hash_password, validate_password_strength, verify_password};
use bmg_core::entities::{generate_invitation_code, Invitation, Tenant, User, UserRole};
use bmg_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{
    AcceptInvitationRequest, AuthResponse, CreateInvitationRequest, InvitationDetailsResponse,
    InvitationResponse, InvitationWithDetails,
};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// How many times to regenerate a colliding invitation code before giving up
const MAX_CODE_ATTEMPTS: u32 = 3;

/// Invitation service
pub struct InvitationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvitationService<'a> {
    /// Create a new InvitationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a new invitation for a property unit
    #[instrument(skip(self, request), fields(tenant_email = %request.tenant_email))]
    pub async fn create_invitation(
        &self,
        landlord_id: Snowflake,
        request: CreateInvitationRequest,
    ) -> ServiceResult<InvitationResponse> {
        let property_id = parse_id(&request.property_id, "property_id")?;

        // Only the owner of the property may invite tenants to it
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

        // Insert with a fresh code, regenerating on the rare collision
        let mut attempts = 0;
        let invitation = loop {
            let invitation = Invitation::new(
                self.ctx.generate_id(),
                generate_invitation_code(),
                landlord_id,
                property_id,
                request.tenant_name.clone(),
                request.tenant_email.to_lowercase(),
                request.unit_number.clone(),
                request.rent_amount,
                self.ctx.invitation_expiry_days(),
            );

            match self.ctx.invitation_repo().create(&invitation).await {
                Ok(()) => break invitation,
                Err(DomainError::InvitationCodeExists) if attempts < MAX_CODE_ATTEMPTS => {
                    attempts += 1;
                    warn!(attempts, "Invitation code collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        };

        info!(
            code = %invitation.code,
            property_id = %property_id,
            landlord_id = %landlord_id,
            "Invitation created"
        );

        Ok(self.to_response(invitation))
    }

    /// List all invitations issued by a landlord
    #[instrument(skip(self))]
    pub async fn list_invitations(
        &self,
        landlord_id: Snowflake,
    ) -> ServiceResult<Vec<InvitationResponse>> {
        let invitations = self.ctx.invitation_repo().find_by_landlord(landlord_id).await?;

        Ok(invitations
            .into_iter()
            .map(|invitation| self.to_response(invitation))
            .collect())
    }

    /// Verify an invitation by code and recipient email
    ///
    /// The three terminal failure states are distinguished: an unknown code or
    /// a mismatched email reads as "invitation not valid"; a matching
    /// invitation that was already accepted or has passed its expiry reports
    /// that state instead. There is no recovery path from any of them.
    #[instrument(skip(self))]
    pub async fn verify_invitation(
        &self,
        code: &str,
        email: &str,
    ) -> ServiceResult<InvitationDetailsResponse> {
        let invitation = self.lookup_for(code, email).await?;

        let property = self
            .ctx
            .property_repo()
            .find_by_id(invitation.property_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Invited property not found"))?;

        let landlord = self
            .ctx
            .user_repo()
            .find_by_id(invitation.landlord_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Inviting landlord not found"))?;

        Ok(InvitationDetailsResponse::from(InvitationWithDetails {
            invitation,
            property,
            landlord,
        }))
    }

    /// Accept an invitation: create (or link) the tenant account, attach the
    /// tenancy, and flip the invitation status.
    ///
    /// The steps are sequential repository calls, mirroring the client flow
    /// this replaces: account creation is not transactionally coupled to the
    /// status update. A crash in between leaves a pending invitation and an
    /// account, and the second attempt is rejected by the pending filter.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn accept_invitation(
        &self,
        code: &str,
        request: AcceptInvitationRequest,
    ) -> ServiceResult<AuthResponse> {
        let invitation = self.lookup_for(code, &request.email).await?;

        // Step 1: the authentication identity
        let user = match self.ctx.user_repo().find_by_email(&request.email).await? {
            Some(existing) => {
                // Link an existing account, but only with its own credentials
                let hash = self
                    .ctx
                    .user_repo()
                    .get_password_hash(existing.id)
                    .await?
                    .ok_or_else(|| ServiceError::internal("Account has no password"))?;
                let ok = verify_password(&request.password, &hash)
                    .map_err(|e| ServiceError::internal(e.to_string()))?;
                if !ok {
                    return Err(ServiceError::App(bmg_common::AppError::InvalidCredentials));
                }
                existing
            }
            None => {
                validate_password_strength(&request.password).map_err(ServiceError::from)?;
                let password_hash = hash_password(&request.password)
                    .map_err(|e| ServiceError::internal(e.to_string()))?;

                let user = User::new(
                    self.ctx.generate_id(),
                    request.full_name.clone(),
                    invitation.tenant_email.clone(),
                    UserRole::Tenant,
                );
                self.ctx.user_repo().create(&user, &password_hash).await?;
                info!(user_id = %user.id, "Tenant account created from invitation");
                user
            }
        };

        // Step 2: the tenancy row - link a pre-created record when one exists
        match self
            .ctx
            .tenant_repo()
            .find_unlinked(invitation.property_id, &invitation.unit_number)
            .await?
        {
            Some(tenant) => {
                self.ctx.tenant_repo().link_user(tenant.id, user.id).await?;
            }
            None => {
                let mut tenant = Tenant::new(
                    self.ctx.generate_id(),
                    invitation.property_id,
                    invitation.landlord_id,
                    invitation.unit_number.clone(),
                    invitation.rent_amount,
                    Utc::now().date_naive(),
                );
                tenant.link_user(user.id);
                self.ctx.tenant_repo().create(&tenant).await?;
            }
        }

        // Step 3: flip the invitation; the pending filter rejects a concurrent
        // second acceptance
        let flipped = self.ctx.invitation_repo().mark_accepted(&invitation.code).await?;
        if !flipped {
            return Err(DomainError::InvitationAlreadyUsed.into());
        }

        info!(
            code = %invitation.code,
            user_id = %user.id,
            property_id = %invitation.property_id,
            "Invitation accepted"
        );

        // Log the new tenant straight in
        AuthService::new(self.ctx).issue_session(&user).await
    }

    /// Revoke an invitation (issuing landlord only)
    #[instrument(skip(self))]
    pub async fn revoke_invitation(&self, code: &str, user_id: Snowflake) -> ServiceResult<()> {
        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_code(code)
            .await?
            .ok_or(ServiceError::Domain(DomainError::InvitationNotFound))?;

        if invitation.landlord_id != user_id {
            return Err(DomainError::NotRecordOwner.into());
        }

        self.ctx.invitation_repo().delete(code).await?;

        info!(code = %code, user_id = %user_id, "Invitation revoked");

        Ok(())
    }

    /// Resolve a pending, unexpired invitation addressed to `email`
    async fn lookup_for(&self, code: &str, email: &str) -> ServiceResult<Invitation> {
        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_code(code)
            .await?
            .ok_or(ServiceError::Domain(DomainError::InvitationNotFound))?;

        // A mismatched email reads the same as an unknown code
        if !invitation.is_for(email) {
            return Err(DomainError::InvitationNotFound.into());
        }

        if !invitation.is_pending() {
            return Err(DomainError::InvitationAlreadyUsed.into());
        }

        if invitation.is_expired() {
            return Err(DomainError::InvitationExpired.into());
        }

        Ok(invitation)
    }

    fn to_response(&self, invitation: Invitation) -> InvitationResponse {
        let share_link = invitation.share_link(self.ctx.public_base_url());
        InvitationResponse {
            id: invitation.id.to_string(),
            invitation_code: invitation.code,
            property_id: invitation.property_id.to_string(),
            tenant_name: invitation.tenant_name,
            tenant_email: invitation.tenant_email,
            unit_number: invitation.unit_number,
            rent_amount: invitation.rent_amount,
            status: invitation.status.as_str().to_string(),
            created_at: invitation.created_at,
            expires_at: invitation.expires_at,
            share_link,
        }
    }
}

/// Parse a Snowflake ID from its string form in a request body
pub(crate) fn parse_id(raw: &str, field: &str) -> ServiceResult<Snowflake> {
    raw.parse()
        .map_err(|_| ServiceError::validation(format!("Invalid {field}")))
}

#[cfg(test)]
mod tests {
    // Covered end to end by the integration test crate.
}
