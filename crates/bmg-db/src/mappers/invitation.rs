//! Invitation entity <-> model mapper

use bmg_core::entities::{Invitation, InvitationStatus};
use bmg_core::value_objects::Snowflake;

use crate::models::InvitationModel;

/// Convert InvitationModel to Invitation entity
impl From<InvitationModel> for Invitation {
    fn from(model: InvitationModel) -> Self {
        Invitation {
            id: Snowflake::new(model.id),
            code: model.invitation_code,
            landlord_id: Snowflake::new(model.landlord_id),
            property_id: Snowflake::new(model.property_id),
            tenant_name: model.tenant_name,
            tenant_email: model.tenant_email,
            unit_number: model.unit_number,
            rent_amount: model.rent_amount,
            status: model.status.parse().unwrap_or(InvitationStatus::Pending),
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}

/// Convert Invitation entity reference to values for database insertion
pub struct InvitationInsert<'a> {
    pub id: i64,
    pub invitation_code: &'a str,
    pub landlord_id: i64,
    pub property_id: i64,
    pub tenant_name: &'a str,
    pub tenant_email: &'a str,
    pub unit_number: &'a str,
    pub rent_amount: i64,
    pub status: &'static str,
}

impl<'a> InvitationInsert<'a> {
    pub fn new(invitation: &'a Invitation) -> Self {
        Self {
            id: invitation.id.into_inner(),
            invitation_code: &invitation.code,
            landlord_id: invitation.landlord_id.into_inner(),
            property_id: invitation.property_id.into_inner(),
            tenant_name: &invitation.tenant_name,
            tenant_email: &invitation.tenant_email,
            unit_number: &invitation.unit_number,
            rent_amount: invitation.rent_amount,
            status: invitation.status.as_str(),
        }
    }
}
