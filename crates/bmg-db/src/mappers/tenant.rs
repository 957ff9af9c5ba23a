//! Tenant entity <-> model mapper

use bmg_core::entities::{Tenant, TenantStatus};
use bmg_core::value_objects::Snowflake;

use crate::models::TenantModel;

/// Convert TenantModel to Tenant entity
impl From<TenantModel> for Tenant {
    fn from(model: TenantModel) -> Self {
        Tenant {
            id: Snowflake::new(model.id),
            user_id: model.user_id.map(Snowflake::new),
            property_id: Snowflake::new(model.property_id),
            landlord_id: Snowflake::new(model.landlord_id),
            unit_number: model.unit_number,
            rent_amount: model.rent_amount,
            move_in_date: model.move_in_date,
            lease_end_date: model.lease_end_date,
            status: model.status.parse().unwrap_or(TenantStatus::Pending),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Tenant entity reference to values for database insertion
pub struct TenantInsert<'a> {
    pub id: i64,
    pub user_id: Option<i64>,
    pub property_id: i64,
    pub landlord_id: i64,
    pub unit_number: &'a str,
    pub rent_amount: i64,
    pub move_in_date: chrono::NaiveDate,
    pub lease_end_date: Option<chrono::NaiveDate>,
    pub status: &'static str,
}

impl<'a> TenantInsert<'a> {
    pub fn new(tenant: &'a Tenant) -> Self {
        Self {
            id: tenant.id.into_inner(),
            user_id: tenant.user_id.map(Snowflake::into_inner),
            property_id: tenant.property_id.into_inner(),
            landlord_id: tenant.landlord_id.into_inner(),
            unit_number: &tenant.unit_number,
            rent_amount: tenant.rent_amount,
            move_in_date: tenant.move_in_date,
            lease_end_date: tenant.lease_end_date,
            status: tenant.status.as_str(),
        }
    }
}

/// Convert Tenant entity reference to values for database update
pub struct TenantUpdate<'a> {
    pub id: i64,
    pub unit_number: &'a str,
    pub rent_amount: i64,
    pub move_in_date: chrono::NaiveDate,
    pub lease_end_date: Option<chrono::NaiveDate>,
    pub status: &'static str,
}

impl<'a> TenantUpdate<'a> {
    pub fn new(tenant: &'a Tenant) -> Self {
        Self {
            id: tenant.id.into_inner(),
            unit_number: &tenant.unit_number,
            rent_amount: tenant.rent_amount,
            move_in_date: tenant.move_in_date,
            lease_end_date: tenant.lease_end_date,
            status: tenant.status.as_str(),
        }
    }
}
