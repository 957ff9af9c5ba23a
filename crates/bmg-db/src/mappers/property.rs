//! Property entity <-> model mapper

use bmg_core::entities::{Property, PropertyStatus};
use bmg_core::value_objects::Snowflake;

use crate::models::PropertyModel;

/// Convert PropertyModel to Property entity
impl From<PropertyModel> for Property {
    fn from(model: PropertyModel) -> Self {
        Property {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            name: model.name,
            address: model.address,
            units: model.units,
            rent_amount: model.rent_amount,
            status: model.status.parse().unwrap_or(PropertyStatus::Vacant),
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Property entity reference to values for database insertion
pub struct PropertyInsert<'a> {
    pub id: i64,
    pub owner_id: i64,
    pub name: &'a str,
    pub address: &'a str,
    pub units: i32,
    pub rent_amount: i64,
    pub status: &'static str,
    pub image_url: Option<&'a str>,
}

impl<'a> PropertyInsert<'a> {
    pub fn new(property: &'a Property) -> Self {
        Self {
            id: property.id.into_inner(),
            owner_id: property.owner_id.into_inner(),
            name: &property.name,
            address: &property.address,
            units: property.units,
            rent_amount: property.rent_amount,
            status: property.status.as_str(),
            image_url: property.image_url.as_deref(),
        }
    }
}

/// Convert Property entity reference to values for database update
pub struct PropertyUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub address: &'a str,
    pub units: i32,
    pub rent_amount: i64,
    pub status: &'static str,
    pub image_url: Option<&'a str>,
}

impl<'a> PropertyUpdate<'a> {
    pub fn new(property: &'a Property) -> Self {
        Self {
            id: property.id.into_inner(),
            name: &property.name,
            address: &property.address,
            units: property.units,
            rent_amount: property.rent_amount,
            status: property.status.as_str(),
            image_url: property.image_url.as_deref(),
        }
    }
}
