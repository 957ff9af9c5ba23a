//! Property entity - a rental listing owned by exactly one landlord

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Snowflake;

/// Occupancy status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyStatus {
    Vacant,
    Occupied,
    Maintenance,
}

impl PropertyStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacant" => Ok(Self::Vacant),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(format!("unknown property status: {other}")),
        }
    }
}

/// Property entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub name: String,
    pub address: String,
    pub units: i32,
    pub rent_amount: i64,
    pub status: PropertyStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a new vacant Property
    pub fn new(
        id: Snowflake,
        owner_id: Snowflake,
        name: String,
        address: String,
        units: i32,
        rent_amount: i64,
    ) -> Self {
        debug_assert!(units >= 1, "a property has at least one unit");
        let now = Utc::now();
        Self {
            id,
            owner_id,
            name,
            address,
            units,
            rent_amount,
            status: PropertyStatus::Vacant,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Check ownership; all mutations are gated on this
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Check whether `unit_number` falls within 1..=units when numeric.
    /// Non-numeric unit labels ("A", "2B") are accepted as-is.
    pub fn contains_unit(&self, unit_number: &str) -> bool {
        match unit_number.parse::<i32>() {
            Ok(n) => n >= 1 && n <= self.units,
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property::new(
            Snowflake::new(1),
            Snowflake::new(10),
            "Casa A".to_string(),
            "X".to_string(),
            2,
            1000,
        )
    }

    #[test]
    fn test_new_property_is_vacant() {
        let property = sample();
        assert_eq!(property.status, PropertyStatus::Vacant);
        assert!(property.image_url.is_none());
    }

    #[test]
    fn test_ownership() {
        let property = sample();
        assert!(property.is_owned_by(Snowflake::new(10)));
        assert!(!property.is_owned_by(Snowflake::new(11)));
    }

    #[test]
    fn test_contains_unit() {
        let property = sample();
        assert!(property.contains_unit("1"));
        assert!(property.contains_unit("2"));
        assert!(!property.contains_unit("3"));
        assert!(!property.contains_unit("0"));
        // non-numeric labels are not range checked
        assert!(property.contains_unit("2B"));
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            PropertyStatus::Vacant,
            PropertyStatus::Occupied,
            PropertyStatus::Maintenance,
        ] {
            assert_eq!(status.as_str().parse::<PropertyStatus>().unwrap(), status);
        }
        assert!("condemned".parse::<PropertyStatus>().is_err());
    }
}
