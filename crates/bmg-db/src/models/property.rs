//! Property database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for properties table
#[derive(Debug, Clone, FromRow)]
pub struct PropertyModel {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub address: String,
    pub units: i32,
    pub rent_amount: i64,
    /// Occupancy status: 'vacant', 'occupied', 'maintenance' (CHECK-constrained)
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
