//! Landlord details database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for landlord_details table
#[derive(Debug, Clone, FromRow)]
pub struct LandlordDetailsModel {
    pub user_id: i64,
    pub company_name: Option<String>,
    pub business_address: Option<String>,
    pub tax_id: Option<String>,
    pub payout_iban: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
