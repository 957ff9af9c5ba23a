//! Landlord business details, one record per landlord account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandlordDetails {
    pub user_id: Snowflake,
    pub company_name: Option<String>,
    pub business_address: Option<String>,
    pub tax_id: Option<String>,
    pub payout_iban: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LandlordDetails {
    pub fn new(user_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            company_name: None,
            business_address: None,
            tax_id: None,
            payout_iban: None,
            created_at: now,
            updated_at: now,
        }
    }
}
