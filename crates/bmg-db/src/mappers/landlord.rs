//! Landlord details entity <-> model mapper

use bmg_core::entities::LandlordDetails;
use bmg_core::value_objects::Snowflake;

use crate::models::LandlordDetailsModel;

impl From<LandlordDetailsModel> for LandlordDetails {
    fn from(model: LandlordDetailsModel) -> Self {
        LandlordDetails {
            user_id: Snowflake::new(model.user_id),
            company_name: model.company_name,
            business_address: model.business_address,
            tax_id: model.tax_id,
            payout_iban: model.payout_iban,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
