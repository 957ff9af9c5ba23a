//! Manual payment entity <-> model mapper

use bmg_core::entities::ManualPayment;
use bmg_core::value_objects::Snowflake;

use crate::models::PaymentModel;

/// Convert PaymentModel to ManualPayment entity
impl From<PaymentModel> for ManualPayment {
    fn from(model: PaymentModel) -> Self {
        ManualPayment {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            property_id: model.property_id.map(Snowflake::new),
            amount: model.amount,
            payment_type: model.payment_type,
            payment_method: model.payment_method,
            payment_date: model.payment_date,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

/// Convert ManualPayment entity reference to values for database insertion
pub struct PaymentInsert<'a> {
    pub id: i64,
    pub user_id: i64,
    pub property_id: Option<i64>,
    pub amount: i64,
    pub payment_type: &'a str,
    pub payment_method: &'a str,
    pub payment_date: chrono::NaiveDate,
    pub description: Option<&'a str>,
}

impl<'a> PaymentInsert<'a> {
    pub fn new(payment: &'a ManualPayment) -> Self {
        Self {
            id: payment.id.into_inner(),
            user_id: payment.user_id.into_inner(),
            property_id: payment.property_id.map(Snowflake::into_inner),
            amount: payment.amount,
            payment_type: &payment.payment_type,
            payment_method: &payment.payment_method,
            payment_date: payment.payment_date,
            description: payment.description.as_deref(),
        }
    }
}
