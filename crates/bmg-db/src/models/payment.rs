//! Manual payment database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for manual_payments table
#[derive(Debug, Clone, FromRow)]
pub struct PaymentModel {
    pub id: i64,
    pub user_id: i64,
    pub property_id: Option<i64>,
    pub amount: i64,
    pub payment_type: String,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
