//! Manual payment entity - a free-form ledger entry recorded outside any
//! payment processor. Bookkeeping only, no reconciliation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// Manual payment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualPayment {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub property_id: Option<Snowflake>,
    pub amount: i64,
    pub payment_type: String,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ManualPayment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        property_id: Option<Snowflake>,
        amount: i64,
        payment_type: String,
        payment_method: String,
        payment_date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            property_id,
            amount,
            payment_type,
            payment_method,
            payment_date,
            description,
            created_at: Utc::now(),
        }
    }

    /// Check if the entry was recorded by the given user
    #[inline]
    pub fn is_recorded_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_by() {
        let payment = ManualPayment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Some(Snowflake::new(20)),
            1000,
            "rent".to_string(),
            "bank_transfer".to_string(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            None,
        );
        assert!(payment.is_recorded_by(Snowflake::new(10)));
        assert!(!payment.is_recorded_by(Snowflake::new(11)));
    }
}
