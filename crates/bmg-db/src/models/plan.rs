//! Subscription plan database model

use sqlx::FromRow;

/// Database model for subscription_plans table
#[derive(Debug, Clone, FromRow)]
pub struct PlanModel {
    pub id: i64,
    pub name: String,
    pub price_monthly: i64,
    pub features: Vec<String>,
    pub highlighted: bool,
}
