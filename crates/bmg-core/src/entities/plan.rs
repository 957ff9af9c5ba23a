//! Subscription plan - a pricing tier shown on the billing page

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPlan {
    pub id: Snowflake,
    pub name: String,
    pub price_monthly: i64,
    pub features: Vec<String>,
    pub highlighted: bool,
}

impl SubscriptionPlan {
    pub fn new(id: Snowflake, name: String, price_monthly: i64) -> Self {
        Self {
            id,
            name,
            price_monthly,
            features: Vec::new(),
            highlighted: false,
        }
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn with_highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Default tiers served when the plan table cannot be read
    pub fn fallback_plans() -> Vec<Self> {
        vec![
            Self::new(Snowflake::new(1), "Starter".to_string(), 0).with_features(vec![
                "1 property".to_string(),
                "Tenant invitations".to_string(),
                "Manual payment tracking".to_string(),
            ]),
            Self::new(Snowflake::new(2), "Professional".to_string(), 19)
                .with_features(vec![
                    "Up to 20 properties".to_string(),
                    "Issue tracking".to_string(),
                    "Messaging".to_string(),
                ])
                .with_highlighted(true),
            Self::new(Snowflake::new(3), "Portfolio".to_string(), 49).with_features(vec![
                "Unlimited properties".to_string(),
                "Priority support".to_string(),
            ]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_plans_ordered_by_price() {
        let plans = SubscriptionPlan::fallback_plans();
        assert_eq!(plans.len(), 3);
        assert!(plans.windows(2).all(|w| w[0].price_monthly <= w[1].price_monthly));
        assert_eq!(plans.iter().filter(|p| p.highlighted).count(), 1);
    }
}
