//! Subscription plan entity <-> model mapper

use bmg_core::entities::SubscriptionPlan;
use bmg_core::value_objects::Snowflake;

use crate::models::PlanModel;

impl From<PlanModel> for SubscriptionPlan {
    fn from(model: PlanModel) -> Self {
        SubscriptionPlan {
            id: Snowflake::new(model.id),
            name: model.name,
            price_monthly: model.price_monthly,
            features: model.features,
            highlighted: model.highlighted,
        }
    }
}
