use crate::models::SubscriptionTier;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct RestrictionCheck {
    /// Stored plan name, empty for the free plan.
    #[serde(default)]
    #[validate(max_length = 32)]
    pub tier: String,
    /// Units the shop already has, not counting the one being added.
    pub count: u64,
}

impl RestrictionCheck {
    pub fn tier(&self) -> SubscriptionTier {
        SubscriptionTier::from(self.tier.as_str())
    }
}
