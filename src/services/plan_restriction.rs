//! Subscription plan restrictions.
//!
//! Each check answers "may the shop add one more" given how many it already
//! has. Ceilings are exclusive: a Free shop with 39 products may add the
//! 40th, with 40 it may not.
//!
//! | Resource | Free | Basic | Ultimate | Boss |
//! |----------|------|-------|----------|------|
//! | products | < 40 | < 200 | unlimited | unlimited |
//! | stores | < 1 | < 1 | < 10 | unlimited |
//! | sales per day | < 100 | < 500 | unlimited | unlimited |
//! | sales reps | never | < 1 | < 10 | unlimited |
//!
//! Free and Basic share the same store ceiling.

use crate::models::{Allowance, ResourceKind, RestrictionDecision, RestrictionOutcome, SubscriptionTier};

/// Allowance table lookup. `None` for an unrecognized tier.
pub fn allowance(resource: ResourceKind, tier: &SubscriptionTier) -> Option<Allowance> {
    use Allowance::*;
    use ResourceKind::*;
    use SubscriptionTier as T;

    let allowance = match (resource, tier) {
        (_, T::Unrecognized(_)) => return None,

        (Products, T::Free) => Below(40),
        (Products, T::Basic) => Below(200),
        (Products, T::Ultimate | T::Boss) => Unlimited,

        (Stores, T::Free | T::Basic) => Below(1),
        (Stores, T::Ultimate) => Below(10),
        (Stores, T::Boss) => Unlimited,

        (SalesPerDay, T::Free) => Below(100),
        (SalesPerDay, T::Basic) => Below(500),
        (SalesPerDay, T::Ultimate | T::Boss) => Unlimited,

        (SalesReps, T::Free) => Never,
        (SalesReps, T::Basic) => Below(1),
        (SalesReps, T::Ultimate) => Below(10),
        (SalesReps, T::Boss) => Unlimited,
    };

    Some(allowance)
}

pub fn check_restriction(
    resource: ResourceKind,
    tier: &SubscriptionTier,
    current_count: u64,
) -> RestrictionOutcome {
    match allowance(resource, tier) {
        Some(allowance) => allowance.permits(current_count).into(),
        None => RestrictionOutcome::UnrecognizedTier,
    }
}

pub fn product_restriction(tier: &SubscriptionTier, current_count: u64) -> RestrictionOutcome {
    check_restriction(ResourceKind::Products, tier, current_count)
}

pub fn store_restriction(tier: &SubscriptionTier, current_count: u64) -> RestrictionOutcome {
    check_restriction(ResourceKind::Stores, tier, current_count)
}

/// `current_count` is the number of sales already recorded today.
pub fn sales_restriction(tier: &SubscriptionTier, current_count: u64) -> RestrictionOutcome {
    check_restriction(ResourceKind::SalesPerDay, tier, current_count)
}

pub fn sales_rep_restriction(tier: &SubscriptionTier, current_count: u64) -> RestrictionOutcome {
    check_restriction(ResourceKind::SalesReps, tier, current_count)
}

/// Evaluates and logs a restriction check coming from an outer surface.
#[tracing::instrument(name = "Evaluate plan restriction.", skip(tier), fields(tier = %tier))]
pub fn decide(resource: ResourceKind, tier: SubscriptionTier, count: u64) -> RestrictionDecision {
    let outcome = check_restriction(resource, &tier, count);
    match outcome {
        RestrictionOutcome::Allowed => {}
        RestrictionOutcome::Denied => {
            tracing::info!("Plan limit reached for {} at count {}", resource, count);
        }
        RestrictionOutcome::UnrecognizedTier => {
            tracing::warn!("Unrecognized subscription tier {:?}, denying", tier.as_str());
        }
    }

    RestrictionDecision {
        resource,
        tier,
        count,
        outcome,
        allowed: outcome.is_allowed(),
    }
}
