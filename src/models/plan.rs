use crate::errors::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription plan of a shop, as stored on the account record.
///
/// The stored value is a bare string where the free plan is the empty
/// string. Anything we do not know about is kept verbatim in
/// `Unrecognized` so it can be logged and evaluated fail-closed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionTier {
    Free,
    Basic,
    Ultimate,
    Boss,
    Unrecognized(String),
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "",
            Self::Basic => "Basic",
            Self::Ultimate => "Ultimate",
            Self::Boss => "Boss",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for SubscriptionTier {
    fn from(value: &str) -> Self {
        match value {
            "" | "Free" => Self::Free,
            "Basic" => Self::Basic,
            "Ultimate" => Self::Ultimate,
            "Boss" => Self::Boss,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SubscriptionTier {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Unrecognized(_) => Self::Unrecognized(value),
            tier => tier,
        }
    }
}

impl From<SubscriptionTier> for String {
    fn from(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Unrecognized(raw) => raw,
            tier => tier.as_str().to_string(),
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            tier => write!(f, "{}", tier.as_str()),
        }
    }
}

/// Countable things a plan puts a ceiling on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    #[serde(rename = "products")]
    Products,
    #[serde(rename = "stores")]
    Stores,
    /// Sales recorded in the current day.
    #[serde(rename = "sales")]
    SalesPerDay,
    #[serde(rename = "sales-reps")]
    SalesReps,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Products,
        ResourceKind::Stores,
        ResourceKind::SalesPerDay,
        ResourceKind::SalesReps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Stores => "stores",
            Self::SalesPerDay => "sales",
            Self::SalesReps => "sales-reps",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" => Ok(Self::Products),
            "stores" => Ok(Self::Stores),
            "sales" | "sales-per-day" => Ok(Self::SalesPerDay),
            "sales-reps" => Ok(Self::SalesReps),
            other => Err(RulesError::UnknownResource(other.to_string())),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of a resource a tier grants.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", content = "ceiling", rename_all = "lowercase")]
pub enum Allowance {
    Unlimited,
    /// Adding is permitted while the current count is strictly below the ceiling.
    Below(u64),
    Never,
}

impl Allowance {
    pub fn permits(&self, current_count: u64) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Below(ceiling) => current_count < *ceiling,
            Self::Never => false,
        }
    }
}

/// Decision for "may the shop add one more".
///
/// The wire tags are the ones the front end already compares against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionOutcome {
    #[serde(rename = "success")]
    Allowed,
    #[serde(rename = "error")]
    Denied,
    #[serde(rename = "unrecognized_tier")]
    UnrecognizedTier,
}

impl RestrictionOutcome {
    /// Only an explicit `Allowed` lets the action through.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allowed => "success",
            Self::Denied => "error",
            Self::UnrecognizedTier => "unrecognized_tier",
        }
    }
}

impl From<bool> for RestrictionOutcome {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allowed
        } else {
            Self::Denied
        }
    }
}

impl fmt::Display for RestrictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload returned by the restriction endpoint.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RestrictionDecision {
    pub resource: ResourceKind,
    pub tier: SubscriptionTier,
    pub count: u64,
    pub outcome: RestrictionOutcome,
    pub allowed: bool,
}
