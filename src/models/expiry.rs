use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Badge styling hint for an inventory item close to its expiry date.
///
/// Serializes as its CSS class name, or `null` when no styling applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStyle {
    NearExpiryCritical,
    NearExpiryWarning,
    None,
}

impl ExpiryStyle {
    /// CSS class for the badge, `None` when the item needs no styling.
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Self::NearExpiryCritical => Some("near-expiry-critical"),
            Self::NearExpiryWarning => Some("near-expiry-warning"),
            Self::None => None,
        }
    }
}

impl Serialize for ExpiryStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.class_name() {
            Some(class) => serializer.serialize_str(class),
            None => serializer.serialize_none(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    Warning,
    #[serde(rename = "Still Valid")]
    StillValid,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::Warning => "Warning",
            Self::StillValid => "Still Valid",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryClassification {
    pub expiry_date: DateTime<Utc>,
    pub style: ExpiryStyle,
    pub status: ExpiryStatus,
}
