use crate::errors::RulesError;
use crate::services;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ExpiryCheck {
    #[validate(min_length = 1)]
    #[validate(max_length = 64)]
    pub expiry_date: String,
}

impl ExpiryCheck {
    pub fn expiry_date(&self) -> Result<DateTime<Utc>, RulesError> {
        services::parse_expiry_date(&self.expiry_date)
    }
}
