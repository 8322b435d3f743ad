use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors raised while turning caller input into rule arguments.
///
/// The rules themselves are total; only parsing and validation fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
    #[error("Invalid expiry date: {0}")]
    InvalidExpiryDate(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ResponseError for RulesError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "status": "Error",
            "code": self.status_code().as_u16(),
            "message": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            Self::InvalidExpiryDate(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}
