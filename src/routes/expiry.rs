use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::ExpiryClassification;
use crate::services;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;

/// Classifies against the time the request arrives.
#[tracing::instrument(name = "Classify expiry date.", skip(form), fields(expiry_date = %form.expiry_date))]
#[post("")]
pub async fn classify_handler(form: web::Json<forms::ExpiryCheck>) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<ExpiryClassification>::build().form_error(errors.to_string()));
    }

    let expiry = form.expiry_date()?;
    let item = services::classify(expiry, Utc::now());
    tracing::debug!("Expiry status {}", item.status);

    Ok(JsonResponse::build().set_item(item).ok("OK"))
}
