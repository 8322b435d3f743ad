use crate::helpers::JsonResponse;
use crate::services;
use actix_web::{get, web, Responder, Result};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct FormatQuery {
    pub value: f64,
}

#[derive(Serialize, Debug)]
pub struct FormattedNumber {
    pub value: f64,
    pub formatted: String,
}

#[tracing::instrument(name = "Format number.", fields(value = query.value))]
#[get("")]
pub async fn format_handler(query: web::Query<FormatQuery>) -> Result<impl Responder> {
    let item = FormattedNumber {
        value: query.value,
        formatted: services::format_number(query.value),
    };

    Ok(JsonResponse::build().set_item(item).ok("OK"))
}
