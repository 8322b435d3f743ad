use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{Allowance, ResourceKind, RestrictionDecision, SubscriptionTier};
use crate::services;
use actix_web::{get, post, web, Responder, Result};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Deserialize, Debug)]
pub struct ResourcePath {
    pub resource: String,
}

#[derive(Serialize, Debug)]
pub struct TierAllowance {
    /// Stored plan name, so the free plan is `""` here as in restriction decisions.
    pub tier: SubscriptionTier,
    pub allowance: Allowance,
}

#[tracing::instrument(name = "Check plan restriction.", skip(form), fields(resource = %path.resource))]
#[post("/{resource}")]
pub async fn check_handler(
    path: web::Path<ResourcePath>,
    form: web::Json<forms::RestrictionCheck>,
) -> Result<impl Responder> {
    let resource: ResourceKind = path.resource.parse()?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<RestrictionDecision>::build().form_error(errors.to_string()));
    }

    let decision = services::decide(resource, form.tier(), form.count);
    Ok(JsonResponse::build().set_item(decision).ok("OK"))
}

/// Allowance of every plan for one resource, cheapest plan first.
#[tracing::instrument(name = "List plan allowances.", fields(resource = %path.resource))]
#[get("/{resource}")]
pub async fn plans_handler(path: web::Path<ResourcePath>) -> Result<impl Responder> {
    let resource: ResourceKind = path.resource.parse()?;

    let list = [
        SubscriptionTier::Free,
        SubscriptionTier::Basic,
        SubscriptionTier::Ultimate,
        SubscriptionTier::Boss,
    ]
    .into_iter()
    .filter_map(|tier| {
        services::allowance(resource, &tier).map(|allowance| TierAllowance {
            tier,
            allowance,
        })
    })
    .collect::<Vec<_>>();

    Ok(JsonResponse::build().set_list(list).ok("OK"))
}
