use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use serde_derive::Serialize;

/// Envelope every endpoint answers with.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn to_json_response(self, status: &str, code: u32, message: String) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message,
            code,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok<M: Into<String>>(self, message: M) -> web::Json<JsonResponse<T>> {
        web::Json(self.to_json_response("OK", 200, message.into()))
    }

    pub fn form_error<M: Into<String>>(self, message: M) -> actix_web::Error {
        let message = message.into();
        let body = self.to_json_response("Error", 400, message.clone());
        InternalError::from_response(message, HttpResponse::BadRequest().json(body)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_skips_empty_list() {
        let web::Json(body) = JsonResponse::<u32>::build().set_item(7).ok("OK");
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["status"], "OK");
        assert_eq!(value["code"], 200);
        assert_eq!(value["item"], 7);
        assert!(value.get("list").is_none());
    }

    #[test]
    fn form_error_is_bad_request() {
        let err = JsonResponse::<u32>::build().form_error("tier: too long");
        let resp = err.error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(actix_web::http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
