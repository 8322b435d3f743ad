use crate::configuration::Settings;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = match &err {
            error::JsonPayloadError::Deserialize(cause) => json!({
                "kind": "deserialize",
                "line": cause.line(),
                "column": cause.column(),
                "msg": cause.to_string(),
            }),
            other => json!({ "kind": "other", "msg": other.to_string() }),
        };
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(settings.clone())
            .app_data(json_config.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/restriction")
                    .service(routes::restriction::check_handler),
            )
            .service(web::scope("/plans").service(routes::restriction::plans_handler))
            .service(web::scope("/expiry").service(routes::expiry::classify_handler))
            .service(web::scope("/format").service(routes::format::format_handler))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
