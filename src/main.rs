use std::net::TcpListener;
use stockroom::configuration::get_configuration;
use stockroom::startup::run;
use stockroom::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = get_configuration().expect("Failed to read configuration.");

    let subscriber = get_subscriber("stockroom".into(), settings.log_level.clone(), std::io::stdout);
    init_subscriber(subscriber);

    let address = settings.address();
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, settings)?.await
}
