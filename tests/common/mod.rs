use stockroom::configuration::get_configuration;

pub struct TestApp {
    pub address: String,
}

// we have to run server in another thread
pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.app_port = port;

    let server = stockroom::startup::run(listener, configuration).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address }
}
