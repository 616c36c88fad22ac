use copytrade_landing::configuration::get_configuration;
use copytrade_landing::startup::Application;
use copytrade_landing::telemetry::{get_subscriber, init_subscriber};
use std::sync::LazyLock;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub buttondown_server: MockServer,
    pub newsletter: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_subscriptions<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/subscriptions", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_subscriber_count(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/newsletter/subscriber_count", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_landing_page(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn embed_subscribe_path(&self) -> String {
        format!("/api/emails/embed-subscribe/{}", self.newsletter)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_api_base_url(None).await
}

/// Spawns the application with Buttondown's JSON API pointing at
/// `api_base_url` instead of the mock server, e.g. to make it unreachable.
pub async fn spawn_app_with_api_base_url(api_base_url: Option<String>) -> TestApp {
    LazyLock::force(&TRACING);

    // Launch a mock server to stand in for Buttondown
    let buttondown_server = MockServer::start().await;

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.buttondown.api_base_url = api_base_url.unwrap_or_else(|| buttondown_server.uri());
        c.buttondown.embed_base_url = buttondown_server.uri();
        c.buttondown.timeout_milliseconds = 500;
        c
    };

    let application = Application::build(configuration.clone())
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://localhost:{}", application_port),
        buttondown_server,
        newsletter: configuration.buttondown.newsletter,
        api_client: client,
    }
}

/// A local address nobody listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
