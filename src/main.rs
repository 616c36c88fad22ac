use copytrade_landing::configuration::get_configuration;
use copytrade_landing::startup::Application;
use copytrade_landing::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber("copytrade_landing".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Landing page is up");
    application.run_until_stopped().await?;

    Ok(())
}
