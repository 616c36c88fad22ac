use crate::clients::buttondown_client::ButtondownClient;
use crate::configuration::Settings;
use crate::routes::{health_check, index, newsletter, subscriptions};
use crate::utils::json_error_handler;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web::{Data, JsonConfig};
use actix_web::{App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let buttondown_client = configuration.buttondown.client()?;
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            buttondown_client,
            configuration.application.allowed_origins,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    buttondown_client: ButtondownClient,
    allowed_origins: Vec<String>,
) -> Result<Server, anyhow::Error> {
    let buttondown_client = Data::new(buttondown_client);

    let server = HttpServer::new(move || {
        // The page itself is same-origin; these are for the copy hosted elsewhere.
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| {
                cors.allowed_origin(origin.as_str())
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(&[
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(JsonConfig::default().error_handler(json_error_handler))
            .service(index::get)
            .service(health_check::get)
            .service(newsletter::get)
            .service(subscriptions::post)
            .app_data(buttondown_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
