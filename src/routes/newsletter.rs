use crate::clients::buttondown_client::ButtondownClient;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct SubscriberCount {
    pub subscriber_count: Option<u64>,
}

// Cosmetic: Buttondown failures show up as a `null` count, never as an error.
#[get("/newsletter/subscriber_count")]
#[tracing::instrument(name = "Retrieving the subscriber count", skip_all)]
pub async fn get(buttondown_client: web::Data<ButtondownClient>) -> HttpResponse {
    let subscriber_count = buttondown_client.subscriber_count().await;

    HttpResponse::Ok()
        .content_type(ContentType::json())
        .json(SubscriberCount { subscriber_count })
}
