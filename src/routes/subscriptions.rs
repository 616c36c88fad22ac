use crate::clients::buttondown_client::ButtondownClient;
use crate::domain::{FailureKind, SubscriptionState};
use crate::subscription;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SubscribeParams {
    email: String,
}

#[post("/subscriptions")]
#[tracing::instrument(
    name = "Subscribing a visitor",
    skip_all,
    fields(subscriber_email = %params.email)
)]
pub async fn post(
    params: web::Json<SubscribeParams>,
    buttondown_client: web::Data<ButtondownClient>,
) -> HttpResponse {
    let state = SubscriptionState::default().begin();
    let outcome = subscription::submit(&buttondown_client, params.0.email).await;

    let mut response = match outcome.failure_kind() {
        None => HttpResponse::Ok(),
        Some(FailureKind::InvalidEmail) => HttpResponse::BadRequest(),
        Some(FailureKind::Rejected | FailureKind::Network) => HttpResponse::BadGateway(),
    };
    response
        .content_type(ContentType::json())
        .json(state.resolve(outcome))
}
