use crate::clients::buttondown_client::{ButtondownClient, RegistrationReply};
use crate::domain::{CandidateEmail, SubmissionOutcome};
use reqwest::StatusCode;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Try again?";
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error — check your connection and try again.";

/// Validates `candidate_email` and registers it with Buttondown.
///
/// Never fails: every error path ends up as `SubmissionOutcome::Failure`.
/// Nothing is kept between calls, concurrent submissions are independent.
#[tracing::instrument(name = "Submitting a subscription", skip_all)]
pub async fn submit(client: &ButtondownClient, candidate_email: String) -> SubmissionOutcome {
    match CandidateEmail::parse(candidate_email) {
        Ok(email) => register(client, &email).await,
        Err(message) => {
            tracing::info!("Rejected a malformed email address");
            SubmissionOutcome::invalid_email(message)
        }
    }
}

/// Registers an already validated email.
///
/// If the JSON API cannot be reached at all, the email is posted once to the
/// embed form instead. That endpoint is opaque, so getting there counts as a
/// successful subscription: we cannot tell whether Buttondown kept the address.
#[tracing::instrument(
    name = "Registering a subscription",
    skip_all,
    fields(subscriber_email = %email)
)]
pub async fn register(client: &ButtondownClient, email: &CandidateEmail) -> SubmissionOutcome {
    let e = match client.register_subscriber(email).await {
        Ok(reply) => return interpret_reply(reply),
        Err(e) => e,
    };
    tracing::warn!(
        error.cause_chain = ?e,
        error.message = %e,
        "Registration endpoint unreachable, falling back to the embed form"
    );

    match client.embed_subscribe(email).await {
        Ok(()) => SubmissionOutcome::subscribed(),
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Embed form unreachable as well"
            );
            SubmissionOutcome::network(NETWORK_FAILURE_MESSAGE)
        }
    }
}

/// Maps an answer of the registration endpoint to an outcome.
///
/// Buttondown does not flag duplicates consistently: a 409 and any JSON body
/// mentioning "already" both count as an existing subscription.
pub fn interpret_reply(reply: RegistrationReply) -> SubmissionOutcome {
    if reply.status.is_success() {
        return SubmissionOutcome::subscribed();
    }

    let body = reply.body.as_ref();
    if reply.status == StatusCode::CONFLICT || body.is_some_and(mentions_already) {
        return SubmissionOutcome::already_subscribed();
    }

    tracing::warn!(
        status = reply.status.as_u16(),
        body = ?body,
        "Registration was rejected"
    );
    SubmissionOutcome::rejected(error_message(body))
}

fn mentions_already(body: &serde_json::Value) -> bool {
    body.to_string().to_lowercase().contains("already")
}

fn error_message(body: Option<&serde_json::Value>) -> String {
    let detail = body
        .and_then(|b| b.get("detail"))
        .and_then(serde_json::Value::as_str);
    let email_address = body
        .and_then(|b| b.get("email_address"))
        .and_then(|field| field.get(0))
        .and_then(serde_json::Value::as_str);

    detail
        .filter(|message| !message.is_empty())
        .or(email_address.filter(|message| !message.is_empty()))
        .unwrap_or(GENERIC_FAILURE_MESSAGE)
        .to_string()
}
