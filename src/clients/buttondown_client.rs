use crate::domain::CandidateEmail;
use crate::utils::error_chain_fmt;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Talks to the three Buttondown endpoints the landing page relies on.
pub struct ButtondownClient {
    pub api_base_url: String,
    pub embed_base_url: String,
    pub newsletter: String,
    pub tag: String,
    http_client: Client,
}

impl ButtondownClient {
    pub fn new(
        api_base_url: String,
        embed_base_url: String,
        newsletter: String,
        tag: String,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_base_url,
            embed_base_url,
            newsletter,
            tag,
            http_client,
        })
    }

    /// Registers `email` through the JSON API.
    ///
    /// Any HTTP response, error statuses included, comes back as `Ok`.
    /// `Err` means no response was produced at all.
    #[tracing::instrument(
        name = "Registering subscriber with Buttondown",
        skip_all,
        fields(subscriber_email = %email)
    )]
    pub async fn register_subscriber(
        &self,
        email: &CandidateEmail,
    ) -> Result<RegistrationReply, TransportError> {
        let url = format!("{}/v1/subscribers", self.api_base_url);
        let request_body = RegisterSubscriberRequest {
            email_address: email.as_ref(),
            r#type: "regular",
            tags: vec![self.tag.as_str()],
            newsletter: self.newsletter.as_str(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(TransportError::Registration)?;
        let status = response.status();
        // An unreadable body is as good as an unparsable one.
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice(&bytes).ok(),
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to read registration response body");
                None
            }
        };
        tracing::info!(status = status.as_u16(), "Registration endpoint responded");

        Ok(RegistrationReply { status, body })
    }

    /// Posts `email` to the legacy embed form.
    ///
    /// The response is never looked at: the endpoint is built for
    /// cross-origin form posts and gives nothing useful back.
    #[tracing::instrument(
        name = "Submitting subscriber to Buttondown embed form",
        skip_all,
        fields(subscriber_email = %email)
    )]
    pub async fn embed_subscribe(&self, email: &CandidateEmail) -> Result<(), TransportError> {
        let url = format!(
            "{}/api/emails/embed-subscribe/{}",
            self.embed_base_url, self.newsletter
        );

        self.http_client
            .post(&url)
            .form(&[("email", email.as_ref())])
            .send()
            .await
            .map_err(TransportError::EmbedSubscribe)?;

        Ok(())
    }

    /// Public subscriber count of the newsletter, if Buttondown will tell us.
    #[tracing::instrument(name = "Fetching Buttondown subscriber count", skip_all)]
    pub async fn subscriber_count(&self) -> Option<u64> {
        let url = format!("{}/v1/newsletters/{}", self.api_base_url, self.newsletter);

        match self.fetch_newsletter_metadata(&url).await {
            Ok(metadata) => metadata.subscriber_count.filter(|count| *count > 0),
            Err(e) => {
                tracing::debug!(error.cause_chain = ?e, "Subscriber count is unavailable");
                None
            }
        }
    }

    async fn fetch_newsletter_metadata(
        &self,
        url: &str,
    ) -> Result<NewsletterMetadata, reqwest::Error> {
        self.http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[derive(Serialize, Debug)]
struct RegisterSubscriberRequest<'a> {
    email_address: &'a str,
    r#type: &'a str,
    tags: Vec<&'a str>,
    newsletter: &'a str,
}

#[derive(Deserialize, Debug)]
struct NewsletterMetadata {
    subscriber_count: Option<u64>,
}

/// What the registration endpoint answered. `body` is `None` when it was not JSON.
#[derive(Debug)]
pub struct RegistrationReply {
    pub status: StatusCode,
    pub body: Option<serde_json::Value>,
}

#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("Failed to reach the Buttondown registration endpoint.")]
    Registration(#[source] reqwest::Error),
    #[error("Failed to reach the Buttondown embed-subscribe endpoint.")]
    EmbedSubscribe(#[source] reqwest::Error),
}

impl std::fmt::Debug for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
