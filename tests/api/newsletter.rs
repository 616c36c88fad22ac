use crate::helpers::{spawn_app, spawn_app_with_api_base_url, unreachable_base_url};
use copytrade_landing::routes::newsletter::SubscriberCount;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn subscriber_count_is_read_from_buttondown() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path(format!("/v1/newsletters/{}", app.newsletter)))
        .and(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"subscriber_count": 311})),
        )
        .expect(1)
        .mount(&app.buttondown_server)
        .await;

    // Act
    let response = app.get_subscriber_count().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: SubscriberCount = response.json().await.unwrap();
    assert_eq!(body.subscriber_count, Some(311));
}

#[tokio::test]
async fn subscriber_count_is_null_when_buttondown_fails() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path(format!("/v1/newsletters/{}", app.newsletter)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.buttondown_server)
        .await;

    // Act
    let response = app.get_subscriber_count().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"subscriber_count": null}));
}

#[tokio::test]
async fn subscriber_count_is_null_when_buttondown_is_unreachable() {
    // Arrange
    let app = spawn_app_with_api_base_url(Some(unreachable_base_url())).await;

    // Act
    let response = app.get_subscriber_count().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: SubscriberCount = response.json().await.unwrap();
    assert_eq!(body.subscriber_count, None);
}
