use claim::{assert_none, assert_ok, assert_some};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{client_id, TestApp};
use client_subscriptions::{
    config::NotificationFailurePolicy, domain::new_client::NewClientBody,
    ports::client_repository::ClientReader, services::client_service::ClientServiceError,
};

fn client_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": "novo@teste.com",
        "address": {
            "street": "Rua teste",
            "number": "100",
            "neighborhood": "Centro",
            "city": "Belo Horizonte",
            "state": "MG",
            "country": "Brasil",
            "zip_code": "123456"
        }
    })
}

fn parse(body: serde_json::Value) -> NewClientBody {
    serde_json::from_value(body).expect("Failed to deserialize the client body.")
}

#[tokio::test]
async fn add_client_with_success() {
    let test_app = TestApp::spawn_app().await;

    let client = test_app
        .application
        .client_service()
        .add_client(parse(client_body("Ze Tabajara")))
        .await;

    let client = assert_ok!(client);
    assert!(!client.id.is_nil());
    assert!(client.active);
}

#[tokio::test]
async fn add_client_persists_the_new_client() {
    let test_app = TestApp::spawn_app().await;

    let client = test_app
        .application
        .client_service()
        .add_client(parse(client_body("Ze Tabajara")))
        .await
        .unwrap();

    let stored = assert_some!(test_app.clients.get_client(client.id).await.unwrap());
    assert_eq!(stored.name.as_ref(), "Ze Tabajara");
    assert_eq!(stored.email.as_ref(), "novo@teste.com");
    assert_eq!(stored.address.city, "Belo Horizonte");
}

#[tokio::test]
async fn add_client_with_invalid_name_fails() {
    let test_app = TestApp::spawn_app().await;

    let result = test_app
        .application
        .client_service()
        .add_client(parse(client_body("Lu")))
        .await;

    assert!(matches!(result, Err(ClientServiceError::Validation(_))));
}

#[tokio::test]
async fn add_client_fails_when_a_field_is_not_valid() {
    let test_app = TestApp::spawn_app().await;

    // This is a common practice and it is called table-driven tests. In this case, it simulates different
    // kind of possible bodies where the service should fail with a validation error.
    let mut missing_address = client_body("Ze Tabajara");
    missing_address.as_object_mut().unwrap().remove("address");
    let mut missing_zip_code = client_body("Ze Tabajara");
    missing_zip_code["address"]["zip_code"] = json!("");
    let test_cases: Vec<(serde_json::Value, &str)> = vec![
        (json!({}), "missing body parameters"),
        (client_body(""), "name cannot be empty"),
        (client_body("{Ze}"), "invalid name parameter"),
        (client_body(" Lu "), "name padded with whitespaces"),
        (
            json!({ "name": "Ze Tabajara", "email": "ze.tabajara.com" }),
            "invalid email parameter",
        ),
        (missing_address, "missing address"),
        (missing_zip_code, "zip code cannot be empty"),
    ];

    for (invalid_body, error_message) in test_cases {
        let result = test_app
            .application
            .client_service()
            .add_client(parse(invalid_body))
            .await;

        assert!(
            matches!(result, Err(ClientServiceError::Validation(_))),
            "The service did not fail with a validation error when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn get_client_by_client_id() {
    let test_app = TestApp::spawn_app().await;

    let client = test_app
        .application
        .client_service()
        .get_client(client_id())
        .await;

    let client = assert_some!(assert_ok!(client));
    assert_eq!(client.name.as_ref(), "Ze Tabajara");
}

#[tokio::test]
async fn get_client_by_id_not_found() {
    let test_app = TestApp::spawn_app().await;
    let unknown_id = Uuid::parse_str("5D502C13-8184-499E-8A02-A6C6A1C21189").unwrap();

    let client = test_app
        .application
        .client_service()
        .get_client(unknown_id)
        .await;

    assert_none!(assert_ok!(client));
}

#[tokio::test]
async fn enable_disable_client_sends_an_email_to_the_client() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path("/mail/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let client = test_app
        .application
        .client_service()
        .enable_disable_client(client_id(), false)
        .await;

    let client = assert_ok!(client);
    assert!(!client.active);

    let email_requests = test_app.email_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&email_requests[0].body).unwrap();
    assert_eq!(body["personalizations"][0]["to"][0]["email"], "ze@tabajara.com");
    assert_eq!(body["subject"], "Your account was disabled");
}

#[tokio::test]
async fn re_enabling_a_client_sends_the_enabled_email() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(path("/mail/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&test_app.email_server)
        .await;

    let client_service = test_app.application.client_service();
    client_service
        .enable_disable_client(client_id(), false)
        .await
        .unwrap();
    let client = client_service.enable_disable_client(client_id(), true).await;

    assert!(assert_ok!(client).active);

    let email_requests = test_app.email_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&email_requests[1].body).unwrap();
    assert_eq!(body["personalizations"][0]["to"][0]["email"], "ze@tabajara.com");
    assert_eq!(body["subject"], "Your account was enabled");
}

#[tokio::test]
async fn enable_disable_client_succeeds_when_the_email_fails() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let client = test_app
        .application
        .client_service()
        .enable_disable_client(client_id(), false)
        .await;

    assert!(!assert_ok!(client).active);
}

#[tokio::test]
async fn enable_disable_client_reports_the_failed_email_when_configured() {
    let test_app = TestApp::spawn_app_with_policy(NotificationFailurePolicy::Propagate).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let result = test_app
        .application
        .client_service()
        .enable_disable_client(client_id(), false)
        .await;

    assert!(matches!(result, Err(ClientServiceError::Notification(_))));
    // The status change is kept even though the caller sees an error
    let stored = test_app.clients.get_client(client_id()).await.unwrap().unwrap();
    assert!(!stored.active);
}

#[tokio::test]
async fn enable_disable_unknown_client_does_not_send_emails() {
    let test_app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.email_server)
        .await;

    let result = test_app
        .application
        .client_service()
        .enable_disable_client(Uuid::new_v4(), true)
        .await;

    assert!(matches!(result, Err(ClientServiceError::Repository(_))));
}
