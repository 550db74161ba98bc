/// HttpSubmissionClient against a mock contact endpoint

use contact_form::config::EndpointConfig;
use contact_form::{
    FieldInput, FormController, FormPhase, FormValues, HttpSubmissionClient, QueryType,
    SubmissionClient, SubmissionError, SubmitOutcome,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> FormValues {
    FormValues {
        first_name: "junkai".to_string(),
        last_name: "phang".to_string(),
        email: "jk@example.com".to_string(),
        message: "This is a message.".to_string(),
        query_type: QueryType::General,
        consent: true,
    }
}

fn client_for(server: &MockServer, timeout_secs: u64) -> HttpSubmissionClient {
    let config = EndpointConfig {
        base_url: server.uri(),
        path: "/api/contact".to_string(),
        timeout_secs,
    };
    HttpSubmissionClient::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_posts_json_body_to_contact_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "firstName": "junkai",
            "lastName": "phang",
            "email": "jk@example.com",
            "message": "This is a message.",
            "queryType": "general",
            "consent": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Success" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 5);
    client.send(&payload()).await.unwrap();
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server, 5);
    assert!(client.send(&payload()).await.is_ok());
}

#[tokio::test]
async fn test_non_2xx_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server, 5);
    let err = client.send(&payload()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = client_for(&server, 1);
    let err = client.send(&payload()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // nothing listens on port 9 (discard) in the test environment
    let client = HttpSubmissionClient::new("http://127.0.0.1:9/api/contact");
    let err = client.send(&payload()).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Transport(_)));
}

#[tokio::test]
async fn test_controller_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Success" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FormController::new(client_for(&server, 5));
    form.on_field_change(FieldInput::FirstName("junkai".to_string()));
    form.on_field_change(FieldInput::LastName("phang".to_string()));
    form.on_field_change(FieldInput::Email("jk@example.com".to_string()));
    form.on_field_change(FieldInput::Message("This is a message.".to_string()));
    form.on_field_change(FieldInput::QueryType("general".to_string()));
    form.on_field_change(FieldInput::Consent(true));

    assert_eq!(form.on_submit().await, SubmitOutcome::Sent);
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert!(form.values().message.is_empty());
}
