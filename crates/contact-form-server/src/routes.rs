// File: src/routes.rs
// Purpose: Page, form post and mock endpoint handlers

use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
    routing::{get, post},
    Form, Router,
};
use contact_form::config::{FormConfig, MOCK_ENDPOINT_PATH};
use contact_form::render::{self, RenderOptions};
use contact_form::{FormController, FormValues, RawFormValues, SubmissionClient, SubmitOutcome};
use maud::Markup;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn SubmissionClient>,
    options: Arc<RenderOptions>,
}

impl AppState {
    pub fn new(client: Arc<dyn SubmissionClient>, form: &FormConfig) -> Self {
        Self {
            client,
            options: Arc::new(RenderOptions::from(form)),
        }
    }
}

pub fn router(state: AppState, mock_endpoint: bool) -> Router {
    let action = state.options.action.clone();

    let app = Router::new()
        .route("/", get(index_handler))
        .route(&action, post(submit_handler));

    let app = if mock_endpoint {
        app.route(MOCK_ENDPOINT_PATH, post(mock_contact_handler))
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Markup {
    let form = FormController::new(state.client.clone());
    render::page(render::contact_form(&form.view(), &state.options))
}

/// Each post gets a fresh controller seeded with the submitted values
async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(values): Form<RawFormValues>,
) -> Markup {
    let mut form = FormController::with_values(state.client.clone(), values);
    let outcome = form.on_submit().await;
    if outcome == SubmitOutcome::Blocked {
        debug!(errors = form.errors().len(), "re-rendering form with errors");
    }

    let markup = render::contact_form(&form.view(), &state.options);

    // htmx swaps the form in place; plain posts get the whole page
    if headers.contains_key("hx-request") {
        markup
    } else {
        render::page(markup)
    }
}

async fn mock_contact_handler(Json(values): Json<FormValues>) -> Json<JsonValue> {
    info!(query_type = %values.query_type, "Mock endpoint accepted contact request");
    Json(json!({ "message": "Success" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contact_form::SubmissionError;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubClient {
        sent: Mutex<Vec<FormValues>>,
    }

    #[async_trait]
    impl SubmissionClient for StubClient {
        async fn send(&self, values: &FormValues) -> Result<(), SubmissionError> {
            self.sent.lock().unwrap().push(values.clone());
            Ok(())
        }
    }

    fn app(client: Arc<StubClient>, mock_endpoint: bool) -> Router {
        router(AppState::new(client, &FormConfig::default()), mock_endpoint)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &'static str, htmx: bool) -> Request<Body> {
        let builder = Request::builder()
            .method("POST")
            .uri("/contact")
            .header("content-type", "application/x-www-form-urlencoded");
        let builder = if htmx { builder.header("hx-request", "true") } else { builder };
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_full_page() {
        let response = app(Arc::default(), false)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Contact Us"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[tokio::test]
    async fn test_empty_post_returns_fragment_with_errors() {
        let client = Arc::new(StubClient::default());
        let response = app(client.clone(), false)
            .oneshot(form_post("", true))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(html.contains("First name is required"));
        assert!(html.contains("Please consent to being contacted"));
        assert!(client.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_valid_post_submits_and_thanks() {
        let client = Arc::new(StubClient::default());
        let body = "firstName=junkai&lastName=phang&email=jk%40example.com\
                    &message=This+is+a+message.&queryType=general&consent=on";
        let response = app(client.clone(), false)
            .oneshot(form_post(body, false))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("thank you"));

        let sent = client.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "jk@example.com");
        assert_eq!(sent[0].message, "This is a message.");
        assert!(sent[0].consent);
    }

    #[tokio::test]
    async fn test_mock_endpoint_only_when_enabled() {
        let request = || {
            Request::post("/api/contact")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"firstName":"junkai","lastName":"phang","email":"jk@example.com","message":"hi","queryType":"support","consent":true}"#,
                ))
                .unwrap()
        };

        let enabled = app(Arc::default(), true).oneshot(request()).await.unwrap();
        assert_eq!(enabled.status(), StatusCode::OK);
        assert_eq!(body_text(enabled).await, r#"{"message":"Success"}"#);

        let disabled = app(Arc::default(), false).oneshot(request()).await.unwrap();
        assert_eq!(disabled.status(), StatusCode::NOT_FOUND);
    }
}
