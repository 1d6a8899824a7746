//! End-to-end submissions against an in-process backend.
//!
//! Each test starts an `axum` server on an ephemeral port that answers
//! `POST /api/add` with a canned status and body, and records what it got.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};

use url_shortener_client::coordinator::REQUEST_ID_HEADER;
use url_shortener_client::{
    ClientConfig, Field, FieldError, FormSession, FormState, Outcome, Page, Phase,
    RequestCoordinator,
};

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
}

struct Backend {
    reply: Reply,
    received: Mutex<Vec<(Option<String>, Value)>>,
}

async fn add(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    backend.received.lock().unwrap().push((request_id, body));

    let reply = backend.reply.clone();
    tokio::time::sleep(reply.delay).await;
    (reply.status, reply.body)
}

async fn spawn_backend(
    status: StatusCode,
    body: &'static str,
    delay: Duration,
) -> (SocketAddr, Arc<Backend>) {
    let backend = Arc::new(Backend {
        reply: Reply { status, body, delay },
        received: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/api/add", post(add))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, backend)
}

fn coordinator_for(addr: SocketAddr, timeout: Duration) -> RequestCoordinator {
    let mut config = ClientConfig::default()
        .with_api_base(&format!("http://{addr}"))
        .unwrap();
    config.request_timeout = timeout;
    RequestCoordinator::new(&config).unwrap()
}

async fn session_against(
    status: StatusCode,
    body: &'static str,
) -> (FormSession<RequestCoordinator>, Arc<Backend>) {
    let (addr, backend) = spawn_backend(status, body, Duration::ZERO).await;
    let session = FormSession::new(Page::Home, coordinator_for(addr, Duration::from_secs(5)));
    (session, backend)
}

fn fill(session: &mut FormSession<RequestCoordinator>, destination: &str, short_code: &str) {
    session.edit(Field::DestinationUrl, destination);
    session.edit(Field::ShortCode, short_code);
}

#[tokio::test]
async fn created_mapping_completes_the_form() {
    let (mut session, backend) =
        session_against(StatusCode::CREATED, r#"{"data":{"InsertedID":"1"}}"#).await;
    fill(&mut session, "  https://a.com ", "ok-code");

    assert_eq!(session.submit().await, Phase::Completed);
    assert_eq!(session.state().short_url().as_deref(), Some("atomurl.ga/go/ok-code"));
    assert_eq!(session.state().destination_error_text(), "");
    assert_eq!(session.state().short_code_error_text(), "");

    let received = backend.received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    let (request_id, body) = &received[0];
    assert!(request_id.as_deref().is_some_and(|id| uuid::Uuid::parse_str(id).is_ok()));
    assert_eq!(body, &json!({ "destinationURL": "https://a.com", "shortURL": "ok-code" }));

    session.reset();
    assert_eq!(session.state(), &FormState::new(Page::Home));
}

#[tokio::test]
async fn taken_short_code_is_reported_on_the_short_code_field() {
    let (mut session, _backend) = session_against(
        StatusCode::CONFLICT,
        r#"{"error":"short url already taken","error_details":"Duplicate short url"}"#,
    )
    .await;
    fill(&mut session, "https://a.com", "ok-code");

    assert_eq!(session.submit().await, Phase::Editing);
    let state = session.state();
    assert_eq!(state.short_code_error, Some(FieldError::Conflict));
    assert_eq!(state.short_code_error_text(), "Short url already take, please try something else");
    assert_eq!(state.destination_error_text(), "");
    assert_eq!(state.destination_url, "https://a.com");
}

#[tokio::test]
async fn backend_validation_message_is_shown_verbatim() {
    let (mut session, _backend) = session_against(
        StatusCode::BAD_REQUEST,
        r#"{"error":"Destination URL not in correct format","error_details":"atomurl"}"#,
    )
    .await;
    fill(&mut session, "https://atomurl.ga", "loop");

    assert_eq!(session.submit().await, Phase::Editing);
    assert_eq!(
        session.state().short_code_error_text(),
        "Destination URL not in correct format"
    );
}

#[tokio::test]
async fn unparseable_body_is_a_generic_failure() {
    let (mut session, _backend) =
        session_against(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").await;
    fill(&mut session, "https://a.com", "ok-code");

    assert_eq!(session.submit().await, Phase::Editing);
    assert_eq!(session.state().short_code_error, Some(FieldError::Generic));
}

#[tokio::test]
async fn local_validation_failure_sends_nothing() {
    let (mut session, backend) = session_against(StatusCode::CREATED, "{}").await;
    fill(&mut session, "https://a.com", "");

    assert_eq!(session.submit().await, Phase::Editing);
    assert_eq!(session.state().short_code_error_text(), "This cannot be empty");
    assert!(backend.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn second_create_with_same_code_conflicts() {
    // The mock answers with a fixed reply, so drive the coordinator
    // directly against two backends to model first-create then duplicate.
    let (created, _) = spawn_backend(StatusCode::CREATED, r#"{"data":{}}"#, Duration::ZERO).await;
    let (taken, _) = spawn_backend(
        StatusCode::CONFLICT,
        r#"{"error":"short url already taken"}"#,
        Duration::ZERO,
    )
    .await;

    let first = coordinator_for(created, Duration::from_secs(5));
    let second = coordinator_for(taken, Duration::from_secs(5));
    assert_eq!(first.submit("https://a.com", "dup").await, Outcome::Success);
    assert_eq!(second.submit("https://a.com", "dup").await, Outcome::Conflict);
}

#[tokio::test]
async fn timeout_is_a_generic_failure() {
    let (addr, _backend) = spawn_backend(StatusCode::CREATED, "{}", Duration::from_secs(2)).await;
    let coordinator = coordinator_for(addr, Duration::from_millis(200));

    assert_eq!(coordinator.submit("https://a.com", "slow").await, Outcome::GenericFailure);
}

#[tokio::test]
async fn connection_refused_is_a_generic_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut session = FormSession::new(Page::Home, coordinator_for(addr, Duration::from_secs(2)));
    fill(&mut session, "https://a.com", "ok-code");

    assert_eq!(session.submit().await, Phase::Editing);
    assert_eq!(
        session.state().short_code_error_text(),
        "Something terrible happened while we tried linking the url, try again later"
    );
}
