use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use edgemore_mail::config::SmtpConfig;
use edgemore_mail::mailer::SmtpMailer;
use edgemore_server::config::ServerConfig;
use edgemore_server::form::read_form_pairs;
use edgemore_server::router;
use edgemore_server::state::AppState;

/// Nothing listens on port 1, so every send fails to connect.
fn unreachable_relay() -> SmtpConfig {
    SmtpConfig {
        host: "localhost".to_string(),
        port: 1,
        username: "bot@example.net".to_string(),
        password: "secret".to_string(),
        recipient: "owner@example.net".to_string(),
        sender: "estimates@example.net".to_string(),
    }
}

fn app(config: SmtpConfig) -> Router {
    router(AppState::new(SmtpMailer::new(config)))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn submit(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/submit-estimate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const BOUNDARY: &str = "edgemore-boundary";

fn multipart_body() -> String {
    [
        "--edgemore-boundary\r\n",
        "Content-Disposition: form-data; name=\"name\"\r\n\r\n",
        "Jane Roe\r\n",
        "--edgemore-boundary\r\n",
        "Content-Disposition: form-data; name=\"photo\"; filename=\"floor.jpg\"\r\n",
        "Content-Type: image/jpeg\r\n\r\n",
        "not really a jpeg\r\n",
        "--edgemore-boundary\r\n",
        "Content-Disposition: form-data; name=\"vision\"\r\n\r\n",
        "Metallic gray\r\nsatin topcoat\r\n",
        "--edgemore-boundary--\r\n",
    ]
    .concat()
}

fn post_with(content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/submit-estimate")
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

#[tokio::test]
async fn health_is_ok_without_configuration() {
    let unconfigured = SmtpConfig::from_lookup(|_| None).unwrap();
    let response = app(unconfigured)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn empty_body_still_answers_200_with_status() {
    let response = app(unreachable_relay())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/submit-estimate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn empty_form_still_answers_200_with_status() {
    let response = app(unreachable_relay()).oneshot(submit("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["status"] == "ok" || body["status"] == "error");
}

#[tokio::test]
async fn delivery_failure_is_reported_in_body() {
    let response = app(unreachable_relay())
        .oneshot(submit(
            "name=Jane+Roe&phone=813-555-0100&space_type=Garage&square_footage=480\
             &vision=Metallic+gray%0Asatin+topcoat&extra=ignored",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");

    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error sending email: SMTP error:"));
    assert!(message.len() > "Error sending email: SMTP error:".len());
}

#[tokio::test]
async fn unconfigured_mailer_is_reported_in_body() {
    let unconfigured = SmtpConfig::from_lookup(|_| None).unwrap();
    let response = app(unconfigured).oneshot(submit("name=Jane")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error sending email: "));
}

#[tokio::test]
async fn vision_larger_than_two_megabytes_reaches_delivery() {
    let vision = "epoxy ".repeat(3 * 1024 * 1024 / 6);
    let body = format!("name=Jane+Roe&vision={vision}");
    assert!(body.len() > 2 * 1024 * 1024);

    let response = app(unreachable_relay())
        .oneshot(submit(&body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error sending email: "));
}

#[tokio::test]
async fn multipart_text_fields_are_read_and_files_skipped() {
    let request = post_with(&multipart_content_type(), multipart_body());
    let pairs = read_form_pairs(request).await.unwrap();

    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), "Jane Roe".to_string()),
            ("vision".to_string(), "Metallic gray\r\nsatin topcoat".to_string()),
        ]
    );
}

#[tokio::test]
async fn multipart_submission_reaches_delivery() {
    let response = app(unreachable_relay())
        .oneshot(post_with(&multipart_content_type(), multipart_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error sending email: "));
}

#[tokio::test]
async fn urlencoded_pairs_keep_body_order() {
    let request = submit("name=Jane+Roe&zip=33701&name=Second");
    let pairs = read_form_pairs(request).await.unwrap();

    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), "Jane Roe".to_string()),
            ("zip".to_string(), "33701".to_string()),
            ("name".to_string(), "Second".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_body_with_any_content_type_is_an_empty_form() {
    let request = post_with("application/json", Body::empty());
    assert!(read_form_pairs(request).await.unwrap().is_empty());
}

#[tokio::test]
async fn unsupported_content_type_is_reported_without_sending() {
    let response = app(unreachable_relay())
        .oneshot(post_with("text/plain", "name=Jane+Roe"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error reading form: "));
}

#[tokio::test]
async fn multipart_without_boundary_is_reported_without_sending() {
    let response = app(unreachable_relay())
        .oneshot(post_with("multipart/form-data", multipart_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error reading form: "));
}

#[tokio::test]
async fn submit_requires_post() {
    let response = app(unreachable_relay())
        .oneshot(
            Request::builder()
                .uri("/submit-estimate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn server_config_defaults_and_overrides() {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.bind_addr(), ("0.0.0.0", 5000));

    let config = ServerConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("8080".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.bind_addr(), ("127.0.0.1", 8080));

    assert!(ServerConfig::from_lookup(|_| Some("nope".to_string())).is_err());
}
