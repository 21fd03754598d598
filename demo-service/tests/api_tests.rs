mod common;

use common::provider_reply;
use common::TestApp;
use common::API_HOSTNAME;
use reqwest::StatusCode;

async fn challenge(app: &TestApp, path: &str, user: &str) -> String {
    let response = app
        .get(path)
        .query(&[("user", user)])
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["host"], API_HOSTNAME);

    body["data"]["sig_request"]
        .as_str()
        .expect("Missing sig_request")
        .to_string()
}

#[tokio::test]
async fn test_prompt_returns_signed_challenge() {
    let app = TestApp::spawn().await;

    let sig_request = challenge(&app, "/api/prompt", "alice").await;

    let (duo_half, app_half) = sig_request.split_once(':').expect("Missing separator");
    assert!(duo_half.starts_with("TX|"));
    assert!(app_half.starts_with("APP|"));
}

#[tokio::test]
async fn test_prompt_missing_user() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/prompt")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Missing query parameter: user");
}

#[tokio::test]
async fn test_authentication_round_trip() {
    let app = TestApp::spawn().await;

    let sig_request = challenge(&app, "/api/prompt", "alice").await;
    let sig_response = provider_reply(&sig_request, "TX", "AUTH");

    let response = app
        .post("/api/prompt")
        .form(&[("sig_response", sig_response.as_str())])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
}

#[tokio::test]
async fn test_enrollment_round_trip() {
    let app = TestApp::spawn().await;

    let sig_request = challenge(&app, "/api/enroll", "bob").await;
    assert!(sig_request.starts_with("ENROLL_REQUEST|"));
    let sig_response = provider_reply(&sig_request, "ENROLL_REQUEST", "ENROLL");

    let response = app
        .post("/api/enroll")
        .form(&[("sig_response", sig_response.as_str())])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "bob");
}

#[tokio::test]
async fn test_enrollment_response_rejected_by_authentication_callback() {
    let app = TestApp::spawn().await;

    let sig_request = challenge(&app, "/api/enroll", "bob").await;
    let sig_response = provider_reply(&sig_request, "ENROLL_REQUEST", "ENROLL");

    let response = app
        .post("/api/prompt")
        .form(&[("sig_response", sig_response.as_str())])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        "failed to validate authentication signature"
    );
}

#[tokio::test]
async fn test_callback_malformed_response() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/prompt")
        .form(&[("sig_response", "garbage")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "received invalid server response");
}

#[tokio::test]
async fn test_callback_missing_sig_response() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/prompt")
        .form(&[("other", "value")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        "Missing signature form data: sig_response"
    );
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let app = TestApp::spawn().await;

    let generated = app
        .get("/api/prompt")
        .query(&[("user", "alice")])
        .send()
        .await
        .expect("Failed to execute request");
    assert!(generated.headers().contains_key("x-request-id"));

    let supplied = app
        .get("/api/prompt")
        .query(&[("user", "alice")])
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(supplied.headers()["x-request-id"], "req-42");
}
