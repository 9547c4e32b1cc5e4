//! HttpImageBackend and ImageService against a mocked image API.

use rgen_studio::{
    BackendConfig, GenerateError, GenerateRequest, HttpImageBackend, ImageBackend,
    ImageGenerator, ImageService,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> BackendConfig {
    BackendConfig::new()
        .with_base_url(server.uri())
        .with_api_key("test-key")
        .with_customer_id("cus_test")
}

#[tokio::test]
async fn test_sends_chat_completion_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("CustomerId", "cus_test"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "model": "replicate/black-forest-labs/flux-1.1-pro",
            "messages": [{ "role": "user", "content": "a cat" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "https://x/a.png" })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpImageBackend::new(config_for(&server)).unwrap();
    let reply = backend
        .complete("replicate/black-forest-labs/flux-1.1-pro", "a cat")
        .await
        .unwrap();
    assert_eq!(reply["url"], "https://x/a.png");
}

#[tokio::test]
async fn test_extracts_choice_content_exactly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "https://x/y.png" } }]
        })))
        .mount(&server)
        .await;

    let service = ImageService::from_config(config_for(&server)).unwrap();
    let response = service
        .generate(GenerateRequest::new("a quiet harbor").with_quality("high"))
        .await
        .unwrap();

    assert_eq!(response.image_url, "https://x/y.png");
    assert_eq!(response.original_prompt, "a quiet harbor");
    assert!(response.prompt.contains("ultra high quality"));
}

#[tokio::test]
async fn test_503_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let service = ImageService::from_config(config_for(&server)).unwrap();
    let err = service
        .generate(GenerateRequest::new("a cat"))
        .await
        .unwrap_err();

    assert!(err.retryable());
    match err {
        GenerateError::Upstream { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream overloaded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_400_is_not_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad model"))
        .mount(&server)
        .await;

    let service = ImageService::from_config(config_for(&server)).unwrap();
    let err = service
        .generate(GenerateRequest::new("a cat"))
        .await
        .unwrap_err();
    assert!(!err.retryable());
}

#[tokio::test]
async fn test_blank_prompt_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = ImageService::from_config(config_for(&server)).unwrap();
    let err = service
        .generate(GenerateRequest::new("    "))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Validation(_)));
}

#[tokio::test]
async fn test_non_json_reply_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let service = ImageService::from_config(config_for(&server)).unwrap();
    let err = service
        .generate(GenerateRequest::new("a cat"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Serialization(_)));
    assert!(err.retryable());
}

#[tokio::test]
async fn test_timeout_is_retryable_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "url": "https://x/late.png" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeout(Duration::from_millis(200));
    let service = ImageService::from_config(config).unwrap();
    let err = service
        .generate(GenerateRequest::new("a cat"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::Network(_)));
    assert!(err.retryable());
}
