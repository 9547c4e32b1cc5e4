#![cfg(feature = "server")]
//! End-to-end tests of the HTTP routes with the image API mocked.

use actix_web::{http::StatusCode, test, web, App};
use rgen_studio::{
    server::{configure, AppState, MAX_REQUEST_BYTES},
    BackendConfig, ImageService,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state_for(server: &MockServer) -> web::Data<AppState> {
    let config = BackendConfig::new()
        .with_base_url(server.uri())
        .with_api_key("test-key");
    let service = ImageService::from_config(config).expect("service");
    web::Data::new(AppState::new(Arc::new(service)))
}

async fn mock_reply(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[actix_web::test]
async fn test_generate_success() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Done: https://x/y.png" } }]
        })),
    )
    .await;

    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({
            "prompt": "a lighthouse",
            "style": "cinematic",
            "aspectRatio": "mobile",
            "model": "dall-e-2"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["imageUrl"], "https://x/y.png");
    assert_eq!(body["originalPrompt"], "a lighthouse");
    assert_eq!(
        body["settings"],
        json!({
            "style": "cinematic",
            "aspectRatio": "mobile",
            "quality": "standard",
            "model": "dall-e-2"
        })
    );
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("a lighthouse, cinematic lighting"));
    assert!(prompt.contains("9:16 aspect ratio"));
    assert!(prompt.contains("vertical storytelling format"));
    assert!(prompt.ends_with("DALL-E 2 style, creative, artistic interpretation"));
    assert!(body["timestamp"].is_i64());
}

#[actix_web::test]
async fn test_generate_missing_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    for body in [json!({}), json!({ "prompt": "   " })] {
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Prompt is required" }));
    }
}

#[actix_web::test]
async fn test_generate_upstream_503() {
    let server = MockServer::start().await;
    mock_reply(&server, ResponseTemplate::new(503).set_body_string("busy")).await;

    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "prompt": "a cat" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to generate image");
    assert_eq!(body["details"], "API returned 503: busy");
    assert_eq!(body["retryable"], true);
}

#[actix_web::test]
async fn test_generate_no_url_in_reply() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "status": "queued" })),
    )
    .await;

    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "prompt": "a cat" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No image URL in response");
    assert_eq!(body["responseData"], json!({ "status": "queued" }));
    assert!(body.get("retryable").is_none());
}

#[actix_web::test]
async fn test_generate_content_parts_reply() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": [{ "type": "text", "text": "https://x/y.png" }] } }],
            "url": "https://x/other.png"
        })),
    )
    .await;

    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "prompt": "a cat" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["retryable"], true);
}

#[actix_web::test]
async fn test_generate_oversized_body() {
    let server = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let prompt = "a".repeat(MAX_REQUEST_BYTES);
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "prompt": prompt }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Request body too large");
    assert!(body.get("retryable").is_none());
}

#[actix_web::test]
async fn test_generate_malformed_body() {
    let server = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["retryable"], true);
}

#[actix_web::test]
async fn test_preflight_is_permissive() {
    let server = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/generate")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        headers.get("Access-Control-Allow-Methods").unwrap(),
        "POST, OPTIONS"
    );
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "Content-Type"
    );
}

#[actix_web::test]
async fn test_catalog_routes() {
    let server = MockServer::start().await;
    let app = test::init_service(App::new().app_data(state_for(&server)).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/models").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["categories"].as_array().unwrap().len(), 4);
    assert_eq!(body["categories"][0]["models"][0]["id"], "dall-e-3");

    let req = test::TestRequest::get().uri("/api/styles").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["styles"].as_array().unwrap().len(), 24);
    assert_eq!(body["popular"].as_array().unwrap().len(), 8);
    assert_eq!(body["suggestions"][0], "golden hour lighting");

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}
