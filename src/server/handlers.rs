use super::{AppState, MAX_REQUEST_BYTES};
use crate::{
    error::GenerateError,
    generation::ImageGenerator,
    models::{model_categories, popular_styles, GenerateRequest, PROMPT_SUGGESTIONS, STYLE_PRESETS},
};
use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

pub async fn generate(
    state: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, GenerateError> {
    let body = body.map_err(|e| {
        if e.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
            GenerateError::PayloadTooLarge {
                limit: MAX_REQUEST_BYTES,
            }
        } else {
            log::error!("Image generation error: {}", e);
            GenerateError::Network(e.to_string())
        }
    })?;

    let request: GenerateRequest = serde_json::from_slice(&body).map_err(|e| {
        log::error!("Image generation error: {}", e);
        GenerateError::from(e)
    })?;

    let response = state.generator.generate(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn generate_preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .finish()
}

pub async fn list_models() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "categories": model_categories() }))
}

pub async fn list_styles() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "styles": &STYLE_PRESETS,
        "popular": popular_styles(),
        "suggestions": &PROMPT_SUGGESTIONS,
    }))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
