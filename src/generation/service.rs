use crate::{
    config::BackendConfig,
    error::{GenerateError, Result},
    generation::{backend::HttpImageBackend, extract::extract_image_url, ImageBackend},
    models::{GenerateRequest, GenerateResponse},
    prompt::{enhance_prompt, route_model},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Anything that can turn a [`GenerateRequest`] into a [`GenerateResponse`].
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Validates, enhances and routes a request, then makes the single backend call.
#[derive(Clone)]
pub struct ImageService {
    backend: Arc<dyn ImageBackend>,
}

impl ImageService {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        Self { backend }
    }

    pub fn from_config(config: BackendConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpImageBackend::new(config)?)))
    }
}

#[async_trait]
impl ImageGenerator for ImageService {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let original_prompt = match request.prompt.as_deref() {
            Some(p) if !p.trim().is_empty() => p.to_string(),
            _ => return Err(GenerateError::Validation("Prompt is required".into())),
        };

        let settings = request.resolved_settings();
        let enhanced = enhance_prompt(
            &original_prompt,
            &settings.style,
            &settings.quality,
            &settings.aspect_ratio,
            &settings.model,
        );
        let backend_model = route_model(&settings.model);
        log::debug!("Routed UI model {} to {}", settings.model, backend_model);

        let _timer = crate::logger::timer("image generation");
        let reply = self.backend.complete(backend_model, &enhanced).await?;

        let image_url = match extract_image_url(&reply)? {
            Some(url) => url,
            None => {
                log::error!("No image URL found in response: {}", reply);
                return Err(GenerateError::Extraction { response: reply });
            }
        };

        log::info!("Generated image: {}", image_url);

        Ok(GenerateResponse {
            success: true,
            image_url,
            prompt: enhanced,
            original_prompt,
            settings,
            timestamp: Utc::now(),
        })
    }
}
