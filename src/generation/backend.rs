use crate::{
    config::BackendConfig,
    error::{GenerateError, Result},
    models::ChatCompletionRequest,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::Value;

/// The external image API: one call in, a loosely typed reply out.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<Value>;
}

#[derive(Clone)]
pub struct HttpImageBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpImageBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(Self::build_headers(&config)?)
            .build()
            .map_err(|e| GenerateError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn build_headers(config: &BackendConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| GenerateError::Config(format!("Invalid API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(customer_id) = &config.customer_id {
            let value = HeaderValue::from_str(customer_id)
                .map_err(|e| GenerateError::Config(format!("Invalid customer id: {}", e)))?;
            headers.insert(HeaderName::from_static("customerid"), value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl ImageBackend for HttpImageBackend {
    async fn complete(&self, model: &str, prompt: &str) -> Result<Value> {
        let url = self.config.completions_url();
        let payload = ChatCompletionRequest::single_user_message(model, prompt);

        log::info!("Requesting image from {} with model: {}", url, model);
        log::debug!("Enhanced prompt: {}", prompt);

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::error!("Image API error: {} {}", status.as_u16(), body);
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
