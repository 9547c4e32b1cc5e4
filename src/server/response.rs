use crate::error::GenerateError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<serde_json::Value>,
}

impl ErrorPayload {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            retryable: None,
            response_data: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }
}

impl From<&GenerateError> for ErrorPayload {
    fn from(err: &GenerateError) -> Self {
        match err {
            GenerateError::Validation(msg) => ErrorPayload::new(msg.clone()),
            GenerateError::Upstream { .. } => ErrorPayload::new("Failed to generate image")
                .with_details(err.to_string())
                .with_retryable(err.retryable()),
            GenerateError::Extraction { response } => ErrorPayload {
                response_data: Some(response.clone()),
                ..ErrorPayload::new("No image URL in response").with_details(
                    "The AI service returned a response but no image URL was found",
                )
            },
            GenerateError::Busy(_) => ErrorPayload::new(err.to_string()).with_retryable(true),
            GenerateError::PayloadTooLarge { .. } => {
                ErrorPayload::new("Request body too large").with_details(err.to_string())
            }
            _ => ErrorPayload::new("Internal server error")
                .with_details(err.to_string())
                .with_retryable(err.retryable()),
        }
    }
}

impl ResponseError for GenerateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenerateError::Validation(_) => StatusCode::BAD_REQUEST,
            GenerateError::Upstream { status, .. } if *status >= 500 => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GenerateError::Upstream { .. } => StatusCode::BAD_REQUEST,
            GenerateError::Busy(_) => StatusCode::CONFLICT,
            GenerateError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorPayload::from(self))
    }
}
