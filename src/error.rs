use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("No image URL in response")]
    Extraction { response: serde_json::Value },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The named operation is already running.
    #[error("A {0} is already in progress")]
    Busy(&'static str),

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

impl GenerateError {
    /// Whether the caller may resubmit the same request.
    pub fn retryable(&self) -> bool {
        match self {
            GenerateError::Validation(_) | GenerateError::Extraction { .. } => false,
            GenerateError::Config(_) | GenerateError::PayloadTooLarge { .. } => false,
            GenerateError::Upstream { status, .. } => *status >= 500 || *status == 429,
            GenerateError::Network(_)
            | GenerateError::Serialization(_)
            | GenerateError::Storage(_)
            | GenerateError::Busy(_) => true,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        GenerateError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(e: serde_json::Error) -> Self {
        GenerateError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(e: std::io::Error) -> Self {
        GenerateError::Storage(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_retryable() {
        let err = |status| GenerateError::Upstream {
            status,
            body: String::new(),
        };
        assert!(err(503).retryable());
        assert!(err(500).retryable());
        assert!(err(429).retryable());
        assert!(!err(400).retryable());
        assert!(!err(404).retryable());
    }

    #[test]
    fn test_local_errors_not_retryable() {
        assert!(!GenerateError::Validation("Prompt is required".into()).retryable());
        assert!(!GenerateError::Extraction {
            response: serde_json::json!({})
        }
        .retryable());
        assert!(GenerateError::Network("timed out".into()).retryable());
    }

    #[test]
    fn test_upstream_display() {
        let err = GenerateError::Upstream {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "API returned 503: overloaded");
    }
}
