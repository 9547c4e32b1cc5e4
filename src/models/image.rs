use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ASPECT_RATIO: &str = "square";
pub const DEFAULT_QUALITY: &str = "standard";
pub const DEFAULT_MODEL: &str = "replicate/black-forest-labs/flux-1.1-pro";

/// Body of `POST /api/generate`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Settings with the server-side defaults filled in. An explicit JSON `null`
    /// reads as an omitted field and gets the default too.
    pub fn resolved_settings(&self) -> ResolvedSettings {
        ResolvedSettings {
            style: self.style.clone().unwrap_or_default(),
            aspect_ratio: self
                .aspect_ratio
                .clone()
                .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string()),
            quality: self
                .quality
                .clone()
                .unwrap_or_else(|| DEFAULT_QUALITY.to_string()),
            model: self
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

/// Settings actually applied to a generation, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSettings {
    pub style: String,
    pub aspect_ratio: String,
    pub quality: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub image_url: String,
    /// The enhanced prompt that was sent to the backend.
    pub prompt: String,
    pub original_prompt: String,
    pub settings: ResolvedSettings,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A finished generation as kept by the studio and its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub settings: ImageSettings,
}

impl GeneratedImage {
    pub fn new(url: impl Into<String>, prompt: impl Into<String>, settings: ImageSettings) -> Self {
        // Millisecond precision, same as the persisted form.
        let timestamp = Utc::now().trunc_subsecs(3);
        Self {
            id: new_image_id(timestamp),
            url: url.into(),
            prompt: prompt.into(),
            timestamp,
            settings,
        }
    }
}

/// `img_<millis>_<9 random chars>`
fn new_image_id(at: DateTime<Utc>) -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("img_{}_{}", at.timestamp_millis(), &random[..9])
}
