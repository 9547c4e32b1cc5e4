use crate::models::{
    GenerateRequest, ImageSettings, DEFAULT_ASPECT_RATIO, DEFAULT_MODEL, DEFAULT_QUALITY,
};

/// What the user is currently composing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationForm {
    pub prompt: String,
    pub style: String,
    pub aspect_ratio: String,
    pub quality: String,
    pub model: String,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            style: String::new(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            quality: DEFAULT_QUALITY.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl GenerationForm {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn append_suggestion(&mut self, suggestion: &str) {
        if self.prompt.is_empty() {
            self.prompt = suggestion.to_string();
        } else {
            self.prompt = format!("{}, {}", self.prompt, suggestion);
        }
    }

    pub fn select_style(&mut self, style: impl Into<String>) {
        self.style = style.into();
    }

    pub fn clear_style(&mut self) {
        self.style.clear();
    }

    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest::new(self.prompt.trim())
            .with_style(self.style.clone())
            .with_aspect_ratio(self.aspect_ratio.clone())
            .with_quality(self.quality.clone())
            .with_model(self.model.clone())
    }

    pub fn settings(&self) -> ImageSettings {
        ImageSettings {
            style: Some(self.style.clone()),
            aspect_ratio: Some(self.aspect_ratio.clone()),
            quality: Some(self.quality.clone()),
            model: Some(self.model.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_suggestion() {
        let mut form = GenerationForm::default();
        form.append_suggestion("golden hour lighting");
        assert_eq!(form.prompt, "golden hour lighting");
        form.append_suggestion("misty morning");
        assert_eq!(form.prompt, "golden hour lighting, misty morning");
    }

    #[test]
    fn test_request_is_trimmed() {
        let mut form = GenerationForm::new("  a bridge ");
        form.select_style("neon");
        let request = form.to_request();
        assert_eq!(request.prompt.as_deref(), Some("a bridge"));
        assert_eq!(request.style.as_deref(), Some("neon"));
        assert_eq!(request.quality.as_deref(), Some("standard"));

        form.clear_style();
        assert_eq!(form.settings().style.as_deref(), Some(""));
    }
}
