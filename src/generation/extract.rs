use crate::error::{GenerateError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[^\s]+\.(?:jpg|jpeg|png|gif|webp)").expect("valid image url regex")
});

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Null, `false`, zero and the empty string count as "no content".
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Finds an image URL in a backend reply whose shape is not pinned down.
///
/// Tried in order: the first chat choice's message content (an embedded image URL,
/// or the content itself if it starts with `http`), a top-level `url` field, a
/// top-level `image_url` field, and finally a bare JSON string. When a choice
/// content is present the later shapes are not consulted.
///
/// Content that is present but not a string (content parts, objects) cannot be
/// searched and is reported as a malformed reply.
pub fn extract_image_url(reply: &Value) -> Result<Option<String>> {
    let content = &reply["choices"][0]["message"]["content"];
    if is_present(content) {
        let content = content.as_str().ok_or_else(|| {
            GenerateError::Serialization(format!("Unexpected message content: {}", content))
        })?;
        if let Some(m) = IMAGE_URL.find(content) {
            return Ok(Some(m.as_str().to_string()));
        }
        if content.starts_with("http") {
            return Ok(Some(content.trim().to_string()));
        }
        return Ok(None);
    }

    if let Some(url) = non_empty_str(&reply["url"]) {
        return Ok(Some(url.to_string()));
    }

    if let Some(url) = non_empty_str(&reply["image_url"]) {
        return Ok(Some(url.to_string()));
    }

    Ok(match reply {
        Value::String(s) if s.starts_with("http") => Some(s.clone()),
        _ => None,
    })
}
