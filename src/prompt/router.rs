use crate::models::DEFAULT_MODEL;

/// Backend model used when a UI model id has no entry.
pub const DEFAULT_BACKEND_MODEL: &str = "replicate/black-forest-labs/flux-1.1-pro";

/// UI model id → backend model id. Every choice currently lands on FLUX 1.1 Pro.
static MODEL_ROUTES: [(&str, &str); 9] = [
    ("dall-e-3", DEFAULT_BACKEND_MODEL),
    ("dall-e-2", DEFAULT_BACKEND_MODEL),
    ("google/imagen-3.0-generate-001", DEFAULT_BACKEND_MODEL),
    ("google/imagen-2.0-generate-001", DEFAULT_BACKEND_MODEL),
    ("stability-ai/stable-diffusion-3-medium", DEFAULT_BACKEND_MODEL),
    ("stability-ai/stable-diffusion-xl-base-1.0", DEFAULT_BACKEND_MODEL),
    (DEFAULT_MODEL, DEFAULT_BACKEND_MODEL),
    ("replicate/black-forest-labs/flux-dev", DEFAULT_BACKEND_MODEL),
    ("replicate/black-forest-labs/flux-schnell", DEFAULT_BACKEND_MODEL),
];

pub fn route_model(ui_model: &str) -> &'static str {
    MODEL_ROUTES
        .iter()
        .find(|(ui, _)| *ui == ui_model)
        .map(|(_, backend)| *backend)
        .unwrap_or(DEFAULT_BACKEND_MODEL)
}

/// All backend ids the router can produce.
pub fn backend_models() -> Vec<&'static str> {
    let mut models: Vec<&'static str> = MODEL_ROUTES.iter().map(|(_, b)| *b).collect();
    models.push(DEFAULT_BACKEND_MODEL);
    models.sort_unstable();
    models.dedup();
    models
}

/// Cosmetic phrase keyed on the UI model id, matched by substring in priority order.
pub fn vendor_style_phrase(ui_model: &str) -> Option<&'static str> {
    if ui_model.contains("dall-e-3") {
        Some(", DALL-E 3 style, premium quality, highly detailed, professional")
    } else if ui_model.contains("dall-e-2") {
        Some(", DALL-E 2 style, creative, artistic interpretation")
    } else if ui_model.contains("imagen") {
        Some(", Google Imagen style, photorealistic, natural lighting")
    } else if ui_model.contains("stable-diffusion") || ui_model.contains("stability") {
        Some(", Stable Diffusion style, artistic, creative composition")
    } else if ui_model.contains("flux-dev") {
        Some(", FLUX Dev style, fast generation, creative")
    } else if ui_model.contains("flux-schnell") {
        Some(", FLUX Schnell style, quick iteration, efficient")
    } else {
        None
    }
}
