use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StylePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub popular: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub provider: &'static str,
    pub category: &'static str,
    pub speed: &'static str,
    pub quality: &'static str,
    pub specialty: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelCategory {
    pub category: &'static str,
    pub provider: &'static str,
    pub description: &'static str,
    pub models: Vec<ModelInfo>,
}

const fn style(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    popular: bool,
) -> StylePreset {
    StylePreset {
        id,
        name,
        description,
        category,
        popular,
    }
}

pub static STYLE_PRESETS: [StylePreset; 24] = [
    style("photorealistic", "Photorealistic", "Ultra-realistic, professional photography", "Photography", true),
    style("portrait", "Portrait", "Studio lighting, bokeh background", "Photography", false),
    style("cinematic", "Cinematic", "Movie-like, dramatic lighting", "Photography", true),
    style("macro", "Macro", "Extreme close-up, high detail", "Photography", false),
    style("artistic", "Artistic", "Creative, stylized, expressive", "Artistic", true),
    style("abstract", "Abstract", "Non-representational, modern", "Artistic", false),
    style("impressionist", "Impressionist", "Soft brush strokes, painterly", "Artistic", false),
    style("surreal", "Surreal", "Dreamlike, fantastical, Dali-style", "Artistic", false),
    style("digital-art", "Digital Art", "Modern digital illustration", "Digital", true),
    style("pixel-art", "Pixel Art", "8-bit retro gaming style", "Digital", false),
    style("vector", "Vector", "Clean geometric, flat design", "Digital", false),
    style("neon", "Neon", "Glowing colors, cyberpunk", "Digital", true),
    style("renaissance", "Renaissance", "Classical art, chiaroscuro", "Classic", false),
    style("baroque", "Baroque", "Dramatic lighting, ornate", "Classic", false),
    style("oil-painting", "Oil Painting", "Rich textures, classical", "Classic", false),
    style("watercolor", "Watercolor", "Soft flowing colors, delicate", "Classic", false),
    style("minimalist", "Minimalist", "Clean, simple, elegant", "Modern", true),
    style("cyberpunk", "Cyberpunk", "Neon, futuristic, dystopian", "Modern", true),
    style("vaporwave", "Vaporwave", "80s nostalgia, neon pink/blue", "Modern", false),
    style("steampunk", "Steampunk", "Victorian industrial, brass gears", "Modern", false),
    style("fantasy", "Fantasy", "Magical, ethereal, mystical", "Themed", true),
    style("horror", "Horror", "Dark, spooky, gothic", "Themed", false),
    style("anime", "Anime", "Japanese animation, cel-shaded", "Themed", false),
    style("vintage", "Vintage", "Retro, aged, nostalgic", "Themed", false),
];

pub static PROMPT_SUGGESTIONS: [&str; 24] = [
    "golden hour lighting",
    "soft natural lighting",
    "dramatic shadows",
    "neon lights",
    "cinematic lighting",
    "ethereal glow",
    "hyperrealistic",
    "oil painting style",
    "watercolor effect",
    "digital art",
    "vintage aesthetic",
    "minimalist design",
    "misty morning",
    "urban cityscape",
    "cozy interior",
    "epic landscape",
    "magical forest",
    "futuristic city",
    "highly detailed",
    "professional photography",
    "8k ultra HD",
    "masterpiece quality",
    "award winning",
    "trending on artstation",
];

#[allow(clippy::too_many_arguments)]
const fn model(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    badge: &'static str,
    provider: &'static str,
    category: &'static str,
    speed: &'static str,
    quality: &'static str,
    specialty: &'static str,
) -> ModelInfo {
    ModelInfo {
        id,
        name,
        description,
        badge,
        provider,
        category,
        speed,
        quality,
        specialty,
        available: true,
    }
}

pub static MODEL_CATALOG: [ModelInfo; 9] = [
    model("dall-e-3", "DALL-E 3", "Latest OpenAI model with superior quality and prompt adherence", "Premium", "OpenAI", "OpenAI", "~15s", "Ultra High", "Photorealism"),
    model("dall-e-2", "DALL-E 2", "Reliable previous generation with consistent results", "Stable", "OpenAI", "OpenAI", "~10s", "High", "General Purpose"),
    model("google/imagen-3.0-generate-001", "Imagen 3.0", "Google's latest with exceptional photorealistic rendering", "New", "Google", "Google AI", "~12s", "Ultra High", "Photography"),
    model("google/imagen-2.0-generate-001", "Imagen 2.0", "Advanced model with excellent text integration", "Popular", "Google", "Google AI", "~10s", "High", "Text + Images"),
    model("replicate/black-forest-labs/flux-1.1-pro", "FLUX 1.1 Pro", "Ultra-high quality open-source model with stunning results", "Ultra HD", "FLUX", "Replicate (FLUX)", "~11s", "Ultra High", "Artistic"),
    model("replicate/black-forest-labs/flux-dev", "FLUX Dev", "Development version optimized for fast generation", "Fast", "FLUX", "Replicate (FLUX)", "~8s", "High", "Quick Iterations"),
    model("replicate/black-forest-labs/flux-schnell", "FLUX Schnell", "Fastest FLUX variant for rapid prototyping", "Lightning", "FLUX", "Replicate (FLUX)", "~5s", "Good", "Speed"),
    model("stability-ai/stable-diffusion-3-medium", "SD3 Medium", "Latest Stability AI with improved composition and text", "Latest", "Stability", "Stability AI", "~9s", "High", "Composition"),
    model("stability-ai/stable-diffusion-xl-base-1.0", "SDXL Base", "High-resolution model with detailed outputs", "HD", "Stability", "Stability AI", "~13s", "High", "Resolution"),
];

const MODEL_CATEGORIES: [(&str, &str, &str); 4] = [
    ("OpenAI", "OpenAI", "ChatGPT's advanced image generation models"),
    ("Google AI", "Google", "Google's cutting-edge Imagen technology"),
    ("Replicate (FLUX)", "FLUX", "Open-source state-of-the-art models"),
    ("Stability AI", "Stability", "Professional-grade Stable Diffusion models"),
];

pub fn find_style(id: &str) -> Option<&'static StylePreset> {
    STYLE_PRESETS.iter().find(|s| s.id == id)
}

pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODEL_CATALOG.iter().find(|m| m.id == id)
}

/// First eight styles flagged as popular, in catalog order.
pub fn popular_styles() -> Vec<&'static StylePreset> {
    STYLE_PRESETS.iter().filter(|s| s.popular).take(8).collect()
}

pub fn styles_in_category(category: &str) -> Vec<&'static StylePreset> {
    STYLE_PRESETS
        .iter()
        .filter(|s| s.category == category)
        .collect()
}

pub fn model_categories() -> Vec<ModelCategory> {
    MODEL_CATEGORIES
        .iter()
        .map(|&(category, provider, description)| ModelCategory {
            category,
            provider,
            description,
            models: MODEL_CATALOG
                .iter()
                .filter(|m| m.category == category)
                .copied()
                .collect(),
        })
        .collect()
}
