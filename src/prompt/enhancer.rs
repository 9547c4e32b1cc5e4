use super::router::vendor_style_phrase;

pub const MOBILE_FORMAT_PHRASE: &str = ", vertical storytelling format, designed for mobile viewing, phone-optimized composition, portrait mode framing, tall narrow format, social media content style";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Standard,
    High,
}

impl Quality {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "standard" => Some(Quality::Standard),
            "high" => Some(Quality::High),
            _ => None,
        }
    }

    pub fn modifier(&self) -> &'static str {
        match self {
            Quality::High => ", ultra high quality, 8k resolution, masterpiece",
            Quality::Standard => ", high quality, detailed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait,
    Mobile,
    Landscape,
    Widescreen,
}

impl AspectRatio {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "square" => Some(AspectRatio::Square),
            "portrait" => Some(AspectRatio::Portrait),
            "mobile" => Some(AspectRatio::Mobile),
            "landscape" => Some(AspectRatio::Landscape),
            "widescreen" => Some(AspectRatio::Widescreen),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => {
                ", vertical composition, portrait orientation, 3:4 aspect ratio"
            }
            AspectRatio::Mobile => ", TikTok vertical format, 9:16 aspect ratio, tall vertical composition, mobile phone screen format, social media optimized, vertical phone orientation, full height vertical framing",
            AspectRatio::Landscape => {
                ", horizontal composition, landscape orientation, 4:3 aspect ratio"
            }
            AspectRatio::Square => ", square composition, balanced framing, 1:1 aspect ratio",
            AspectRatio::Widescreen => ", cinematic wide shot, panoramic view, 16:9 aspect ratio",
        }
    }
}

/// Modifier phrase for a style preset key, `None` for unknown keys.
pub fn style_modifier(style: &str) -> Option<&'static str> {
    let phrase = match style {
        "photorealistic" => "photorealistic, ultra-realistic, professional photography, perfect lighting, high detail",
        "portrait" => "professional portrait photography, studio lighting, bokeh background, sharp focus",
        "cinematic" => "cinematic lighting, movie-like composition, dramatic shadows, film quality",
        "macro" => "macro photography, extreme close-up, high detail, sharp focus, shallow depth of field",
        "artistic" => "artistic, creative, stylized, beautiful art, expressive",
        "abstract" => "abstract art, non-representational, conceptual, modern, contemporary",
        "impressionist" => "impressionist style, soft brush strokes, light and color, painterly",
        "surreal" => "surreal, dreamlike, bizarre, fantastical, imaginative, Salvador Dali style",
        "digital-art" => "digital art, modern digital illustration, computer graphics, polished",
        "pixel-art" => "8-bit pixel art, retro gaming style, pixelated, nostalgic",
        "vector" => "vector graphics, clean geometric shapes, flat design, modern",
        "neon" => "neon lights, glowing colors, cyberpunk aesthetic, electric, vibrant",
        "renaissance" => "Renaissance painting style, classical art, chiaroscuro, masterpiece",
        "baroque" => "Baroque style, dramatic lighting, rich details, ornate, golden age",
        "oil-painting" => "traditional oil painting, rich textures, painterly, classical technique",
        "watercolor" => "watercolor painting, soft flowing colors, transparent washes, delicate",
        "minimalist" => "minimalist, clean, simple, elegant design, less is more",
        "cyberpunk" => "cyberpunk, neon, futuristic, sci-fi, dystopian, high-tech",
        "vaporwave" => "vaporwave, synthwave, retro aesthetic, 80s nostalgia, neon pink and blue",
        "steampunk" => "steampunk, Victorian-era industrial, brass gears, mechanical, vintage technology",
        "fantasy" => "fantasy art, magical, ethereal, mystical, enchanted, otherworldly",
        "horror" => "horror, dark, spooky, atmospheric, gothic, eerie, frightening",
        "anime" => "anime style, Japanese animation, manga art, cel-shaded, stylized",
        "vintage" => "vintage style, retro, aged, nostalgic, classic, timeless",
        _ => return None,
    };
    Some(phrase)
}

/// Builds the prompt sent to the backend.
///
/// `prompt` must already be validated as non-blank; it is trimmed here. Phrases are
/// appended in a fixed order: style, quality, aspect ratio, the extra vertical block
/// for `mobile`, then the cosmetic vendor phrase for the UI model. Unknown keys add
/// nothing.
pub fn enhance_prompt(
    prompt: &str,
    style: &str,
    quality: &str,
    aspect_ratio: &str,
    model: &str,
) -> String {
    let mut enhanced = prompt.trim().to_string();

    if let Some(modifier) = style_modifier(style) {
        enhanced.push_str(", ");
        enhanced.push_str(modifier);
    }

    if let Some(quality) = Quality::from_key(quality) {
        enhanced.push_str(quality.modifier());
    }

    if let Some(aspect) = AspectRatio::from_key(aspect_ratio) {
        enhanced.push_str(aspect.phrase());
        if aspect == AspectRatio::Mobile {
            enhanced.push_str(MOBILE_FORMAT_PHRASE);
        }
    }

    if let Some(vendor) = vendor_style_phrase(model) {
        enhanced.push_str(vendor);
    }

    enhanced
}
