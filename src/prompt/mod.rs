pub mod enhancer;
pub mod router;

pub use enhancer::{enhance_prompt, style_modifier, AspectRatio, Quality};
pub use router::{route_model, vendor_style_phrase, DEFAULT_BACKEND_MODEL};
