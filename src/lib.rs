pub mod config;
pub mod error;
pub mod generation;
pub mod logger;
pub mod models;
pub mod prompt;
#[cfg(feature = "server")]
pub mod server;
pub mod studio;

pub use config::{BackendConfig, Config};
pub use error::{GenerateError, Result};
pub use generation::{
    extract_image_url, HttpImageBackend, ImageBackend, ImageGenerator, ImageService,
};
pub use models::*;
pub use prompt::{enhance_prompt, route_model, vendor_style_phrase};
pub use studio::{FileHistoryStore, GenerationForm, HistoryStore, MemoryHistoryStore, Studio};
