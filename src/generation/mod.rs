pub mod backend;
pub mod extract;
pub mod service;

pub use backend::{HttpImageBackend, ImageBackend};
pub use extract::extract_image_url;
pub use service::{ImageGenerator, ImageService};
