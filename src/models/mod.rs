pub mod catalog;
pub mod chat;
pub mod image;

pub use catalog::*;
pub use chat::*;
pub use image::*;
