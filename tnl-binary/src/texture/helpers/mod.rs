//! Texture helper utilities

pub mod export;
pub mod imageops;

pub use export::TextureExporter;
pub use imageops::ImageOps;
