//! TNL Core
//!
//! Shared building blocks for TNL thumbnail conversion: the error type,
//! layout constants, thumbnail profiles and conversion settings.

pub mod config;
pub mod constants;
pub mod error;
pub mod profile;

// Re-export main types
pub use config::{ConverterConfig, FitOptions};
pub use constants::*;
pub use error::{Result, TnlError};
pub use profile::{ImageProfile, Orientation};
