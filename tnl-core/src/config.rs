//! Conversion settings
//!
//! Settings can be built in code or read from a YAML file:
//!
//! ```yaml
//! orientation: auto
//! clip: false
//! autocrop: false
//! export_quality: 100
//! export_autocrop: false
//! ```

use crate::constants::DEFAULT_EXPORT_QUALITY;
use crate::error::{Result, TnlError};
use crate::profile::Orientation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how a source image is fitted into a thumbnail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Requested profile, or `Auto` to classify by aspect ratio
    pub orientation: Orientation,
    /// Crop to fill the profile instead of letterboxing
    pub clip: bool,
    /// Trim uniform borders before fitting
    pub autocrop: bool,
}

impl FitOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn with_autocrop(mut self, autocrop: bool) -> Self {
        self.autocrop = autocrop;
        self
    }
}

/// Top-level converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    #[serde(flatten)]
    pub fit: FitOptions,
    /// JPEG quality used when exporting decoded raw textures
    pub export_quality: u8,
    /// Trim uniform borders from exported raw textures
    pub export_autocrop: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            fit: FitOptions::default(),
            export_quality: DEFAULT_EXPORT_QUALITY,
            export_autocrop: false,
        }
    }
}

impl ConverterConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| TnlError::config(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Serialize back to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| TnlError::config(format!("Failed to serialize configuration: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.export_quality) {
            return Err(TnlError::config(format!(
                "export_quality must be between 1 and 100, got {}",
                self.export_quality
            )));
        }
        Ok(())
    }
}
