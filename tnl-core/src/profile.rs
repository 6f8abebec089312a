//! Thumbnail profiles and orientation classification
//!
//! The console accepts two thumbnail shapes: a wide banner (720x81) and a
//! normal 4:3 screenshot (320x240). When the caller does not say which one an
//! image is meant for, the aspect ratio decides.

use crate::error::{Result, TnlError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target shape of a fitted thumbnail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageProfile {
    Wide,
    Normal,
}

impl ImageProfile {
    pub const ALL: [ImageProfile; 2] = [ImageProfile::Wide, ImageProfile::Normal];

    /// Pixel dimensions `(width, height)`
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            ImageProfile::Wide => (720, 81),
            ImageProfile::Normal => (320, 240),
        }
    }

    /// Nominal aspect ratio (width / height)
    pub fn aspect_ratio(self) -> f64 {
        let (w, h) = self.dimensions();
        w as f64 / h as f64
    }

    /// Tolerance around the nominal aspect ratio used by auto classification
    pub const fn threshold(self) -> f64 {
        match self {
            ImageProfile::Wide => 3.5,
            ImageProfile::Normal => 0.3,
        }
    }

    /// Lower bound of the classification window
    pub fn low(self) -> f64 {
        self.aspect_ratio() - self.threshold()
    }

    /// Upper bound of the classification window
    pub fn high(self) -> f64 {
        self.aspect_ratio() + self.threshold()
    }

    /// Whether `aspect` falls inside this profile's window (inclusive)
    pub fn accepts(self, aspect: f64) -> bool {
        aspect >= self.low() && aspect <= self.high()
    }

    /// Whether an image of `width` x `height` already has this profile's size
    pub fn matches(self, width: u32, height: u32) -> bool {
        self.dimensions() == (width, height)
    }

    /// Pick a profile for an image of the given aspect ratio.
    ///
    /// Falls back to a fixed comparison when the ratio lies outside both
    /// windows: Wide unless `(wide_low - a) > (normal_high + a)`.
    pub fn classify(aspect: f64) -> ImageProfile {
        let wide = ImageProfile::Wide.accepts(aspect);
        let normal = ImageProfile::Normal.accepts(aspect);
        match (wide, normal) {
            (true, false) => ImageProfile::Wide,
            (false, true) => ImageProfile::Normal,
            _ => {
                if ImageProfile::Wide.low() - aspect > ImageProfile::Normal.high() + aspect {
                    ImageProfile::Normal
                } else {
                    ImageProfile::Wide
                }
            }
        }
    }
}

impl fmt::Display for ImageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        match self {
            ImageProfile::Wide => write!(f, "wide ({}x{})", w, h),
            ImageProfile::Normal => write!(f, "normal ({}x{})", w, h),
        }
    }
}

/// Which profile a caller wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Wide,
    Normal,
    #[default]
    Auto,
}

impl Orientation {
    /// Profile named explicitly, if any
    pub fn profile(self) -> Option<ImageProfile> {
        match self {
            Orientation::Wide => Some(ImageProfile::Wide),
            Orientation::Normal => Some(ImageProfile::Normal),
            Orientation::Auto => None,
        }
    }

    /// Resolve to a concrete profile for an image of `width` x `height`
    pub fn resolve(self, width: u32, height: u32) -> Result<ImageProfile> {
        if let Some(profile) = self.profile() {
            return Ok(profile);
        }
        if width == 0 || height == 0 {
            return Err(TnlError::invalid_data(format!(
                "Cannot classify image with zero dimension: {}x{}",
                width, height
            )));
        }
        Ok(ImageProfile::classify(width as f64 / height as f64))
    }

    /// Whether an image of this size may skip re-encoding under this request
    pub fn accepts_dimensions(self, width: u32, height: u32) -> bool {
        match self.profile() {
            Some(profile) => profile.matches(width, height),
            None => ImageProfile::ALL.iter().any(|p| p.matches(width, height)),
        }
    }
}

impl FromStr for Orientation {
    type Err = TnlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wide" => Ok(Orientation::Wide),
            "normal" => Ok(Orientation::Normal),
            "auto" => Ok(Orientation::Auto),
            other => Err(TnlError::config(format!(
                "Unknown orientation '{}', expected wide, normal or auto",
                other
            ))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Wide => "wide",
            Orientation::Normal => "normal",
            Orientation::Auto => "auto",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_windows() {
        assert!((ImageProfile::Wide.low() - 5.3889).abs() < 1e-3);
        assert!((ImageProfile::Wide.high() - 12.3889).abs() < 1e-3);
        assert!((ImageProfile::Normal.low() - 1.0333).abs() < 1e-3);
        assert!((ImageProfile::Normal.high() - 1.6333).abs() < 1e-3);
    }

    #[test]
    fn test_classify_inside_windows() {
        assert_eq!(ImageProfile::classify(720.0 / 81.0), ImageProfile::Wide);
        assert_eq!(ImageProfile::classify(6.0), ImageProfile::Wide);
        assert_eq!(ImageProfile::classify(4.0 / 3.0), ImageProfile::Normal);
        assert_eq!(ImageProfile::classify(1.1), ImageProfile::Normal);
    }

    #[test]
    fn test_classify_tie_break() {
        // 16:9 sits between the windows and falls to Normal
        assert_eq!(ImageProfile::classify(1280.0 / 720.0), ImageProfile::Normal);
        // 2:1 is close enough to flip to Wide
        assert_eq!(ImageProfile::classify(2.0), ImageProfile::Wide);
        // portrait images go to Normal
        assert_eq!(ImageProfile::classify(0.5), ImageProfile::Normal);
        // extremely wide images go to Wide
        assert_eq!(ImageProfile::classify(20.0), ImageProfile::Wide);
    }

    #[test]
    fn test_orientation_resolve() {
        assert_eq!(
            Orientation::Normal.resolve(720, 81).unwrap(),
            ImageProfile::Normal
        );
        assert_eq!(
            Orientation::Auto.resolve(720, 81).unwrap(),
            ImageProfile::Wide
        );
        assert!(Orientation::Auto.resolve(0, 10).is_err());
    }

    #[test]
    fn test_accepts_dimensions() {
        assert!(Orientation::Auto.accepts_dimensions(320, 240));
        assert!(Orientation::Auto.accepts_dimensions(720, 81));
        assert!(!Orientation::Wide.accepts_dimensions(320, 240));
        assert!(!Orientation::Normal.accepts_dimensions(321, 240));
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("WIDE".parse::<Orientation>().unwrap(), Orientation::Wide);
        assert_eq!("auto".parse::<Orientation>().unwrap(), Orientation::Auto);
        assert!("square".parse::<Orientation>().is_err());
    }
}
