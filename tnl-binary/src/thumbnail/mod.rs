//! JPEG thumbnail fitting
//!
//! - `codec` - the JPEG decode/encode collaborator
//! - `fitter` - profile selection, resizing and the quality loop

pub mod codec;
pub mod fitter;

pub use codec::{ImageJpegCodec, JpegCodec};
pub use fitter::{FittedThumbnail, JpegFitter, fit_to_profile};
