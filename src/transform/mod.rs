//! Colorspace transforms composing the variation pipeline
//!
//! Every transform takes a reference to an image and returns a new image of
//! the same dimensions, so composed chains never alias a shared buffer.

/// Pixelwise alpha blending of equally-sized textures
pub mod blend;
/// Gaussian blur with kernel-size-derived sigma
pub mod blur;
/// HSV conversions, hue/saturation shifts, and grayscale
pub mod colorspace;
/// Additive Gaussian channel noise
pub mod noise;

pub use blend::blend;
pub use blur::gaussian_blur;
pub use colorspace::{
    maximize_saturation, shift_hue, shift_saturation, to_grayscale_preserving_channels,
};
pub use noise::add_gaussian_noise;
