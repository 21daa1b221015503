//! Additive Gaussian noise over image channels

use crate::math::gaussian;
use image::{Rgb, RgbImage};
use rand::Rng;

/// Add zero-mean Gaussian noise with standard deviation `noise_level` to
/// every channel of every pixel
///
/// Arithmetic saturates at the channel range rather than wrapping. A noise
/// level of zero leaves the image unchanged.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    image: &RgbImage,
    noise_level: f64,
    rng: &mut R,
) -> RgbImage {
    if noise_level <= 0.0 {
        return image.clone();
    }

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let Rgb(channels) = pixel;
        for channel in channels.iter_mut() {
            let noisy = f64::from(*channel) + gaussian::normal(rng, 0.0, noise_level);
            *channel = noisy.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
