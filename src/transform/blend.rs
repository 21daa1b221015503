//! Pixelwise alpha blending of equally-sized textures

use crate::io::error::{Result, VariationError, invalid_parameter};
use image::{Rgb, RgbImage};

/// Blend two images pixelwise as `alpha * a + (1 - alpha) * b`
///
/// Each channel rounds to the nearest representable value. Operands must
/// match in shape; mismatches are an error, never a silent crop or resize.
///
/// # Errors
///
/// Returns `InvalidParameter` when `alpha` lies outside [0, 1] and
/// `DimensionMismatch` when the operands differ in shape.
pub fn blend(image_a: &RgbImage, image_b: &RgbImage, alpha: f64) -> Result<RgbImage> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(invalid_parameter("alpha", &alpha, &"must lie within [0, 1]"));
    }
    if image_a.dimensions() != image_b.dimensions() {
        return Err(VariationError::DimensionMismatch {
            expected: image_a.dimensions(),
            found: image_b.dimensions(),
        });
    }

    let mut out = RgbImage::new(image_a.width(), image_a.height());
    for ((out_pixel, pixel_a), pixel_b) in out
        .pixels_mut()
        .zip(image_a.pixels())
        .zip(image_b.pixels())
    {
        let Rgb(channels_a) = pixel_a;
        let Rgb(channels_b) = pixel_b;
        let Rgb(blended) = out_pixel;
        for ((out_channel, &channel_a), &channel_b) in
            blended.iter_mut().zip(channels_a).zip(channels_b)
        {
            let mixed = alpha.mul_add(
                f64::from(channel_a),
                (1.0 - alpha) * f64::from(channel_b),
            );
            *out_channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(out)
}
