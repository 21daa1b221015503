//! Gaussian blur with kernel-size-derived sigma

use crate::io::error::{Result, invalid_parameter};
use image::{RgbImage, imageops};

/// Apply a square Gaussian smoothing kernel of side length `kernel_size`
///
/// The kernel side must be a positive odd integer; even values are rounded
/// up to the next odd value. The standard deviation is derived from the
/// kernel size with the conventional auto-sigma formula.
///
/// # Errors
///
/// Returns `InvalidParameter` if `kernel_size` is zero.
pub fn gaussian_blur(image: &RgbImage, kernel_size: u32) -> Result<RgbImage> {
    if kernel_size == 0 {
        return Err(invalid_parameter(
            "kernel_size",
            &kernel_size,
            &"must be a positive odd integer",
        ));
    }

    let odd_kernel = if kernel_size % 2 == 0 {
        kernel_size + 1
    } else {
        kernel_size
    };

    Ok(imageops::blur(image, sigma_for_kernel(odd_kernel)))
}

// Matches the sigma a kernel-size-only call conventionally implies
fn sigma_for_kernel(kernel_size: u32) -> f32 {
    0.3f32.mul_add(((kernel_size - 1) as f32).mul_add(0.5, -1.0), 0.8)
}
