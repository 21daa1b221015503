//! Validates wraparound, clamping, identity, and boundary properties of the
//! colorspace transforms

use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use variatex::VariationError;
use variatex::transform::colorspace::rgb_to_hsv;
use variatex::transform::{
    add_gaussian_noise, blend, gaussian_blur, maximize_saturation, shift_hue, shift_saturation,
    to_grayscale_preserving_channels,
};

fn gradient_image() -> RgbImage {
    RgbImage::from_fn(8, 8, |x, y| {
        Rgb([(x * 30) as u8, (y * 30) as u8, ((x + y) * 15) as u8])
    })
}

// Shifts that differ by a whole hue period land on identical images
#[test]
fn test_hue_shift_wraps_into_period() {
    let image = gradient_image();

    assert_eq!(shift_hue(&image, 7), shift_hue(&image, 187));
    assert_eq!(shift_hue(&image, 7), shift_hue(&image, -173));
    assert_eq!(shift_hue(&image, 0), shift_hue(&image, 360));
    assert_eq!(shift_hue(&image, 0), shift_hue(&image, -180));
}

// Oversized shifts saturate at the channel bounds instead of wrapping
#[test]
fn test_saturation_shift_clamps() {
    let image = gradient_image();

    assert_eq!(
        shift_saturation(&image, 1_000),
        shift_saturation(&image, 255)
    );
    assert_eq!(
        shift_saturation(&image, -1_000),
        shift_saturation(&image, -255)
    );
}

#[test]
fn test_noise_level_zero_is_identity() {
    let image = gradient_image();
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(add_gaussian_noise(&image, 0.0, &mut rng), image);
}

#[test]
fn test_noise_perturbs_channels() {
    let image = gradient_image();
    let mut rng = StdRng::seed_from_u64(3);

    assert_ne!(add_gaussian_noise(&image, 50.0, &mut rng), image);
}

#[test]
fn test_blend_with_self_is_identity() {
    let image = gradient_image();

    assert_eq!(blend(&image, &image, 0.5).ok().as_ref(), Some(&image));
}

// Boundary alphas return one operand unchanged
#[test]
fn test_blend_boundary_alphas() {
    let image_a = gradient_image();
    let image_b = RgbImage::from_pixel(8, 8, Rgb([10, 200, 30]));

    assert_eq!(blend(&image_a, &image_b, 1.0).ok().as_ref(), Some(&image_a));
    assert_eq!(blend(&image_a, &image_b, 0.0).ok().as_ref(), Some(&image_b));
}

#[test]
fn test_blend_rejects_mismatched_shapes() {
    let image_a = gradient_image();
    let image_b = RgbImage::new(4, 4);

    let result = blend(&image_a, &image_b, 0.5);

    assert!(matches!(
        result,
        Err(VariationError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_blend_rejects_out_of_range_alpha() {
    let image = gradient_image();

    assert!(matches!(
        blend(&image, &image, 1.5),
        Err(VariationError::InvalidParameter { .. })
    ));
    assert!(matches!(
        blend(&image, &image, -0.1),
        Err(VariationError::InvalidParameter { .. })
    ));
}

#[test]
fn test_grayscale_is_idempotent() {
    let once = to_grayscale_preserving_channels(&gradient_image());
    let twice = to_grayscale_preserving_channels(&once);

    assert_eq!(once, twice);
}

#[test]
fn test_grayscale_replicates_channels() {
    let gray = to_grayscale_preserving_channels(&gradient_image());

    for pixel in gray.pixels() {
        let Rgb([r, g, b]) = *pixel;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}

// Achromatic pixels have no hue to saturate along, so gray input stays gray
#[test]
fn test_maximize_saturation_keeps_gray_unchanged() {
    let gray = to_grayscale_preserving_channels(&gradient_image());

    assert_eq!(maximize_saturation(&gray), gray);
}

#[test]
fn test_maximize_saturation_fills_chromatic_pixels() {
    let image = RgbImage::from_pixel(4, 4, Rgb([100, 50, 50]));

    let saturated = maximize_saturation(&image);

    for pixel in saturated.pixels() {
        assert_eq!(rgb_to_hsv(*pixel).s, 255);
    }
}

// An even kernel rounds up to the next odd size rather than failing
#[test]
fn test_blur_rounds_even_kernel_up() {
    let image = gradient_image();

    assert_eq!(gaussian_blur(&image, 4).ok(), gaussian_blur(&image, 5).ok());
}

#[test]
fn test_blur_rejects_zero_kernel() {
    let image = gradient_image();

    assert!(matches!(
        gaussian_blur(&image, 0),
        Err(VariationError::InvalidParameter { .. })
    ));
}

#[test]
fn test_blur_preserves_dimensions() {
    let image = gradient_image();

    if let Ok(blurred) = gaussian_blur(&image, 9) {
        assert_eq!(blurred.dimensions(), image.dimensions());
    } else {
        unreachable!("blur with a valid kernel should succeed");
    }
}
