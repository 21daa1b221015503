//! Deterministic parameter derivation from variation indices

use crate::io::configuration::{
    BLEND_INTERVAL, GRAYSCALE_INTERVAL, HUE_PERIOD, HUE_SHIFT_STEP, MAX_SATURATE_INTERVAL,
    NARROW_BLUR_KERNEL, NOISE_LEVEL_SPAN, NOISE_LEVEL_STEP, SATURATION_SHIFT_SPAN,
    SATURATION_SHIFT_STEP, WIDE_BLUR_INTERVAL, WIDE_BLUR_KERNEL,
};

/// Transform parameters for a single variation index
///
/// Carries no persisted identity; the set is a pure function of the index
/// and is recomputed on every use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariationParameters {
    /// Hue rotation in 8-bit half-range units
    pub hue_shift: i32,
    /// Additive saturation offset
    pub saturation_shift: i32,
    /// Standard deviation of the additive Gaussian noise
    pub noise_level: f64,
    /// Side length of the Gaussian blur kernel
    pub blur_kernel_size: u32,
    /// Whether this variation blends with a random peer
    pub blend_with_peer: bool,
    /// Whether this variation is converted to grayscale
    pub to_grayscale: bool,
    /// Whether this variation has its saturation maximized
    pub max_saturate: bool,
}

impl VariationParameters {
    /// Derive the parameter set for a variation index
    pub const fn derive(index: u32) -> Self {
        Self {
            hue_shift: ((index * HUE_SHIFT_STEP) % HUE_PERIOD) as i32,
            saturation_shift: ((index * SATURATION_SHIFT_STEP) % SATURATION_SHIFT_SPAN) as i32,
            noise_level: ((index * NOISE_LEVEL_STEP) % NOISE_LEVEL_SPAN) as f64,
            blur_kernel_size: if index % WIDE_BLUR_INTERVAL == 0 {
                WIDE_BLUR_KERNEL
            } else {
                NARROW_BLUR_KERNEL
            },
            blend_with_peer: index % BLEND_INTERVAL == 0,
            to_grayscale: index % GRAYSCALE_INTERVAL == 0,
            max_saturate: index % MAX_SATURATE_INTERVAL == 0,
        }
    }
}
