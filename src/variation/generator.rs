//! Orchestration of the per-variation transform chain

use crate::io::error::{Result, invalid_parameter};
use crate::transform::{
    add_gaussian_noise, blend, gaussian_blur, maximize_saturation, shift_hue, shift_saturation,
    to_grayscale_preserving_channels,
};
use crate::variation::parameters::VariationParameters;
use crate::variation::pool::TexturePool;
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};

/// Applies the fixed transform chain for each variation index
///
/// Owns the seeded random source used for peer selection and noise, so a
/// run is reproducible for a given seed.
pub struct VariationGenerator {
    blend_alpha: f64,
    rng: StdRng,
}

impl VariationGenerator {
    /// Create a generator with the given blend alpha and random seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `blend_alpha` lies outside [0, 1].
    pub fn new(blend_alpha: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&blend_alpha) {
            return Err(invalid_parameter(
                "blend_alpha",
                &blend_alpha,
                &"must lie within [0, 1]",
            ));
        }

        Ok(Self {
            blend_alpha,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Render one variation of a base texture
    ///
    /// The chain order is fixed: hue shift, saturation shift, noise, blur,
    /// then the gated steps (peer blend, grayscale, saturation
    /// maximization). Later steps act on the output of earlier ones, so the
    /// order must not change. The shared base is never mutated.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when a blend peer differs in shape from
    /// the working image; blur kernel validation failures propagate.
    pub fn render_variation(
        &mut self,
        base: &RgbImage,
        pool: &TexturePool,
        index: u32,
    ) -> Result<RgbImage> {
        let parameters = VariationParameters::derive(index);

        let mut working = shift_hue(base, parameters.hue_shift);
        working = shift_saturation(&working, parameters.saturation_shift);
        working = add_gaussian_noise(&working, parameters.noise_level, &mut self.rng);
        working = gaussian_blur(&working, parameters.blur_kernel_size)?;

        if parameters.blend_with_peer {
            if let Some(peer) = pool.random_peer(&mut self.rng) {
                working = blend(&working, peer, self.blend_alpha)?;
            }
        }

        if parameters.to_grayscale {
            working = to_grayscale_preserving_channels(&working);
        }

        // Runs after grayscale when both gates fire; a grayscale image has
        // no chroma left, so it stays gray.
        if parameters.max_saturate {
            working = maximize_saturation(&working);
        }

        Ok(working)
    }
}
