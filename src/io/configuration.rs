//! Pipeline constants and runtime configuration defaults

// Parameter derivation constants. These produce a pseudo-diverse but fully
// deterministic spread of outputs across a bounded variation count; changing
// any of them changes every generated asset.
/// Hue shift step per variation index, in 8-bit half-range hue units
pub const HUE_SHIFT_STEP: u32 = 7;
/// Saturation shift step per variation index
pub const SATURATION_SHIFT_STEP: u32 = 10;
/// Upper bound (exclusive) for derived saturation shifts
pub const SATURATION_SHIFT_SPAN: u32 = 100;
/// Noise standard deviation step per variation index
pub const NOISE_LEVEL_STEP: u32 = 30;
/// Upper bound (exclusive) for derived noise levels
pub const NOISE_LEVEL_SPAN: u32 = 100;

/// Blur kernel side length used every third variation
pub const WIDE_BLUR_KERNEL: u32 = 11;
/// Blur kernel side length used for all other variations
pub const NARROW_BLUR_KERNEL: u32 = 9;
/// A variation uses the wide blur kernel when its index is a multiple of this
pub const WIDE_BLUR_INTERVAL: u32 = 3;

// Gate intervals for the optional transform steps
/// A variation blends with a random peer when its index is a multiple of this
pub const BLEND_INTERVAL: u32 = 5;
/// A variation is converted to grayscale when its index is a multiple of this
pub const GRAYSCALE_INTERVAL: u32 = 6;
/// A variation is saturation-maximized when its index is a multiple of this
pub const MAX_SATURATE_INTERVAL: u32 = 7;

/// Wraparound period of the 8-bit half-range hue encoding
pub const HUE_PERIOD: u32 = 180;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible peer selection and noise
pub const DEFAULT_SEED: u64 = 42;

/// Default number of variations generated per base texture
pub const DEFAULT_VARIATION_COUNT: u32 = 25;

/// Default weight of the working image when blending with a peer
pub const DEFAULT_BLEND_ALPHA: f64 = 0.5;

// Output settings
/// Infix between the texture name and the variation index in output filenames
pub const OUTPUT_INFIX: &str = "_Variation_";
/// Directory created beside the input when no output directory is given
pub const DEFAULT_OUTPUT_DIR: &str = "variations";
