//! Variation parameter derivation and generation orchestration

/// Per-variation execution of the transform chain
pub mod generator;
/// Deterministic parameter derivation from variation indices
pub mod parameters;
/// Read-only pool of named base textures
pub mod pool;

pub use generator::VariationGenerator;
pub use parameters::VariationParameters;
pub use pool::{BaseTexture, TexturePool};
