//! Mathematical utilities for the transform pipeline

/// Gaussian sampling for the noise transform
pub mod gaussian;
