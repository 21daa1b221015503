//! Gaussian sampling via the Box-Muller transform

use rand::Rng;

/// Draw a sample from the standard normal distribution
///
/// Uses the Box-Muller transform over two uniform draws. This keeps the
/// noise pipeline on the crate's single random source while avoiding a
/// distribution library dependency.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Map the first draw into (0, 1] so the logarithm stays finite
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();

    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Draw a sample from a normal distribution with the given mean and standard deviation
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    standard_normal(rng).mul_add(std_dev, mean)
}
