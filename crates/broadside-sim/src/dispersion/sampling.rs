//! Monte-Carlo hit sampling on the dispersion ellipse.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::distributions::Distribution;
use rand::Rng;

use broadside_core::constants::DISPERSION_LOG_SCALE;
use broadside_core::error::SimError;

use super::normal::truncated_quantile;

/// Normal(0, 1/sigma) restricted to [-1, 1].
///
/// Models the radial aim offset as a fraction of the ellipse radius. Draws
/// invert the truncated CDF directly, so each sample costs one uniform draw
/// however small sigma is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedGaussian {
    sigma: f64,
}

impl AdjustedGaussian {
    pub fn new(sigma: f64) -> Result<Self, SimError> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(SimError::InvalidSigma(sigma));
        }
        Ok(Self { sigma })
    }
}

impl Distribution<f64> for AdjustedGaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        truncated_quantile(rng.gen::<f64>(), self.sigma)
    }
}

/// Flatten shots that fall short of the aim point (positive y).
pub fn compress_short(y: f64) -> f64 {
    if y > 0.0 {
        DISPERSION_LOG_SCALE * (y / DISPERSION_LOG_SCALE + 1.0).ln()
    } else {
        y
    }
}

/// One simulated hit on the real impact plane, in metres from the aim point.
pub fn sample_hit<R: Rng + ?Sized>(
    rng: &mut R,
    offset: &AdjustedGaussian,
    horizontal_radius: f64,
    vertical_radius: f64,
) -> DVec2 {
    let theta = rng.gen_range(0.0..TAU);
    let len = offset.sample(rng);
    let x = len * horizontal_radius * theta.cos();
    let y = len * vertical_radius * theta.sin();
    DVec2::new(x, compress_short(y))
}
