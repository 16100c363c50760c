//! Standard normal helpers for the truncated aiming model.
//!
//! Everything is expressed through `erf` / `erf_inv` so that nothing
//! subtracts two nearly equal CDF values, which keeps small sigma exact.

use std::f64::consts::SQRT_2;

use statrs::function::erf::{erf, erf_inv};

/// Quantile of N(0, 1) truncated to [-sigma, sigma], scaled by 1/sigma.
///
/// `Φ⁻¹(Φ(−σ) + u·z) / σ` with `z = Φ(σ) − Φ(−σ)`, rewritten as
/// `√2 · erf⁻¹((2u − 1) · erf(σ/√2)) / σ`. The result lies in [-1, 1].
pub fn truncated_quantile(u: f64, sigma: f64) -> f64 {
    let mass = erf(sigma / SQRT_2);
    (SQRT_2 * erf_inv((2.0 * u - 1.0) * mass) / sigma).clamp(-1.0, 1.0)
}

/// Fraction of the dispersion radius that holds half the shots for a given sigma.
///
/// `Φ⁻¹(z/4 + Φ(−σ)) / −σ`, the upper quartile of the truncated offset.
/// Tends to 0.5 as sigma goes to zero.
pub fn half_hits_ratio(sigma: f64) -> f64 {
    truncated_quantile(0.75, sigma)
}
