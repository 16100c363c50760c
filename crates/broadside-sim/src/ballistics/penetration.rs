//! Empirical armor penetration.

use broadside_core::constants::*;
use broadside_core::types::Shell;

/// Penetration in millimetres at `velocity` (m/s) for a shell of `caliber` (m),
/// `mass` (kg) and `krupp` armor-quality value.
pub fn penetration_mm(velocity: f64, caliber: f64, mass: f64, krupp: f64) -> f64 {
    PENETRATION_COEFFICIENT
        * velocity.powf(PENETRATION_VELOCITY_EXPONENT)
        * caliber.powf(PENETRATION_CALIBER_EXPONENT)
        * mass.powf(PENETRATION_MASS_EXPONENT)
        * (krupp / REFERENCE_KRUPP)
}

/// Penetration of `shell` striking at `velocity`.
///
/// Only AP penetration follows impact velocity; other types keep their fixed
/// value, which `fixed_override` replaces when given.
pub fn shell_penetration(shell: &Shell, velocity: f64, fixed_override: Option<f64>) -> f64 {
    if shell.shell_type.is_velocity_dependent() {
        penetration_mm(velocity, shell.caliber, shell.mass, shell.krupp)
    } else {
        fixed_override.unwrap_or(shell.penetration)
    }
}
