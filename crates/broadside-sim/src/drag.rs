//! Drag models shared by the propulsion and trajectory integrators.

use std::f64::consts::PI;

/// Quadratic hull drag opposing the current speed.
///
/// The forward or reverse speed/power pair is picked by the sign of `speed`,
/// not by the throttle notch being steered toward.
pub fn hull_drag(
    speed: f64,
    max_forward_speed: f64,
    max_reverse_speed: f64,
    max_power_forward: f64,
    max_power_backward: f64,
) -> f64 {
    let (max_speed, max_power) = if speed >= 0.0 {
        (max_forward_speed, max_power_forward)
    } else {
        (max_reverse_speed, max_power_backward)
    };
    -speed * speed.abs() / (max_speed * max_speed) * max_power
}

/// Projectile drag constant `k`; deceleration is `k * rho * v * |v|`.
pub fn projectile_drag_constant(air_drag: f64, caliber: f64, mass: f64) -> f64 {
    let radius = caliber / 2.0;
    0.5 * air_drag * radius * radius * PI / mass
}
