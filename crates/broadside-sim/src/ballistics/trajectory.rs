//! Trajectory integrator: range → outcome table for one shell.
//!
//! Sweeps the launch angle table in ascending order, flying each angle
//! through the standard atmosphere with explicit Euler steps. The sweep
//! stops at the first angle whose range overshoots the (overscanned) max
//! range or fails to beat the previous angle, so the table only holds the
//! rising branch of the range curve.

use glam::DVec2;

use broadside_core::constants::*;
use broadside_core::error::SimError;
use broadside_core::events::SimWarning;
use broadside_core::state::{BallisticOutcome, BallisticTable};
use broadside_core::types::Shell;

use super::angles::AngleTable;
use super::atmosphere;
use super::penetration::shell_penetration;
use crate::drag::projectile_drag_constant;

/// Result of flying a single launch angle.
#[derive(Debug, Clone, PartialEq)]
pub enum Flight {
    Landed {
        /// Position of the first step below the waterline.
        impact: DVec2,
        velocity: DVec2,
        /// Real (unscaled) flight time (s).
        time: f64,
        path: Vec<DVec2>,
    },
    /// Still airborne after `MAX_TRAJECTORY_STEPS`.
    Unbounded { steps: u32 },
}

/// Integrate one shot launched at `angle` radians until it drops below y = 0.
///
/// Position advances with the velocity from before the drag/gravity update.
pub fn fly(shell: &Shell, drag_constant: f64, angle: f64) -> Flight {
    let dt = TRAJECTORY_DT;
    let mut position = DVec2::ZERO;
    let mut velocity = DVec2::new(angle.cos(), angle.sin()) * shell.muzzle_velocity;
    let mut time = 0.0;
    let mut path = vec![position];
    let mut steps = 0;

    while position.y >= 0.0 {
        if steps == MAX_TRAJECTORY_STEPS {
            return Flight::Unbounded { steps };
        }

        let rho = atmosphere::density(position.y);
        let speed = velocity.length();
        let previous = velocity;
        velocity.x -= dt * drag_constant * rho * previous.x * speed;
        velocity.y -= dt * (GRAVITY + drag_constant * rho * previous.y * speed);

        position += dt * previous;
        time += dt;
        steps += 1;

        if position.y >= 0.0 {
            path.push(position);
        }
    }

    Flight::Landed {
        impact: position,
        velocity,
        time,
        path,
    }
}

/// Build the ballistic table for `shell` out to 1.5 × `max_range`.
///
/// `penetration_override` replaces the fixed penetration of non-AP shells.
pub fn simulate(
    shell: &Shell,
    max_range: f64,
    penetration_override: Option<f64>,
) -> Result<BallisticTable, SimError> {
    shell.validate()?;
    Ok(simulate_with_angles(
        shell,
        max_range,
        penetration_override,
        AngleTable::standard(),
    ))
}

/// Sweep an explicit angle table. Angles must be ascending.
pub fn simulate_with_angles(
    shell: &Shell,
    max_range: f64,
    penetration_override: Option<f64>,
    angles: &AngleTable,
) -> BallisticTable {
    let scaled_max_range = max_range * MAX_RANGE_OVERSCAN;
    let drag_constant = projectile_drag_constant(shell.air_drag, shell.caliber, shell.mass);

    let mut rows = vec![BallisticOutcome {
        range: 0.0,
        penetration: shell_penetration(shell, shell.muzzle_velocity, penetration_override),
        impact_velocity: shell.muzzle_velocity,
        flight_time: 0.0,
        impact_angle: 0.0,
        path: Vec::new(),
    }];
    let mut warnings = Vec::new();
    let mut last_range = 0.0;

    for &angle in angles.angles() {
        let (impact, velocity, time, path) = match fly(shell, drag_constant, angle) {
            Flight::Landed {
                impact,
                velocity,
                time,
                path,
            } => (impact, velocity, time, path),
            Flight::Unbounded { steps } => {
                warnings.push(SimWarning::TrajectoryUnbounded {
                    angle_rad: angle,
                    steps,
                });
                break;
            }
        };

        let range = impact.x;
        if range > scaled_max_range || range <= last_range {
            break;
        }
        last_range = range;

        let impact_velocity = velocity.length();
        rows.push(BallisticOutcome {
            range,
            penetration: shell_penetration(shell, impact_velocity, penetration_override),
            impact_velocity,
            flight_time: time / TIME_SCALE,
            impact_angle: velocity.y.abs().atan2(velocity.x.abs()).to_degrees(),
            path,
        });
    }

    BallisticTable::from_rows(rows, warnings)
}
