//! Dispersion statistics: projected ellipse radii, half-hit radii and a
//! Monte-Carlo hit pattern at one aiming range.

pub mod formula;
pub mod normal;
pub mod sampling;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use broadside_core::constants::DEFAULT_SHOT_COUNT;
use broadside_core::error::SimError;
use broadside_core::state::{BallisticTable, DispersionEllipse};
use broadside_core::types::Shell;

use crate::ballistics::trajectory;

pub use formula::{DispersionFormula, GunDispersion};
pub use sampling::AdjustedGaussian;

/// Inputs for one dispersion query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionParams {
    /// Gun max range (m).
    pub max_range: f64,
    /// Range the guns are aimed at (m).
    pub aiming_range: f64,
    /// Multiplier on the horizontal radius (upgrades, skills).
    pub modifier: f64,
    /// Grouping parameter; the aim offset has standard deviation 1/sigma.
    pub sigma: f64,
    pub shot_count: usize,
}

impl DispersionParams {
    pub fn new(max_range: f64, aiming_range: f64, sigma: f64) -> Self {
        Self {
            max_range,
            aiming_range,
            modifier: 1.0,
            sigma,
            shot_count: DEFAULT_SHOT_COUNT,
        }
    }
}

/// Build the ballistic table for `shell` and compute the ellipse from it.
pub fn compute<F, R>(
    formula: &F,
    shell: &Shell,
    params: &DispersionParams,
    rng: &mut R,
) -> Result<DispersionEllipse, SimError>
where
    F: DispersionFormula + ?Sized,
    R: Rng + ?Sized,
{
    let table = trajectory::simulate(shell, params.max_range, None)?;
    compute_with_table(formula, &table, params, rng)
}

/// Compute the ellipse against an existing ballistic table.
///
/// An aiming range past the end of the table gives `DispersionEllipse::invalid()`.
pub fn compute_with_table<F, R>(
    formula: &F,
    table: &BallisticTable,
    params: &DispersionParams,
    rng: &mut R,
) -> Result<DispersionEllipse, SimError>
where
    F: DispersionFormula + ?Sized,
    R: Rng + ?Sized,
{
    let offset = AdjustedGaussian::new(params.sigma)?;

    // The range-0 row has no impact angle to project with.
    let Some(row) = table.first_at_or_beyond(params.aiming_range.max(f64::MIN_POSITIVE)) else {
        return Ok(DispersionEllipse::invalid());
    };

    let (horizontal_radius, vertical_radius) =
        formula.dispersion(params.max_range, params.modifier, params.aiming_range);

    let impact_angle = row.impact_angle.to_radians();
    let water_projection = impact_angle.sin();
    let perpendicular_projection = impact_angle.cos();
    let water_vertical_radius = vertical_radius / water_projection;
    let perpendicular_vertical_radius = vertical_radius / perpendicular_projection;

    let half_ratio = normal::half_hits_ratio(params.sigma);

    let mut real_points = Vec::with_capacity(params.shot_count);
    let mut water_points = Vec::with_capacity(params.shot_count);
    let mut perpendicular_points = Vec::with_capacity(params.shot_count);
    for _ in 0..params.shot_count {
        let hit = sampling::sample_hit(rng, &offset, horizontal_radius, vertical_radius);
        real_points.push(hit);
        water_points.push(DVec2::new(hit.x, hit.y / water_projection));
        perpendicular_points.push(DVec2::new(hit.x, hit.y / perpendicular_projection));
    }

    Ok(DispersionEllipse {
        is_valid: true,
        horizontal_radius,
        vertical_radius,
        water_vertical_radius,
        perpendicular_vertical_radius,
        half_horizontal_radius: horizontal_radius * half_ratio,
        half_vertical_radius: vertical_radius * half_ratio,
        half_water_vertical_radius: water_vertical_radius * half_ratio,
        half_perpendicular_vertical_radius: perpendicular_vertical_radius * half_ratio,
        real_points,
        water_points,
        perpendicular_points,
    })
}
