//! Simulation facade.
//!
//! `Simulator` owns the run configuration and the random source used by the
//! dispersion sampler. The propulsion and trajectory integrators are pure;
//! only dispersion draws from the RNG, so a fixed seed reproduces every
//! point cloud exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use broadside_core::constants::DEFAULT_SHOT_COUNT;
use broadside_core::error::SimError;
use broadside_core::state::{AccelerationData, BallisticTable, DispersionEllipse};
use broadside_core::types::{Shell, ShipPropulsion};

use crate::ballistics::trajectory;
use crate::dispersion::{self, DispersionFormula, DispersionParams};
use crate::propulsion;

/// Configuration for a simulator instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Monte-Carlo shots per dispersion query.
    pub shot_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shot_count: DEFAULT_SHOT_COUNT,
        }
    }
}

/// Entry point for the host application.
pub struct Simulator {
    config: SimConfig,
    rng: ChaCha8Rng,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Speed trace for `ship` following the throttle notches in `notches`.
    pub fn acceleration(
        &self,
        ship: &ShipPropulsion,
        notches: &[i32],
    ) -> Result<AccelerationData, SimError> {
        propulsion::simulate(ship, notches)
    }

    /// Range-keyed outcome table for `shell` out to 1.5 × `max_range`.
    pub fn ballistics(
        &self,
        shell: &Shell,
        max_range: f64,
        penetration_override: Option<f64>,
    ) -> Result<BallisticTable, SimError> {
        trajectory::simulate(shell, max_range, penetration_override)
    }

    /// Dispersion ellipse at `aiming_range` with the configured shot count.
    ///
    /// `modifier` scales the radii the formula returns (1.0 for stock guns).
    pub fn dispersion<F: DispersionFormula + ?Sized>(
        &mut self,
        formula: &F,
        shell: &Shell,
        max_range: f64,
        aiming_range: f64,
        modifier: f64,
        sigma: f64,
    ) -> Result<DispersionEllipse, SimError> {
        let params = DispersionParams {
            modifier,
            shot_count: self.config.shot_count,
            ..DispersionParams::new(max_range, aiming_range, sigma)
        };
        dispersion::compute(formula, shell, &params, &mut self.rng)
    }

    /// Dispersion against a table from an earlier `ballistics` call.
    ///
    /// `params.shot_count` is used as given.
    pub fn dispersion_with_table<F: DispersionFormula + ?Sized>(
        &mut self,
        formula: &F,
        table: &BallisticTable,
        params: &DispersionParams,
    ) -> Result<DispersionEllipse, SimError> {
        dispersion::compute_with_table(formula, table, params, &mut self.rng)
    }
}
