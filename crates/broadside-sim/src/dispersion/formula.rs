//! Dispersion radius formulas.
//!
//! The statistics engine only needs `(horizontal, vertical)` radii at a range;
//! `GunDispersion` is the stock implementation of the game's gun formula.

use serde::{Deserialize, Serialize};

use broadside_core::constants::BW_TO_METERS;

/// Source of dispersion ellipse radii (metres).
pub trait DispersionFormula {
    /// Horizontal dispersion radius at `range`, scaled by `modifier`.
    fn horizontal_dispersion(&self, range: f64, modifier: f64) -> f64;

    /// Horizontal and vertical radii at `range` for a gun reaching `max_range`.
    fn dispersion(&self, max_range: f64, modifier: f64, range: f64) -> (f64, f64);
}

/// Gun dispersion figures as stored in game data.
///
/// Radii and `ideal_distance` are in BigWorld units (30 m); `taper_dist` is
/// in metres. The vertical radius is the horizontal one times a coefficient
/// interpolated from zero range to `delim * max_range` and on to max range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GunDispersion {
    pub ideal_radius: f64,
    pub min_radius: f64,
    pub ideal_distance: f64,
    pub taper_dist: f64,
    pub radius_on_zero: f64,
    pub radius_on_delim: f64,
    pub radius_on_max: f64,
    pub delim: f64,
}

impl GunDispersion {
    /// Vertical-to-horizontal ratio at `range`.
    pub fn vertical_coefficient(&self, max_range: f64, range: f64) -> f64 {
        let delim_dist = self.delim * max_range;
        if range < delim_dist {
            self.radius_on_zero
                + (self.radius_on_delim - self.radius_on_zero) * (range / delim_dist)
        } else if max_range > delim_dist {
            self.radius_on_delim
                + (self.radius_on_max - self.radius_on_delim) * (range - delim_dist)
                    / (max_range - delim_dist)
        } else {
            self.radius_on_delim
        }
    }
}

impl DispersionFormula for GunDispersion {
    fn horizontal_dispersion(&self, range: f64, modifier: f64) -> f64 {
        let x = range / BW_TO_METERS;
        let taper = self.taper_dist / BW_TO_METERS;
        let slope = (self.ideal_radius - self.min_radius) / self.ideal_distance;
        let horizontal = if taper > 0.0 && x <= taper {
            x * slope + self.min_radius * (x / taper)
        } else {
            x * slope + self.min_radius
        };
        horizontal * BW_TO_METERS * modifier
    }

    fn dispersion(&self, max_range: f64, modifier: f64, range: f64) -> (f64, f64) {
        let horizontal = self.horizontal_dispersion(range, modifier);
        (
            horizontal,
            horizontal * self.vertical_coefficient(max_range, range),
        )
    }
}
