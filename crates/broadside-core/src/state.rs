//! Simulation outputs handed to the presentation layer.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::WarningLevel;
use crate::events::SimWarning;

/// One propulsion integration sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerationPoint {
    /// Speed (knots, negative when reversing).
    pub speed: f64,
    /// Elapsed time since the start of the command sequence (seconds).
    pub time: f64,
}

/// Speed trace for a whole throttle sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerationData {
    /// Settling time of each transition, in command order (seconds).
    pub time_for_gear: Vec<f64>,
    /// Every integration sample across all transitions; time is cumulative.
    pub points: Vec<AccelerationPoint>,
    pub warnings: Vec<SimWarning>,
}

impl AccelerationData {
    /// True if no transition was cut short by the step cap.
    pub fn is_complete(&self) -> bool {
        self.warnings
            .iter()
            .all(|warning| warning.level() < WarningLevel::Warning)
    }

    pub fn total_time(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.time)
    }
}

/// Outcome of one launch angle, keyed by the range it achieved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallisticOutcome {
    /// Horizontal range at landing (m).
    pub range: f64,
    /// Penetration at impact (mm).
    pub penetration: f64,
    /// Impact velocity (m/s).
    pub impact_velocity: f64,
    /// Flight time in game seconds.
    pub flight_time: f64,
    /// Impact angle below horizontal (degrees).
    pub impact_angle: f64,
    /// Trajectory points (x = range, y = altitude), metres.
    pub path: Vec<DVec2>,
}

/// Sparse range → outcome lookup table, ranges strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallisticTable {
    rows: Vec<BallisticOutcome>,
    warnings: Vec<SimWarning>,
}

impl BallisticTable {
    /// Build a table from rows already in strictly increasing range order.
    pub fn from_rows(rows: Vec<BallisticOutcome>, warnings: Vec<SimWarning>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].range < w[1].range));
        Self { rows, warnings }
    }

    pub fn rows(&self) -> &[BallisticOutcome] {
        &self.rows
    }

    pub fn warnings(&self) -> &[SimWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Furthest range in the table (m).
    pub fn max_range(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.range)
    }

    /// First row whose range is at least `range`.
    pub fn first_at_or_beyond(&self, range: f64) -> Option<&BallisticOutcome> {
        let idx = self.rows.partition_point(|row| row.range < range);
        self.rows.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BallisticOutcome> {
        self.rows.iter()
    }
}

/// Dispersion ellipse at an aiming range with its simulated hit pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispersionEllipse {
    pub is_valid: bool,
    pub horizontal_radius: f64,
    pub vertical_radius: f64,
    /// Vertical radius projected onto the water plane.
    pub water_vertical_radius: f64,
    /// Vertical radius projected onto the plane perpendicular to the water.
    pub perpendicular_vertical_radius: f64,
    pub half_horizontal_radius: f64,
    pub half_vertical_radius: f64,
    pub half_water_vertical_radius: f64,
    pub half_perpendicular_vertical_radius: f64,
    /// Hits on the real impact plane.
    pub real_points: Vec<DVec2>,
    /// Hits projected onto the water plane.
    pub water_points: Vec<DVec2>,
    /// Hits projected onto the perpendicular plane.
    pub perpendicular_points: Vec<DVec2>,
}

impl DispersionEllipse {
    /// Degenerate result for an aiming range the ballistic table does not reach.
    pub fn invalid() -> Self {
        Self::default()
    }
}
