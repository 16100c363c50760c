//! Launch angle table shared by every trajectory sweep.

use once_cell::sync::Lazy;

use broadside_core::constants::{ANGLE_COUNT, ANGLE_STEP_RAD};

static STANDARD: Lazy<AngleTable> =
    Lazy::new(|| AngleTable::evenly_spaced(ANGLE_COUNT, ANGLE_STEP_RAD));

/// Ascending launch angles in radians. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTable {
    angles: Vec<f64>,
}

impl AngleTable {
    /// `count` angles starting at zero, `step` radians apart.
    pub fn evenly_spaced(count: usize, step: f64) -> Self {
        Self {
            angles: (0..count).map(|i| i as f64 * step).collect(),
        }
    }

    /// The 600-angle table (0° to ~60° in 0.1° steps), built on first use.
    pub fn standard() -> &'static AngleTable {
        &STANDARD
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}
