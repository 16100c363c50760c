//! Diagnostics emitted by the integrators for the host to log or surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::WarningLevel;
use crate::throttle::Throttle;

/// A non-fatal condition encountered during a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimWarning {
    /// A throttle transition hit the step cap and was cut short.
    TransitionTruncated {
        from: Throttle,
        to: Throttle,
        steps: u32,
        speed: f64,
    },
    /// A launch angle never landed within the step bound; the sweep stopped there.
    TrajectoryUnbounded { angle_rad: f64, steps: u32 },
}

impl SimWarning {
    pub fn level(&self) -> WarningLevel {
        match self {
            SimWarning::TransitionTruncated { .. } => WarningLevel::Warning,
            SimWarning::TrajectoryUnbounded { .. } => WarningLevel::Info,
        }
    }
}

impl fmt::Display for SimWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimWarning::TransitionTruncated {
                from,
                to,
                steps,
                speed,
            } => write!(
                f,
                "throttle {} -> {} did not settle after {steps} steps (speed {speed:.3})",
                from.notch(),
                to.notch()
            ),
            SimWarning::TrajectoryUnbounded { angle_rad, steps } => write!(
                f,
                "launch angle {:.2}° did not land after {steps} steps",
                angle_rad.to_degrees()
            ),
        }
    }
}
