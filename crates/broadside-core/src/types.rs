//! Simulation input records supplied by the game-data layer.

use serde::{Deserialize, Serialize};

use crate::enums::{ShellType, ShipClass};
use crate::error::SimError;

/// Hull propulsion figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    /// Base maximum speed (knots).
    pub max_speed: f64,
    /// Displacement (tonnes).
    pub tonnage: f64,
    /// Engine power (hp).
    pub engine_power: f64,
}

/// Engine module figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    /// Fractional speed bonus (0.05 = +5%).
    pub speed_coef: f64,
    /// Seconds to reach full forward power.
    pub forward_up_time: f64,
    /// Seconds to reach full backward power.
    pub backward_up_time: f64,
    /// Forward forsage power multiplier.
    pub forward_forsage: f64,
    /// Backward forsage power multiplier.
    pub backward_forsage: f64,
    /// Speed below which forward forsage is active (knots).
    pub forward_forsage_max_speed: f64,
    /// Speed below which backward forsage is active (knots).
    pub backward_forsage_max_speed: f64,
}

/// Multipliers layered onto the base engine numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationModifiers {
    pub speed: f64,
    pub forward_up_time: f64,
    pub backward_up_time: f64,
    pub forward_forsage: f64,
    pub backward_forsage: f64,
    pub forward_forsage_max_speed: f64,
    pub backward_forsage_max_speed: f64,
}

impl Default for AccelerationModifiers {
    fn default() -> Self {
        Self {
            speed: 1.0,
            forward_up_time: 1.0,
            backward_up_time: 1.0,
            forward_forsage: 1.0,
            backward_forsage: 1.0,
            forward_forsage_max_speed: 1.0,
            backward_forsage_max_speed: 1.0,
        }
    }
}

/// Absolute overrides from speed boost consumables. Zero means inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedBoostModifiers {
    pub forward_up_time: f64,
    pub backward_up_time: f64,
    pub forward_forsage: f64,
    pub backward_forsage: f64,
    pub forward_forsage_max_speed: f64,
    pub backward_forsage_max_speed: f64,
}

/// Everything the propulsion integrator needs about one ship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipPropulsion {
    /// Game ship index, e.g. "PASB018".
    pub index: String,
    pub class: ShipClass,
    pub hull: Hull,
    pub engine: Engine,
    pub modifiers: AccelerationModifiers,
    pub speed_boost: SpeedBoostModifiers,
}

impl ShipPropulsion {
    /// Reject hull figures the integrator cannot work with.
    pub fn validate(&self) -> Result<(), SimError> {
        let hull = &self.hull;
        if hull.max_speed <= 0.0 {
            return Err(SimError::InvalidHull("max speed must be positive"));
        }
        if hull.tonnage <= 0.0 {
            return Err(SimError::InvalidHull("tonnage must be positive"));
        }
        if hull.engine_power <= 0.0 {
            return Err(SimError::InvalidHull("engine power must be positive"));
        }
        if self.engine.forward_up_time <= 0.0 || self.engine.backward_up_time <= 0.0 {
            return Err(SimError::InvalidHull("engine up-time must be positive"));
        }
        Ok(())
    }
}

/// Artillery shell ballistic figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    /// Muzzle velocity (m/s).
    pub muzzle_velocity: f64,
    /// Caliber (m).
    pub caliber: f64,
    /// Mass (kg).
    pub mass: f64,
    /// Air drag coefficient.
    pub air_drag: f64,
    /// Krupp armor-quality constant.
    pub krupp: f64,
    pub shell_type: ShellType,
    /// Fixed penetration (mm) for types that do not derive it from velocity.
    pub penetration: f64,
}

impl Shell {
    /// Reject shells that would break the trajectory integrator.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.muzzle_velocity <= 0.0 {
            return Err(SimError::InvalidShell("muzzle velocity must be positive"));
        }
        if self.caliber <= 0.0 {
            return Err(SimError::InvalidShell("caliber must be positive"));
        }
        if self.mass <= 0.0 {
            return Err(SimError::InvalidShell("mass must be positive"));
        }
        if self.air_drag < 0.0 {
            return Err(SimError::InvalidShell("air drag must not be negative"));
        }
        Ok(())
    }
}
